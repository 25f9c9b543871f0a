//! # Feed-update facade.
//!
//! Lets any screen request a feed patch after a post mutation. Requests
//! pass through unchanged; the feed container keys pending work on
//! [`FeedUpdateRequest::post_id`](crate::FeedUpdateRequest::post_id), so two
//! requests for the same post can be deduplicated or applied in arrival
//! order by the consumer.

use crate::channel::{Publisher, Subscription};
use crate::events::FeedUpdateRequest;

use super::Service;

/// Publish/observe capability for pending feed mutations.
pub struct FeedService {
    inner: Service<FeedUpdateRequest>,
}

impl FeedService {
    /// Creates the facade with a fresh open channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Service::new(),
        }
    }

    /// Requests a feed patch. Fire-and-forget.
    pub fn publish(&self, request: FeedUpdateRequest) {
        self.inner.publish(request);
    }

    /// Returns the cursor the feed container iterates for its lifetime.
    #[must_use]
    pub fn observe(&self) -> Subscription<FeedUpdateRequest> {
        self.inner.observe()
    }

    /// Write-only handle for screens that only ever request patches.
    #[must_use]
    pub fn publisher(&self) -> Publisher<FeedUpdateRequest> {
        self.inner.publisher()
    }

    /// Explicit shutdown; queued requests still drain.
    pub fn close(&self) {
        self.inner.close();
    }
}

impl Default for FeedService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn test_requests_keep_arrival_order_per_post() {
        let feed = FeedService::new();
        let mut sub = feed.observe();

        feed.publish(FeedUpdateRequest::LikeToggled {
            post_id: "p1".into(),
            liked: true,
        });
        feed.publish(FeedUpdateRequest::CommentAdded {
            post_id: "p2".into(),
            comment_id: "c1".into(),
        });
        feed.publish(FeedUpdateRequest::LikeToggled {
            post_id: "p1".into(),
            liked: false,
        });
        feed.close();

        // Consumer-side dedup: keep only the latest request per post id.
        let mut latest: HashMap<String, FeedUpdateRequest> = HashMap::new();
        while let Some(req) = sub.recv().await {
            latest.insert(req.post_id().to_string(), req);
        }

        assert_eq!(latest.len(), 2);
        assert_eq!(
            latest.get("p1"),
            Some(&FeedUpdateRequest::LikeToggled {
                post_id: "p1".into(),
                liked: false,
            })
        );
    }
}
