//! # Upload facade.
//!
//! Connects the composer and settings screens (producers) to the background
//! upload pipeline's feed container (consumer). Tasks pass through
//! unchanged; the consumer keys progress display on
//! [`UploadTask::id`](crate::UploadTask::id).

use crate::channel::{Publisher, Subscription};
use crate::events::UploadTask;

use super::Service;

/// Publish/observe capability for pending media uploads.
pub struct UploadService {
    inner: Service<UploadTask>,
}

impl UploadService {
    /// Creates the facade with a fresh open channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Service::new(),
        }
    }

    /// Queues one upload task. Fire-and-forget.
    pub fn publish(&self, task: UploadTask) {
        self.inner.publish(task);
    }

    /// Returns the cursor the upload worker iterates for its lifetime.
    #[must_use]
    pub fn observe(&self) -> Subscription<UploadTask> {
        self.inner.observe()
    }

    /// Write-only handle for screens that only ever enqueue.
    #[must_use]
    pub fn publisher(&self) -> Publisher<UploadTask> {
        self.inner.publisher()
    }

    /// Explicit shutdown; queued tasks still drain.
    pub fn close(&self) {
        self.inner.close();
    }
}

impl Default for UploadService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn test_avatar_then_post_arrive_in_publish_order() {
        let uploads = UploadService::new();
        let mut sub = uploads.observe();

        uploads.publish(UploadTask::Avatar {
            id: "u1".into(),
            image_data: None,
        });
        uploads.publish(UploadTask::Post {
            post_id: "p1".into(),
            caption: "hi".into(),
            files: vec![],
        });
        uploads.close();

        let mut ids = Vec::new();
        while let Some(task) = sub.recv().await {
            ids.push(task.id().to_string());
        }
        assert_eq!(ids, vec!["u1", "p1"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_observer_attached_after_close_sees_nothing() {
        let uploads = UploadService::new();
        uploads.publish(UploadTask::Avatar {
            id: "u1".into(),
            image_data: None,
        });
        uploads.close();

        // Drain through the first cursor, then attach late.
        let mut first = uploads.observe();
        assert!(first.recv().await.is_some());
        assert_eq!(first.recv().await, None);

        let mut late = uploads.observe();
        assert_eq!(late.recv().await, None);
    }
}
