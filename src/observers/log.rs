//! # Simple printing observer for debugging and demos.
//!
//! [`DebugPrinter`] prints every event to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [event] Avatar { id: "u1", image_data: None }
//! [event] Created { post_id: "p1" }
//! ```

use std::fmt::Debug;

use async_trait::async_trait;

use super::Observe;

/// Simple stdout printing observer.
///
/// Enabled via the `logging` feature. Works over any payload with a `Debug`
/// representation.
///
/// Not intended for production use - implement a custom [`Observe`] for
/// structured logging or metrics collection.
pub struct DebugPrinter;

#[async_trait]
impl<T> Observe<T> for DebugPrinter
where
    T: Debug + Send + Sync + 'static,
{
    async fn on_event(&self, event: &T) {
        println!("[event] {event:?}");
    }

    fn name(&self) -> &'static str {
        "debug_printer"
    }
}
