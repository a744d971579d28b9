//! Event dispatcher port.

use async_trait::async_trait;

use crate::domain::events::UserEvent;
use crate::errors::DomainResult;

/// Port for delivering domain events to listeners
///
/// Dispatch happens after the owning transaction commits; delivery is
/// at-least-once, so listeners must tolerate redelivery.
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// Delivers a single event
    async fn dispatch(&self, event: &UserEvent) -> DomainResult<()>;
}

/// Dispatcher that drops every event
///
/// For deployments without listeners wired up.
pub struct NoOpEventDispatcher;

#[async_trait]
impl EventDispatcher for NoOpEventDispatcher {
    async fn dispatch(&self, _event: &UserEvent) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_noop_dispatcher_accepts_everything() {
        let dispatcher = NoOpEventDispatcher;
        let event = UserEvent::registered(Uuid::new_v4(), "alice", "alice@example.com");

        assert!(dispatcher.dispatch(&event).await.is_ok());
    }
}
