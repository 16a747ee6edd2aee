//! Handler and terminal traits
//!
//! A [`Handler`] is the unit of behavior registered against one category.
//! It receives the turn context and a [`Next`] continuation, and the chain
//! only proceeds if the handler runs that continuation.

use crate::{Next, Result, TurnContext};
use async_trait::async_trait;
use std::sync::Arc;

/// Behavior registered against a category
///
/// Returning without calling [`Next::run`] stops the chain and every stage
/// nested after it. That is the only veto mechanism and it is not an error.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle the turn, optionally continuing with `next`
    async fn handle(&self, ctx: &mut TurnContext, next: Next<'_>) -> Result<()>;

    /// Optional method to get handler metadata
    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata::default()
    }
}

/// Metadata about a handler
#[derive(Debug, Clone, Default)]
pub struct HandlerMetadata {
    /// Human-readable name of the handler
    pub name: Option<String>,
    /// Description of what this handler does
    pub description: Option<String>,
}

/// Arc-wrapped handler for sharing one instance across categories and turns
pub type SharedHandler = Arc<dyn Handler>;

/// Extension trait for handler conversion
pub trait HandlerExt: Handler {
    /// Convert to a shared handler
    fn shared(self) -> SharedHandler
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Handler> HandlerExt for T {}

/// The continuation run once a dispatched route is exhausted
#[async_trait]
pub trait Terminal: Send + Sync {
    async fn complete(&self, ctx: &mut TurnContext) -> Result<()>;
}

/// Terminal that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

#[async_trait]
impl Terminal for Noop {
    async fn complete(&self, _ctx: &mut TurnContext) -> Result<()> {
        Ok(())
    }
}
