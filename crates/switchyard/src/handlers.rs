//! Built-in handlers

use async_trait::async_trait;
use switchyard_core::{Handler, HandlerMetadata, Next, Result, TurnContext};
use tracing::info;

/// State key under which [`TraceHandler`] records visited categories
pub const TRACE_KEY: &str = "switchyard.trace";

/// Logs each category it is reached in and records it under [`TRACE_KEY`]
///
/// Always continues. Register one shared instance on every category to see
/// exactly how far a turn got.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceHandler;

#[async_trait]
impl Handler for TraceHandler {
    async fn handle(&self, ctx: &mut TurnContext, next: Next<'_>) -> Result<()> {
        let category = next.category();
        info!(
            turn_id = %ctx.id(),
            %category,
            activity_type = ctx.activity().kind.as_deref().unwrap_or("<none>"),
            "reached category"
        );

        let mut visited: Vec<String> = ctx.get(TRACE_KEY)?.unwrap_or_default();
        visited.push(category.to_string());
        ctx.insert(TRACE_KEY, visited)?;

        next.run(ctx).await
    }

    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata {
            name: Some("TraceHandler".to_string()),
            description: Some("Logs and records every category reached".to_string()),
        }
    }
}

/// Queues a fixed text reply, then continues
#[derive(Debug, Clone)]
pub struct ReplyHandler {
    text: String,
}

impl ReplyHandler {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Handler for ReplyHandler {
    async fn handle(&self, ctx: &mut TurnContext, next: Next<'_>) -> Result<()> {
        ctx.send_text(self.text.clone());
        next.run(ctx).await
    }

    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata {
            name: Some("ReplyHandler".to_string()),
            description: Some(format!("Replies with {:?}", self.text)),
        }
    }
}

/// Ends the turn without running its continuation
#[derive(Debug, Clone, Copy, Default)]
pub struct StopHandler;

#[async_trait]
impl Handler for StopHandler {
    async fn handle(&self, ctx: &mut TurnContext, next: Next<'_>) -> Result<()> {
        info!(turn_id = %ctx.id(), category = %next.category(), "turn stopped");
        Ok(())
    }

    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata {
            name: Some("StopHandler".to_string()),
            ..Default::default()
        }
    }
}
