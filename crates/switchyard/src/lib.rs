//! Main crate for Switchyard
//!
//! Provides [`ActivityHandler`], the registration and execution surface over
//! the core dispatch engine: one fluent `on_*` method per category and a
//! single [`ActivityHandler::run`] entry point per inbound activity.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export core types
pub use switchyard_core::{
    Activity, ActivityType, Category, ChannelAccount, ConversationAccount, CoreError, Handler,
    HandlerExt, HandlerMetadata, HandlerRegistry, MessageReaction, Next, Noop, Result, Route,
    SharedHandler, Terminal, TurnContext, TurnId, resolve,
};

// Re-export app types
pub use app::{ActivityHandler, AppMetadata};

// Re-export config types
pub use config::SwitchyardConfig;

// Re-export error types
pub use error::{Result as SwitchyardResult, SwitchyardError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::ActivityHandler;
    pub use switchyard_core::{Activity, Category, Handler, Next, TurnContext};
}
