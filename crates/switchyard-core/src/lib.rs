//! # Switchyard Core Engine
//!
//! Category dispatch for inbound activities: a registry of ordered handler
//! chains keyed by [`Category`], a fixed resolver mapping one [`Activity`] to
//! its nested [`Route`], and a continuation-passing dispatch engine.

pub mod activity;
pub mod category;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod registry;
pub mod resolver;

pub use activity::{
    Activity, ActivityType, CONTINUE_CONVERSATION_EVENT, CREATE_CONVERSATION_EVENT,
    ChannelAccount, ConversationAccount, MessageReaction,
};
pub use category::Category;
pub use context::{TurnContext, TurnId};
pub use dispatch::{Next, dispatch, dispatch_resolved, dispatch_route};
pub use error::{CoreError, Result};
pub use handler::{Handler, HandlerExt, HandlerMetadata, Noop, SharedHandler, Terminal};
pub use registry::HandlerRegistry;
pub use resolver::{Route, resolve};
