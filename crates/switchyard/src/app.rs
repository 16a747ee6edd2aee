//! Application layer for Switchyard
//!
//! [`ActivityHandler`] owns a [`HandlerRegistry`] and runs each inbound
//! activity through the route the resolver picks for it.

use std::str::FromStr;

use strum::IntoEnumIterator;
use switchyard_core::{
    Activity, Category, Handler, HandlerExt, HandlerRegistry, Noop, Result as CoreResult, Route,
    SharedHandler, TurnContext, dispatch_resolved, resolve,
};
use tracing::debug;

use crate::config::SwitchyardConfig;
use crate::error::{Result, SwitchyardError};
use crate::handlers::{ReplyHandler, TraceHandler};

/// Metadata about the activity handler
#[derive(Debug, Clone)]
pub struct AppMetadata {
    pub name: String,
    pub version: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "switchyard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Registration and execution surface for activities
///
/// Register handlers during setup through the `on_*` methods, then share
/// the handler (for example behind an `Arc`) and call [`run`](Self::run)
/// once per activity. `run` only borrows `&self`, so independent turns can
/// be dispatched concurrently.
#[derive(Debug, Default)]
pub struct ActivityHandler {
    registry: HandlerRegistry,
    metadata: AppMetadata,
}

impl ActivityHandler {
    /// Create a handler with no registrations
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named handler
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            registry: HandlerRegistry::new(),
            metadata: AppMetadata {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Build a handler from configuration
    ///
    /// With `trace_categories` set, a single [`TraceHandler`] heads every
    /// chain. Configured replies are appended after it.
    pub fn from_config(config: &SwitchyardConfig) -> Result<Self> {
        let mut app = Self::new();

        if config.trace_categories {
            let trace = TraceHandler.shared();
            for category in Category::iter() {
                app.on_shared(category, trace.clone());
            }
        }

        for (name, text) in &config.replies {
            let category = Category::from_str(name)
                .map_err(|_| SwitchyardError::Config(format!("Unknown category: {}", name)))?;
            app.on(category, ReplyHandler::new(text.clone()));
        }

        Ok(app)
    }

    /// Append `handler` to the chain for `category`
    pub fn on(&mut self, category: Category, handler: impl Handler + 'static) -> &mut Self {
        self.registry.register(category, handler);
        self
    }

    /// Append a shared handler to the chain for `category`
    pub fn on_shared(&mut self, category: Category, handler: SharedHandler) -> &mut Self {
        self.registry.register_shared(category, handler);
        self
    }

    /// Resolve, then dispatch the whole route for the activity in `ctx`
    ///
    /// Returns once every stage down to the Dialog chain has completed or a
    /// handler has declined to continue. Reaction-added and reaction-removed
    /// chains run independently of each other; Dialog runs once after them
    /// unless both were stopped. A handler error is returned as is.
    pub async fn run(&self, ctx: &mut TurnContext) -> CoreResult<()> {
        let route = resolve(ctx.activity());
        debug!(
            app = %self.metadata.name,
            version = %self.metadata.version,
            turn_id = %ctx.id(),
            %route,
            "running turn"
        );
        dispatch_resolved(&self.registry, ctx, &route, &Noop).await
    }

    /// Run `activity` in a fresh context and hand the context back
    pub async fn run_activity(&self, activity: Activity) -> CoreResult<TurnContext> {
        let mut ctx = TurnContext::new(activity);
        self.run(&mut ctx).await?;
        Ok(ctx)
    }

    /// The route `activity` would take
    pub fn route(&self, activity: &Activity) -> Route {
        resolve(activity)
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }
}

macro_rules! on_category {
    ($($(#[$doc:meta])* $method:ident => $category:ident;)*) => {
        impl ActivityHandler {
            $(
                $(#[$doc])*
                pub fn $method(&mut self, handler: impl Handler + 'static) -> &mut Self {
                    self.on(Category::$category, handler)
                }
            )*
        }
    };
}

on_category! {
    /// Runs first for every activity
    on_turn => Turn;
    on_message => Message;
    on_contact_relation_update => ContactRelationUpdate;
    on_conversation_update => ConversationUpdate;
    /// Conversation update with a non-empty members-added list
    on_members_added => ConversationMembersAdded;
    /// Conversation update with no members added but some removed
    on_members_removed => ConversationMembersRemoved;
    on_end_of_conversation => EndOfConversation;
    on_event => Event;
    /// Event named `createConversation`
    on_create_conversation => CreateConversation;
    /// Event named `continueConversation`
    on_continue_conversation => ContinueConversation;
    on_invoke => Invoke;
    on_installation_update => InstallationUpdate;
    on_message_delete => MessageDelete;
    on_message_update => MessageUpdate;
    on_message_reaction => MessageReaction;
    on_reactions_added => MessageReactionAdded;
    on_reactions_removed => MessageReactionRemoved;
    on_typing => Typing;
    on_handoff => Handoff;
    /// Missing or unknown activity type
    on_unrecognized_activity_type => UnrecognizedActivityType;
    /// Runs last on every route that was not stopped
    on_dialog => Dialog;
}
