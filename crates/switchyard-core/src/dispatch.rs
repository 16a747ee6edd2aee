//! Continuation-passing dispatch
//!
//! A route is run as a flat walk over two slices: the handlers left in the
//! current category's chain and the categories left in the route. Each
//! handler receives a [`Next`] bound to the remainder of both, so calling it
//! advances exactly one step. Empty chains are skipped in place, and nothing
//! recurses in proportion to chain length.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};

use crate::{Category, HandlerRegistry, Result, Route, SharedHandler, Terminal, TurnContext};

/// The continuation handed to a handler
///
/// Consumed by [`Next::run`], so one handler invocation can continue the
/// chain at most once. Dropping it without running is a veto.
pub struct Next<'a> {
    registry: &'a HandlerRegistry,
    category: Category,
    chain: &'a [SharedHandler],
    route: &'a [Category],
    terminal: &'a dyn Terminal,
}

impl<'a> Next<'a> {
    /// The category whose chain this continuation belongs to
    pub fn category(&self) -> Category {
        self.category
    }

    /// Categories still to be dispatched after the current chain
    pub fn remaining_route(&self) -> &'a [Category] {
        self.route
    }

    /// Continue with the next handler, the next category, or the terminal
    pub async fn run(self, ctx: &mut TurnContext) -> Result<()> {
        let Next {
            registry,
            mut category,
            mut chain,
            mut route,
            terminal,
        } = self;

        loop {
            if let Some((handler, rest)) = chain.split_first() {
                trace!(
                    turn_id = %ctx.id(),
                    %category,
                    remaining = rest.len(),
                    "invoking handler"
                );
                let next = Next {
                    registry,
                    category,
                    chain: rest,
                    route,
                    terminal,
                };
                return handler.handle(ctx, next).await;
            }

            match route.split_first() {
                Some((&stage, rest)) => {
                    category = stage;
                    chain = registry.chain_for(stage);
                    route = rest;
                    debug!(
                        turn_id = %ctx.id(),
                        %category,
                        handlers = chain.len(),
                        "dispatching category"
                    );
                }
                None => {
                    debug!(turn_id = %ctx.id(), "route completed");
                    return terminal.complete(ctx).await;
                }
            }
        }
    }
}

/// Run the chain for `category`, then `terminal`
pub async fn dispatch(
    registry: &HandlerRegistry,
    ctx: &mut TurnContext,
    category: Category,
    terminal: &dyn Terminal,
) -> Result<()> {
    dispatch_route(registry, ctx, std::slice::from_ref(&category), terminal).await
}

/// Run each category of `route` nested inside the previous one, then
/// `terminal`
///
/// A handler that never runs its continuation stops everything after it.
/// Handler errors propagate unchanged; side effects of handlers that already
/// ran are kept.
pub async fn dispatch_route(
    registry: &HandlerRegistry,
    ctx: &mut TurnContext,
    route: &[Category],
    terminal: &dyn Terminal,
) -> Result<()> {
    let Some((&first, rest)) = route.split_first() else {
        return terminal.complete(ctx).await;
    };

    let chain = registry.chain_for(first);
    debug!(
        turn_id = %ctx.id(),
        category = %first,
        handlers = chain.len(),
        "dispatching category"
    );

    Next {
        registry,
        category: first,
        chain,
        route: rest,
        terminal,
    }
    .run(ctx)
    .await
}

/// Run a resolved [`Route`], then `terminal`
///
/// The trunk is nested as in [`dispatch_route`]. Once it completes, each
/// branch category runs its own chain; a branch that stops does not keep the
/// next branch from running. The tail, and then `terminal`, follows if there
/// were no branches or at least one branch ran to completion.
pub async fn dispatch_resolved(
    registry: &HandlerRegistry,
    ctx: &mut TurnContext,
    route: &Route,
    terminal: &dyn Terminal,
) -> Result<()> {
    let fork = Fork {
        registry,
        branches: route.branches(),
        tail: route.tail(),
        terminal,
    };
    dispatch_route(registry, ctx, route.trunk(), &fork).await
}

/// Continuation of a route's trunk: the sibling branches, then the tail
struct Fork<'a> {
    registry: &'a HandlerRegistry,
    branches: &'a [Category],
    tail: &'a [Category],
    terminal: &'a dyn Terminal,
}

#[async_trait]
impl<'a> Terminal for Fork<'a> {
    async fn complete(&self, ctx: &mut TurnContext) -> Result<()> {
        if !self.branches.is_empty() {
            let reached = Reached::default();
            for &branch in self.branches {
                dispatch(self.registry, ctx, branch, &reached).await?;
            }
            if !reached.0.load(Ordering::Relaxed) {
                debug!(turn_id = %ctx.id(), "every branch stopped");
                return Ok(());
            }
        }
        dispatch_route(self.registry, ctx, self.tail, self.terminal).await
    }
}

/// Marks that at least one branch ran to completion
#[derive(Default)]
struct Reached(AtomicBool);

#[async_trait]
impl Terminal for Reached {
    async fn complete(&self, _ctx: &mut TurnContext) -> Result<()> {
        self.0.store(true, Ordering::Relaxed);
        Ok(())
    }
}
