//! Per-category handler chains

use std::fmt;

use crate::{Category, Handler, SharedHandler};

/// Ordered handler chains, one per [`Category`]
///
/// Registration takes `&mut self` and dispatch only needs `&self`, so the
/// borrow checker keeps registration out of any in-flight dispatch. Share a
/// finished registry across concurrent turns behind an `Arc`.
pub struct HandlerRegistry {
    chains: [Vec<SharedHandler>; Category::COUNT],
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            chains: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Append `handler` to the chain for `category`
    pub fn register(&mut self, category: Category, handler: impl Handler + 'static) -> &mut Self {
        self.register_shared(category, std::sync::Arc::new(handler))
    }

    /// Append an already shared handler to the chain for `category`
    ///
    /// The same instance may sit in several chains, or several times in one.
    pub fn register_shared(&mut self, category: Category, handler: SharedHandler) -> &mut Self {
        self.chains[category.index()].push(handler);
        self
    }

    /// The chain for `category`, in registration order
    pub fn chain_for(&self, category: Category) -> &[SharedHandler] {
        &self.chains[category.index()]
    }

    /// Number of handlers registered for `category`
    pub fn len(&self, category: Category) -> usize {
        self.chain_for(category).len()
    }

    /// Total number of registrations across all categories
    pub fn total(&self) -> usize {
        self.chains.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;

        let mut map = f.debug_map();
        for category in Category::iter() {
            let len = self.len(category);
            if len > 0 {
                map.entry(&category, &len);
            }
        }
        map.finish()
    }
}
