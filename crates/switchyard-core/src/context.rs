//! Execution context for one dispatched turn

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::{Activity, CoreError, Result};

/// NewType pattern for Turn ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(String);

impl TurnId {
    /// Create a new TurnId
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Create from existing string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context handed to every handler of a turn
///
/// Owned by the caller of the dispatch entry point. The engine borrows it
/// mutably for the duration of one dispatch and keeps nothing afterwards.
#[derive(Debug, Clone)]
pub struct TurnContext {
    id: TurnId,
    activity: Activity,
    state: HashMap<String, serde_json::Value>,
    responses: Vec<Activity>,
}

impl TurnContext {
    /// Create a context for an inbound activity
    pub fn new(activity: Activity) -> Self {
        Self {
            id: TurnId::new(),
            activity,
            state: HashMap::new(),
            responses: Vec::new(),
        }
    }

    pub fn id(&self) -> &TurnId {
        &self.id
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Insert a value into the turn state
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| {
            CoreError::State(format!("Failed to serialize state value: {}", e))
        })?;
        self.state.insert(key.into(), value);
        Ok(())
    }

    /// Get a value from the turn state
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.state.get(key) {
            Some(value) => {
                let parsed = serde_json::from_value(value.clone()).map_err(|e| {
                    CoreError::State(format!("Failed to deserialize state value: {}", e))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.state.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.state.remove(key)
    }

    /// Queue an outbound activity
    pub fn send(&mut self, activity: Activity) {
        self.responses.push(activity);
    }

    /// Queue an outbound message carrying `text`
    pub fn send_text(&mut self, text: impl Into<String>) {
        self.send(Activity::message(text));
    }

    /// Outbound activities queued so far, in send order
    pub fn responses(&self) -> &[Activity] {
        &self.responses
    }

    /// Take the queued outbound activities, leaving the outbox empty
    pub fn take_responses(&mut self) -> Vec<Activity> {
        std::mem::take(&mut self.responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trip() {
        let mut ctx = TurnContext::new(Activity::message("hi"));
        ctx.insert("count", 3u32).unwrap();

        assert!(ctx.contains("count"));
        assert_eq!(ctx.get::<u32>("count").unwrap(), Some(3));
        assert_eq!(ctx.get::<u32>("missing").unwrap(), None);

        assert_eq!(ctx.remove("count"), Some(serde_json::json!(3)));
        assert!(!ctx.contains("count"));
    }

    #[test]
    fn test_state_type_mismatch() {
        let mut ctx = TurnContext::new(Activity::message("hi"));
        ctx.insert("name", "ada").unwrap();

        let err = ctx.get::<u32>("name").unwrap_err();
        assert!(matches!(err, CoreError::State(_)));
    }

    #[test]
    fn test_outbox() {
        let mut ctx = TurnContext::new(Activity::message("hi"));
        ctx.send_text("one");
        ctx.send_text("two");

        let texts: Vec<_> = ctx
            .responses()
            .iter()
            .filter_map(|a| a.text.clone())
            .collect();
        assert_eq!(texts, vec!["one", "two"]);

        assert_eq!(ctx.take_responses().len(), 2);
        assert!(ctx.responses().is_empty());
    }

    #[test]
    fn test_turn_ids_are_unique() {
        let a = TurnContext::new(Activity::message("a"));
        let b = TurnContext::new(Activity::message("b"));
        assert_ne!(a.id(), b.id());
    }
}
