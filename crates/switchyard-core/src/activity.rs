//! Inbound activity model
//!
//! The engine only reads the discriminator and the handful of optional fields
//! the resolver branches on; everything else is carried through for handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{CoreError, Result};

/// Event name that resolves to [`crate::Category::CreateConversation`]
pub const CREATE_CONVERSATION_EVENT: &str = "createConversation";

/// Event name that resolves to [`crate::Category::ContinueConversation`]
pub const CONTINUE_CONVERSATION_EVENT: &str = "continueConversation";

/// Known activity discriminators
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ActivityType {
    Message,
    ContactRelationUpdate,
    ConversationUpdate,
    EndOfConversation,
    Event,
    Invoke,
    InstallationUpdate,
    MessageDelete,
    MessageUpdate,
    MessageReaction,
    Typing,
    Handoff,
}

/// A participant on a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChannelAccount {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChannelAccount {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// The conversation an activity belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_group: Option<bool>,
}

/// A single reaction added to or removed from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReaction {
    #[serde(rename = "type")]
    pub kind: String,
}

impl MessageReaction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// An inbound activity
///
/// `kind` keeps the raw discriminator string so that missing and unknown
/// types survive decoding; see [`Activity::activity_type`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Event or invoke name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub members_added: Vec<ChannelAccount>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub members_removed: Vec<ChannelAccount>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub reactions_added: Vec<MessageReaction>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub reactions_removed: Vec<MessageReaction>,
}

/// Optional lists may arrive as an explicit `null`; treat that as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Activity {
    /// Create an activity with the given raw discriminator
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Create an activity of a known type
    pub fn of(kind: ActivityType) -> Self {
        Self::new(kind.to_string())
    }

    /// Create a message activity carrying `text`
    pub fn message(text: impl Into<String>) -> Self {
        Self::of(ActivityType::Message).with_text(text)
    }

    /// Decode an activity from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidActivity(e.to_string()))
    }

    /// The known discriminator, if the raw type is present and recognized
    pub fn activity_type(&self) -> Option<ActivityType> {
        self.kind
            .as_deref()
            .and_then(|kind| ActivityType::from_str(kind).ok())
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_member_added(mut self, member: ChannelAccount) -> Self {
        self.members_added.push(member);
        self
    }

    pub fn with_member_removed(mut self, member: ChannelAccount) -> Self {
        self.members_removed.push(member);
        self
    }

    pub fn with_reaction_added(mut self, reaction: MessageReaction) -> Self {
        self.reactions_added.push(reaction);
        self
    }

    pub fn with_reaction_removed(mut self, reaction: MessageReaction) -> Self {
        self.reactions_removed.push(reaction);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_wire_names() {
        assert_eq!(ActivityType::Message.to_string(), "message");
        assert_eq!(
            ActivityType::ConversationUpdate.to_string(),
            "conversationUpdate"
        );
        assert_eq!(
            ActivityType::from_str("messageReaction").unwrap(),
            ActivityType::MessageReaction
        );
        assert!(ActivityType::from_str("SomeUnknownType").is_err());
    }

    #[test]
    fn test_decode_conversation_update() {
        let json = r#"{
            "type": "conversationUpdate",
            "channelId": "test",
            "conversation": { "id": "conv-1", "isGroup": true },
            "membersAdded": [{ "id": "u1", "name": "Ada" }]
        }"#;

        let activity = Activity::from_json(json).unwrap();
        assert_eq!(
            activity.activity_type(),
            Some(ActivityType::ConversationUpdate)
        );
        assert_eq!(activity.members_added, vec![ChannelAccount {
            id: "u1".to_string(),
            name: Some("Ada".to_string()),
        }]);
        assert!(activity.members_removed.is_empty());
        assert_eq!(activity.conversation.unwrap().is_group, Some(true));
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let activity = Activity::from_json(
            r#"{"type":"conversationUpdate","membersAdded":null,"membersRemoved":[{"id":"u1"}]}"#,
        )
        .unwrap();
        assert!(activity.members_added.is_empty());
        assert_eq!(activity.members_removed, vec![ChannelAccount::new("u1")]);

        let activity = Activity::from_json(
            r#"{"type":"messageReaction","reactionsAdded":[{"type":"like"}],"reactionsRemoved":null}"#,
        )
        .unwrap();
        assert_eq!(activity.reactions_added, vec![MessageReaction::new("like")]);
        assert!(activity.reactions_removed.is_empty());
    }

    #[test]
    fn test_missing_and_unknown_type() {
        let missing = Activity::from_json(r#"{ "text": "hi" }"#).unwrap();
        assert_eq!(missing.kind, None);
        assert_eq!(missing.activity_type(), None);

        let unknown = Activity::new("SomeUnknownType");
        assert_eq!(unknown.activity_type(), None);
    }

    #[test]
    fn test_reaction_wire_shape() {
        let activity = Activity::of(ActivityType::MessageReaction)
            .with_reaction_added(MessageReaction::new("like"));
        let value = serde_json::to_value(&activity).unwrap();

        assert_eq!(value["type"], "messageReaction");
        assert_eq!(value["reactionsAdded"][0]["type"], "like");
        assert!(value.get("reactionsRemoved").is_none());
    }

    #[test]
    fn test_malformed_json_is_invalid_activity() {
        let err = Activity::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidActivity(_)));
    }
}
