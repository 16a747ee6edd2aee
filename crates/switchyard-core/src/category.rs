//! Dispatch categories
//!
//! The set is closed: every stage of the resolution tree is a variant here,
//! and the registry stores one chain per variant.

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::ActivityType;

/// One stage of the dispatch tree
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
)]
pub enum Category {
    Turn,
    Message,
    ContactRelationUpdate,
    ConversationUpdate,
    ConversationMembersAdded,
    ConversationMembersRemoved,
    EndOfConversation,
    Event,
    CreateConversation,
    ContinueConversation,
    Invoke,
    InstallationUpdate,
    MessageDelete,
    MessageUpdate,
    MessageReaction,
    MessageReactionAdded,
    MessageReactionRemoved,
    Typing,
    Handoff,
    UnrecognizedActivityType,
    Dialog,
}

impl Category {
    /// Number of categories
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    /// Dense index into per-category storage
    pub fn index(self) -> usize {
        self as usize
    }

    /// First-level category for a known discriminator
    pub fn for_activity_type(kind: ActivityType) -> Self {
        match kind {
            ActivityType::Message => Category::Message,
            ActivityType::ContactRelationUpdate => Category::ContactRelationUpdate,
            ActivityType::ConversationUpdate => Category::ConversationUpdate,
            ActivityType::EndOfConversation => Category::EndOfConversation,
            ActivityType::Event => Category::Event,
            ActivityType::Invoke => Category::Invoke,
            ActivityType::InstallationUpdate => Category::InstallationUpdate,
            ActivityType::MessageDelete => Category::MessageDelete,
            ActivityType::MessageUpdate => Category::MessageUpdate,
            ActivityType::MessageReaction => Category::MessageReaction,
            ActivityType::Typing => Category::Typing,
            ActivityType::Handoff => Category::Handoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_indices_are_dense_and_unique() {
        let indices: HashSet<usize> = Category::iter().map(Category::index).collect();
        assert_eq!(indices.len(), Category::COUNT);
        assert!(indices.iter().all(|i| *i < Category::COUNT));
    }

    #[test]
    fn test_every_activity_type_has_a_category() {
        for kind in ActivityType::iter() {
            let category = Category::for_activity_type(kind);
            assert_ne!(category, Category::Turn);
            assert_ne!(category, Category::Dialog);
            assert_ne!(category, Category::UnrecognizedActivityType);
        }
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!(
            Category::from_str("ConversationMembersAdded").unwrap(),
            Category::ConversationMembersAdded
        );
        assert_eq!(Category::Dialog.to_string(), "Dialog");
        assert!(Category::from_str("Nope").is_err());
    }
}
