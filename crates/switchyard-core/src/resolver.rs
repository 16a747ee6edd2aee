//! Category resolution
//!
//! Maps one activity to the nested sequence of categories it is dispatched
//! through. The tree is fixed:
//!
//! ```text
//! Turn
//! └─ <discriminator category> | UnrecognizedActivityType
//!    ├─ ConversationUpdate: MembersAdded, else MembersRemoved, else nothing
//!    ├─ Event: CreateConversation, else ContinueConversation, else nothing
//!    └─ MessageReaction: ReactionAdded if any, ReactionRemoved if any
//!       └─ Dialog
//! ```
//!
//! The conversation-update branch is exclusive with added checked first.
//! The reaction sub-categories are siblings: each one that applies runs its
//! own chain whether or not the other was stopped, and Dialog follows once
//! if at least one of them ran to completion.

use std::fmt;

use crate::{
    Activity, ActivityType, CONTINUE_CONVERSATION_EVENT, CREATE_CONVERSATION_EVENT, Category,
};

/// The category path for one activity
///
/// Three parts, laid out in dispatch order in [`Route::categories`]:
/// the trunk (starting with [`Category::Turn`]), where each stage runs in
/// the continuation of the one before; independent sibling branches run
/// after the trunk completes; and the tail ([`Category::Dialog`]), which
/// runs once the trunk completes and, when there are branches, at least one
/// branch completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    categories: Vec<Category>,
    trunk: usize,
    branches: usize,
}

impl Route {
    /// Every category in dispatch order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Stages nested one inside the next
    pub fn trunk(&self) -> &[Category] {
        &self.categories[..self.trunk]
    }

    /// Sibling stages run independently after the trunk
    pub fn branches(&self) -> &[Category] {
        &self.categories[self.trunk..self.trunk + self.branches]
    }

    /// Terminal stages after the trunk and branches
    pub fn tail(&self) -> &[Category] {
        &self.categories[self.trunk + self.branches..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, stages: &[Category], sep: &str) -> fmt::Result {
            for (i, category) in stages.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "{}", category)?;
            }
            Ok(())
        }

        join(f, self.trunk(), " > ")?;
        match self.branches() {
            [] => {}
            [single] => write!(f, " > {}", single)?,
            siblings => {
                f.write_str(" > (")?;
                join(f, siblings, " | ")?;
                f.write_str(")")?;
            }
        }
        if !self.tail().is_empty() {
            f.write_str(" > ")?;
            join(f, self.tail(), " > ")?;
        }
        Ok(())
    }
}

/// Resolve the route for `activity`
///
/// Missing and unknown discriminators both resolve to
/// [`Category::UnrecognizedActivityType`].
pub fn resolve(activity: &Activity) -> Route {
    let mut categories = vec![Category::Turn];
    let mut branches = Vec::new();

    match activity.activity_type() {
        Some(kind) => {
            categories.push(Category::for_activity_type(kind));
            match kind {
                ActivityType::ConversationUpdate => {
                    if !activity.members_added.is_empty() {
                        categories.push(Category::ConversationMembersAdded);
                    } else if !activity.members_removed.is_empty() {
                        categories.push(Category::ConversationMembersRemoved);
                    }
                }
                ActivityType::Event => match activity.name.as_deref() {
                    Some(CREATE_CONVERSATION_EVENT) => {
                        categories.push(Category::CreateConversation)
                    }
                    Some(CONTINUE_CONVERSATION_EVENT) => {
                        categories.push(Category::ContinueConversation)
                    }
                    _ => {}
                },
                ActivityType::MessageReaction => {
                    if !activity.reactions_added.is_empty() {
                        branches.push(Category::MessageReactionAdded);
                    }
                    if !activity.reactions_removed.is_empty() {
                        branches.push(Category::MessageReactionRemoved);
                    }
                }
                _ => {}
            }
        }
        None => categories.push(Category::UnrecognizedActivityType),
    }

    let trunk = categories.len();
    let branch_count = branches.len();
    categories.extend(branches);
    categories.push(Category::Dialog);
    Route {
        categories,
        trunk,
        branches: branch_count,
    }
}
