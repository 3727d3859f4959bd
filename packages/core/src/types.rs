// ABOUTME: Checklist item type definitions
// ABOUTME: The persisted entity and the partial-update payload applied to it

use serde::{Deserialize, Serialize};

/// A single checklist entry.
///
/// `id` is `None` until storage assigns one. `version` is an advisory
/// counter bumped on every update; it is never compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub version: i32,
}

impl ChecklistItem {
    /// Build an unsaved item with no description, not completed, version 0
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            completed: false,
            version: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fields accepted by an update.
///
/// `completed` has no "absent" state: a body without it means `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}
