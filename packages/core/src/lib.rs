// ABOUTME: Core types, validation, and constants for Listkeeper
// ABOUTME: Foundational package shared by storage, service, and API layers

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{ChecklistItem, ChecklistItemPatch};

// Re-export constants
pub use constants::{default_database_path, listkeeper_dir, DATABASE_FILE_NAME};

// Re-export validation
pub use validation::{
    validate_patch_title, validate_title, ValidationError, ValidationRule, TITLE_MIN_LENGTH,
};
