// ABOUTME: Checklist item service for Listkeeper
// ABOUTME: Partial-update rules, existence checks, and version bumps over a repository

pub mod error;
pub mod service;

// Re-export main types
pub use error::{ServiceError, ServiceResult};
pub use service::ChecklistItemService;
