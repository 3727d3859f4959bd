// ABOUTME: Configuration constants for Listkeeper
// ABOUTME: Single source of truth for environment variable names

pub mod constants;
