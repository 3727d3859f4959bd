// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Listkeeper

// Server Configuration
pub const LISTKEEPER_PORT: &str = "LISTKEEPER_PORT";
pub const PORT: &str = "PORT"; // Fallback
pub const LISTKEEPER_HOST: &str = "LISTKEEPER_HOST";

// Database Configuration
pub const LISTKEEPER_DATABASE_PATH: &str = "LISTKEEPER_DATABASE_PATH";
pub const LISTKEEPER_MAX_CONNECTIONS: &str = "LISTKEEPER_MAX_CONNECTIONS";

// CORS Configuration
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

// Static frontend
pub const STATIC_DIR: &str = "STATIC_DIR";

// Client Configuration
pub const LISTKEEPER_API_URL: &str = "LISTKEEPER_API_URL";

