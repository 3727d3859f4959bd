use std::env;
use std::path::PathBuf;

/// File name of the SQLite database inside the data directory
pub const DATABASE_FILE_NAME: &str = "listkeeper.db";

/// Get the path to the Listkeeper directory (~/.listkeeper)
pub fn listkeeper_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".listkeeper")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".listkeeper")
    }
}

/// Get the default database path (~/.listkeeper/listkeeper.db)
pub fn default_database_path() -> PathBuf {
    listkeeper_dir().join(DATABASE_FILE_NAME)
}
