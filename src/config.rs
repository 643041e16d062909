//! # Store configuration
//!
//! Where the user file lives: an application root plus a file name,
//! defaulting to `users.json` in the current directory. Callers with a
//! fixed deployment layout pass the root once and let the store derive
//! the full path.

use std::path::{Path, PathBuf};

/// Default user file name, relative to the application root
pub const DEFAULT_USER_FILE: &str = "users.json";

/// Location of the persisted user collection
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Application root the user file is resolved against
    pub root: PathBuf,

    /// File name within the root
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_name: DEFAULT_USER_FILE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Configuration rooted at `root` with the default file name
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Override the file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the user file
    pub fn user_file_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        let config = StoreConfig::default();
        assert_eq!(config.file_name, "users.json");
        assert_eq!(config.user_file_path(), PathBuf::from("./users.json"));
    }

    #[test]
    fn test_rooted_path() {
        let config = StoreConfig::new("/var/lib/registry");
        assert_eq!(
            config.user_file_path(),
            PathBuf::from("/var/lib/registry/users.json")
        );
    }

    #[test]
    fn test_file_name_override() {
        let config = StoreConfig::new("/data").with_file_name("accounts.json");
        assert_eq!(
            config.user_file_path(),
            PathBuf::from("/data/accounts.json")
        );
    }
}
