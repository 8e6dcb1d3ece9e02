//! Path resolution for talking-clock configuration.
//!
//! Configuration lives in `~/.talking-clock/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::ClockError;

/// Paths to talking-clock configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.talking-clock/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ClockError> {
        let home = std::env::var("HOME").map_err(|_| {
            ClockError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".talking-clock")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".talking-clock"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-talking-clock");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_default_ends_in_config_yaml() {
        let paths = Paths::default();
        assert!(paths.config_file.ends_with(".talking-clock/config.yaml"));
    }
}
