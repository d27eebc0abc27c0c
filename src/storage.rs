//! Best-effort persistence of the bankroll and speed setting.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Values that survive past a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Last saved bankroll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bankroll: Option<usize>,
    /// Animation speed multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// A settings store.
///
/// Failures are reported but never fatal: the game logs them and keeps
/// playing with whatever it has in memory.
pub trait Storage {
    /// Reads the stored settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn load(&self) -> Result<Settings, StorageError>;

    /// Replaces the stored settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn store(&mut self, settings: &Settings) -> Result<(), StorageError>;
}

/// Keeps settings in memory for the lifetime of the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStorage {
    settings: Settings,
}

impl MemoryStorage {
    /// Creates a store pre-filled with `settings`.
    #[must_use]
    pub const fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns what was last stored.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Settings, StorageError> {
        Ok(self.settings)
    }

    fn store(&mut self, settings: &Settings) -> Result<(), StorageError> {
        self.settings = *settings;
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::JsonFileStorage;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{Settings, Storage};
    use crate::error::StorageError;

    /// Keeps settings in a JSON file.
    ///
    /// A missing file reads as empty settings.
    #[derive(Debug, Clone)]
    pub struct JsonFileStorage {
        path: PathBuf,
    }

    impl JsonFileStorage {
        /// Creates a store backed by `path`. Nothing is touched until the
        /// first load or store.
        #[must_use]
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Storage for JsonFileStorage {
        fn load(&self) -> Result<Settings, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(text) => Ok(serde_json::from_str(&text)?),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(Settings::default()),
                Err(err) => Err(err.into()),
            }
        }

        fn store(&mut self, settings: &Settings) -> Result<(), StorageError> {
            let text = serde_json::to_string_pretty(settings)?;
            fs::write(&self.path, text)?;
            Ok(())
        }
    }
}
