//! # List Configuration
//!
//! Sizing for an [`ArrayLinkedList`](crate::ArrayLinkedList), loadable from
//! TOML:
//!
//! ```toml
//! capacity = 128
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use slotlist_core::ArenaError;

use crate::error::{ListError, ListResult};

/// Configuration for a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    /// Number of cells reserved at construction.
    pub capacity: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

impl ListConfig {
    /// Small config for short scratch lists.
    #[must_use]
    pub const fn small() -> Self {
        Self { capacity: 8 }
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidConfig`] if the text is not valid TOML or
    /// does not describe a config, and [`ArenaError::InvalidCapacity`] if the
    /// capacity is zero.
    pub fn from_toml_str(text: &str) -> ListResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|err| ListError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidConfig`] if the file cannot be read, plus
    /// everything [`from_toml_str`](Self::from_toml_str) reports.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ListResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|err| ListError::InvalidConfig(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks that the config can produce a list.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidCapacity`] if the capacity is zero.
    pub fn validate(&self) -> ListResult<()> {
        if self.capacity == 0 {
            return Err(ArenaError::InvalidCapacity.into());
        }
        Ok(())
    }
}
