//! Layered configuration for the binary: built-in defaults, an optional
//! `roster.toml` file, and `ROSTER_` environment variables, merged in that
//! order of precedence.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub greeting: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            greeting: String::from("Hello"),
        }
    }
}

impl Settings {
    /// Loads settings relative to the current directory.
    pub fn load() -> Result<Self> {
        let dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from(&dir)
    }

    /// Loads settings with `dir` as the place to look for `roster.toml`.
    /// The file is optional; without it the defaults apply, so a bare run
    /// still greets with "Hello".
    pub fn load_from(dir: &Path) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(dir.join("roster.toml"))
                    .required(false)
                    .format(FileFormat::Toml),
            )
            .add_source(Environment::with_prefix("ROSTER"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
