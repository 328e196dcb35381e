//! Run settings loaded from configuration files.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wolfpack_solvers::optimization::grey_wolf::{self, Config, Optimizer};

/// A complete optimizer run: the search box plus solver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSettings {
    /// `[min, max]` per dimension.
    pub bounds: Vec<[f64; 2]>,

    #[serde(default)]
    pub solver: Config,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Solver(#[from] grey_wolf::Error),
}

impl RunSettings {
    /// Parses settings from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Toml`] if the text is malformed or the solver
    /// section fails validation.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] if the text is malformed or the solver
    /// section fails validation.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds an optimizer for these settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Solver`] if any bound pair is invalid.
    pub fn optimizer(&self) -> Result<Optimizer, SettingsError> {
        Ok(Optimizer::from_bounds(&self.bounds, &self.solver)?)
    }
}
