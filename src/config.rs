// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigator settings.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then `BOOTHWALK_<FIELD>`
//! environment variables (for example `BOOTHWALK_PAGE_SIZE=20`). The merged result is validated
//! once before use.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::logging::LOG_ENV;
use crate::query::catalog::SearchMode;
use crate::query::route::RouteOptions;

const ENV_PREFIX: &str = "BOOTHWALK_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML configuration{location}: {message}")]
    Toml { location: String, message: String },

    #[error("failed to parse environment variable {var}: {message}")]
    EnvVar { var: String, message: String },

    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl ConfigError {
    fn from_toml_error(err: toml::de::Error, path: Option<&Path>) -> Self {
        Self::Toml {
            location: path.map(|p| format!(" in {}", p.display())).unwrap_or_default(),
            message: err.message().to_owned(),
        }
    }

    fn env(var: &str, message: impl Into<String>) -> Self {
        Self::EnvVar {
            var: var.to_owned(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Products added to the catalog window per page.
    pub page_size: usize,
    pub search_mode: SearchMode,
    /// Minimum similarity (0..=1) for a fuzzy match.
    pub fuzzy_threshold: f64,
    pub entrance_label: String,
    pub unmapped_label: String,
    /// How many products to ask the recommendation service for.
    pub recommendation_count: usize,
    /// Deadline for a collaborator call; 0 waits forever.
    pub upstream_timeout_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        let route = RouteOptions::default();
        Self {
            page_size: 10,
            search_mode: SearchMode::default(),
            fuzzy_threshold: 0.8,
            entrance_label: route.entrance_label,
            unmapped_label: route.unmapped_label,
            recommendation_count: 5,
            upstream_timeout_ms: 5_000,
        }
    }
}

impl NavigatorConfig {
    /// Defaults, the optional file, and the process environment, validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|err| ConfigError::from_toml_error(err, Some(path)))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::from_toml_error(err, None))
    }

    /// Overlays `BOOTHWALK_<FIELD>` variables. Unrelated variables are ignored.
    pub fn apply_env<I>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if key == LOG_ENV {
                continue;
            }
            let Some(field) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            self.apply_env_var(&key, &field.to_ascii_lowercase(), &value)?;
        }
        Ok(())
    }

    fn apply_env_var(&mut self, var: &str, field: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match field {
            "page_size" => {
                self.page_size = value
                    .parse()
                    .map_err(|err| ConfigError::env(var, format!("{err}")))?;
            }
            "search_mode" => {
                self.search_mode = value.parse().map_err(|err| ConfigError::env(var, err))?;
            }
            "fuzzy_threshold" => {
                self.fuzzy_threshold = value
                    .parse()
                    .map_err(|err| ConfigError::env(var, format!("{err}")))?;
            }
            "entrance_label" => self.entrance_label = value.to_owned(),
            "unmapped_label" => self.unmapped_label = value.to_owned(),
            "recommendation_count" => {
                self.recommendation_count = value
                    .parse()
                    .map_err(|err| ConfigError::env(var, format!("{err}")))?;
            }
            "upstream_timeout_ms" => {
                self.upstream_timeout_ms = value
                    .parse()
                    .map_err(|err| ConfigError::env(var, format!("{err}")))?;
            }
            _ => debug!(var, "ignoring unknown configuration variable"),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation {
                field: "page_size",
                message: "must be at least 1".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::Validation {
                field: "fuzzy_threshold",
                message: format!("must be between 0 and 1, got {}", self.fuzzy_threshold),
            });
        }
        if self.entrance_label.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "entrance_label",
                message: "must not be empty".to_owned(),
            });
        }
        if self.unmapped_label.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "unmapped_label",
                message: "must not be empty".to_owned(),
            });
        }
        if self.recommendation_count == 0 {
            return Err(ConfigError::Validation {
                field: "recommendation_count",
                message: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }

    pub fn route_options(&self) -> RouteOptions {
        RouteOptions {
            entrance_label: self.entrance_label.clone(),
            unmapped_label: self.unmapped_label.clone(),
        }
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        (self.upstream_timeout_ms > 0).then(|| Duration::from_millis(self.upstream_timeout_ms))
    }
}
