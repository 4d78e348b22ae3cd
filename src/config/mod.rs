#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_at_least, validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BULK_URL: &str = "http://www.csntechnologies.net/SAT/csnbare.txt";
pub const DEFAULT_SINGLE_URL: &str =
    "https://celestrak.org/NORAD/elements/gp.php?CATNR=27640&FORMAT=tle";
pub const DEFAULT_OUTPUT_PATH: &str = "csn_plus_coriolis.tle";
pub const DEFAULT_TIMEOUT_SECS: u64 = 200;
pub const DEFAULT_FALLBACK_NAME: &str = "CORIOLIS";

/// Effective settings of one run: defaults, then the TOML file, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub bulk_url: String,
    pub single_url: String,
    pub output_path: String,
    pub timeout_secs: u64,
    pub fallback_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bulk_url: DEFAULT_BULK_URL.to_string(),
            single_url: DEFAULT_SINGLE_URL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn apply_toml(&mut self, file: &TomlConfig) {
        if let Some(url) = &file.source.bulk_url {
            self.bulk_url = url.clone();
        }
        if let Some(url) = &file.source.single_url {
            self.single_url = url.clone();
        }
        if let Some(timeout) = file.source.timeout_seconds {
            self.timeout_secs = timeout;
        }
        if let Some(path) = &file.output.path {
            self.output_path = path.clone();
        }
        if let Some(name) = &file.record.fallback_name {
            self.fallback_name = name.clone();
        }
    }
}

impl ConfigProvider for Settings {
    fn bulk_url(&self) -> &str {
        &self.bulk_url
    }

    fn single_url(&self) -> &str {
        &self.single_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn fallback_name(&self) -> &str {
        &self.fallback_name
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("bulk_url", &self.bulk_url)?;
        validate_url("single_url", &self.single_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_at_least("timeout_secs", self.timeout_secs, 1)?;
        validate_non_empty_string("fallback_name", &self.fallback_name)?;
        Ok(())
    }
}
