use super::toml_config::TomlConfig;
use super::Settings;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Every flag is optional; running without arguments merges the default sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "tle-merge")]
#[command(about = "Merge a bulk TLE catalog with a fresher single-object TLE")]
pub struct CliConfig {
    /// URL of the bulk catalog
    #[arg(long)]
    pub bulk_url: Option<String>,

    /// URL of the single-object record that replaces its catalog entry
    #[arg(long)]
    pub single_url: Option<String>,

    /// Output file, overwritten on every run
    #[arg(long = "output")]
    pub output_path: Option<String>,

    /// Timeout of each HTTP request in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Name given to a single-object record that arrives without a name line
    #[arg(long)]
    pub fallback_name: Option<String>,

    /// TOML file with [source], [output] and [record] sections
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("Loading configuration from: {}", path);
            settings.apply_toml(&TomlConfig::from_file(path)?);
        }

        if let Some(url) = &self.bulk_url {
            settings.bulk_url = url.clone();
        }
        if let Some(url) = &self.single_url {
            settings.single_url = url.clone();
        }
        if let Some(path) = &self.output_path {
            settings.output_path = path.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.timeout_secs = timeout;
        }
        if let Some(name) = &self.fallback_name {
            settings.fallback_name = name.clone();
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = CliConfig::try_parse_from(["tle-merge"]).unwrap();
        assert_eq!(cli.to_settings().unwrap(), Settings::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[source]\ntimeout_seconds = 15\nsingle_url = \"https://file.example.com/one\"\n",
            )
            .unwrap();

        let config_path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::try_parse_from([
            "tle-merge",
            "--config",
            config_path.as_str(),
            "--single-url",
            "https://flag.example.com/one",
            "--output",
            "out/merged.tle",
        ])
        .unwrap();

        let settings = cli.to_settings().unwrap();
        assert_eq!(settings.single_url, "https://flag.example.com/one");
        assert_eq!(settings.timeout_secs, 15);
        assert_eq!(settings.output_path, "out/merged.tle");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["tle-merge", "--retries", "3"]).is_err());
    }
}
