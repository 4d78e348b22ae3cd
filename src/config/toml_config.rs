use crate::utils::error::{MergeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every key may be omitted; missing keys keep the
/// built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub record: RecordConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub bulk_url: Option<String>,
    pub single_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordConfig {
    pub fallback_name: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MergeError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MergeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SINGLE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MergeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
bulk_url = "https://example.com/bulk.txt"
single_url = "https://example.com/single.txt"
timeout_seconds = 30

[output]
path = "merged.tle"

[record]
fallback_name = "SPOT 5"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.source.bulk_url.as_deref(),
            Some("https://example.com/bulk.txt")
        );
        assert_eq!(config.source.timeout_seconds, Some(30));
        assert_eq!(config.output.path.as_deref(), Some("merged.tle"));
        assert_eq!(config.record.fallback_name.as_deref(), Some("SPOT 5"));
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let config = TomlConfig::from_toml_str("[output]\npath = \"x.tle\"\n").unwrap();
        assert!(config.source.bulk_url.is_none());
        assert!(config.record.fallback_name.is_none());
        assert_eq!(config.output.path.as_deref(), Some("x.tle"));

        let empty = TomlConfig::from_toml_str("").unwrap();
        assert!(empty.output.path.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = TomlConfig::from_toml_str("[source]\nbulk = \"typo\"\n").unwrap_err();
        assert!(matches!(err, MergeError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TLE_MERGE_TEST_SINGLE_URL", "https://test.example.com/one");

        let toml_content = r#"
[source]
single_url = "${TLE_MERGE_TEST_SINGLE_URL}"
bulk_url = "${TLE_MERGE_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source.single_url.as_deref(),
            Some("https://test.example.com/one")
        );
        assert_eq!(
            config.source.bulk_url.as_deref(),
            Some("${TLE_MERGE_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("TLE_MERGE_TEST_SINGLE_URL");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[record]\nfallback_name = \"FROM FILE\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.record.fallback_name.as_deref(), Some("FROM FILE"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, MergeError::ConfigError { .. }));
    }
}
