use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the review service API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Duration to keep cached review listings before re-fetching
    #[serde(default = "default_reviews_cache_ttl", with = "humantime_serde")]
    pub reviews_cache_ttl: Duration,

    /// Duration to keep cached property records before re-fetching
    #[serde(default = "default_properties_cache_ttl", with = "humantime_serde")]
    pub properties_cache_ttl: Duration,

    /// Duration to keep the channel catalog cached before re-fetching
    #[serde(default = "default_channels_cache_ttl", with = "humantime_serde")]
    pub channels_cache_ttl: Duration,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

const fn default_reviews_cache_ttl() -> Duration {
    Duration::from_secs(5 * 60)
}

const fn default_properties_cache_ttl() -> Duration {
    Duration::from_secs(15 * 60)
}

const fn default_channels_cache_ttl() -> Duration {
    Duration::from_secs(24 * 60 * 60)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading revue configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            // Look for revue.toml in the current directory
            let path = Utf8PathBuf::from("revue.toml");
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading revue configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is malformed or a cache TTL is zero
    pub fn validate(&self) -> Result<()> {
        let _ = Url::parse(&self.base_url).into_app_err_with(|| format!("base_url '{}' is not a valid URL", self.base_url))?;

        if self.reviews_cache_ttl.is_zero() {
            return Err(app_err!("reviews_cache_ttl must be greater than zero"));
        }

        if self.properties_cache_ttl.is_zero() {
            return Err(app_err!("properties_cache_ttl must be greater than zero"));
        }

        if self.channels_cache_ttl.is_zero() {
            return Err(app_err!("channels_cache_ttl must be greater than zero"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_config_toml_is_not_empty() {
        assert!(!DEFAULT_CONFIG_TOML.is_empty());
    }

    #[test]
    fn test_validate_bad_base_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_ttl() {
        let config = Config {
            reviews_cache_ttl: Duration::ZERO,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("revue.toml")).unwrap();
        std::fs::write(
            &path,
            r#"
base_url = "https://reviews.example.com/api"
reviews_cache_ttl = "30s"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "https://reviews.example.com/api");
        assert_eq!(config.reviews_cache_ttl, Duration::from_secs(30));
        // Unspecified TTLs fall back to the defaults
        assert_eq!(config.channels_cache_ttl, Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn test_load_unknown_field_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("revue.toml")).unwrap();
        std::fs::write(&path, "no_such_setting = true\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_duration() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("revue.toml")).unwrap();
        std::fs::write(&path, "reviews_cache_ttl = \"not a duration\"\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_save_default_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("revue.toml")).unwrap();
        Config::save_default(&path).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();
        loaded.validate().unwrap();
    }
}
