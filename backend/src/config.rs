//! Runtime configuration, read once at startup.
//!
//! Values come from the process environment after loading an optional `.env`
//! file. The resulting [`AppConfig`] is passed explicitly to whatever needs
//! it; nothing reads the environment after startup.

use log::warn;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SHOTSTACK_API_URL: &str = "https://api.shotstack.io/v1";
pub const DEFAULT_CREATOMATE_API_URL: &str = "https://api.creatomate.com/v1";
pub const DEFAULT_STORAGE_BUCKET: &str = "rendered-videos";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("RENDER_PROVIDER is {provider} but {missing} is not set")]
    MissingProviderSetting {
        provider: &'static str,
        missing: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
    pub open_browser: bool,
    /// Largest accepted JSON body in bytes. Shared documents embed images as
    /// data URLs, so this is well above actix's default.
    pub json_limit: usize,
    pub render: RenderConfig,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub provider: Option<ProviderConfig>,
    pub poll_interval: Duration,
    pub max_poll_attempts: u32,
    pub storage: Option<StorageConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Shotstack {
        api_key: String,
        api_url: String,
    },
    Creatomate {
        api_key: String,
        api_url: String,
        template_id: String,
    },
}

/// Object storage the rendered videos are republished to. Speaks the
/// Supabase storage REST dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub url: String,
    pub service_key: String,
    pub bucket: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source; blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let json_limit_mb: usize = parse_or(&get, "STUDIO_JSON_LIMIT_MB", "number", 25)?;
        let json_limit = json_limit_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| ConfigError::Invalid {
                name: "STUDIO_JSON_LIMIT_MB",
                expected: "number of megabytes below the platform limit",
                value: json_limit_mb.to_string(),
            })?;

        Ok(Self {
            host: get("STUDIO_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&get, "STUDIO_PORT", "port number", 8080)?,
            database_path: get("STUDIO_DATABASE")
                .unwrap_or_else(|| "template_studio.sqlite".to_string())
                .into(),
            static_dir: get("STUDIO_STATIC_DIR")
                .unwrap_or_else(|| "static/dist".to_string())
                .into(),
            open_browser: parse_bool(&get, "STUDIO_OPEN_BROWSER")?,
            json_limit,
            render: RenderConfig {
                provider: provider_config(&get)?,
                poll_interval: Duration::from_secs(parse_or(
                    &get,
                    "RENDER_POLL_INTERVAL_SECS",
                    "number of seconds",
                    5,
                )?),
                max_poll_attempts: parse_or(&get, "RENDER_MAX_POLL_ATTEMPTS", "number", 60)?,
                storage: storage_config(&get),
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T, G>(get: &G, name: &'static str, expected: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}

fn parse_bool<G>(get: &G, name: &'static str) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(name).map(|v| v.to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(value) => Err(ConfigError::Invalid {
            name,
            expected: "boolean",
            value,
        }),
    }
}

/// Picks the compositing provider.
///
/// `RENDER_PROVIDER` names it explicitly. When it is unset the first provider
/// with credentials wins, Shotstack before Creatomate.
fn provider_config<G>(get: &G) -> Result<Option<ProviderConfig>, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let shotstack = get("SHOTSTACK_API_KEY").map(|api_key| ProviderConfig::Shotstack {
        api_key,
        api_url: get("SHOTSTACK_API_URL").unwrap_or_else(|| DEFAULT_SHOTSTACK_API_URL.to_string()),
    });
    let creatomate_key = get("CREATOMATE_API_KEY");
    let creatomate_template = get("CREATOMATE_TEMPLATE_ID");
    let creatomate = match (&creatomate_key, &creatomate_template) {
        (Some(api_key), Some(template_id)) => Some(ProviderConfig::Creatomate {
            api_key: api_key.clone(),
            api_url: get("CREATOMATE_API_URL")
                .unwrap_or_else(|| DEFAULT_CREATOMATE_API_URL.to_string()),
            template_id: template_id.clone(),
        }),
        _ => None,
    };

    match get("RENDER_PROVIDER").map(|v| v.to_ascii_lowercase()).as_deref() {
        None => {
            if shotstack.is_none() && creatomate.is_none() && creatomate_key.is_some() {
                warn!("CREATOMATE_API_KEY is set but CREATOMATE_TEMPLATE_ID is not; rendering is disabled");
            }
            Ok(shotstack.or(creatomate))
        }
        Some("shotstack") => shotstack.map(Some).ok_or(ConfigError::MissingProviderSetting {
            provider: "shotstack",
            missing: "SHOTSTACK_API_KEY",
        }),
        Some("creatomate") => match creatomate {
            Some(config) => Ok(Some(config)),
            None => Err(ConfigError::MissingProviderSetting {
                provider: "creatomate",
                missing: if creatomate_key.is_none() {
                    "CREATOMATE_API_KEY"
                } else {
                    "CREATOMATE_TEMPLATE_ID"
                },
            }),
        },
        Some(other) => Err(ConfigError::Invalid {
            name: "RENDER_PROVIDER",
            expected: "provider name (shotstack or creatomate)",
            value: other.to_string(),
        }),
    }
}

fn storage_config<G>(get: &G) -> Option<StorageConfig>
where
    G: Fn(&str) -> Option<String>,
{
    Some(StorageConfig {
        url: get("STORAGE_URL")?.trim_end_matches('/').to_string(),
        service_key: get("STORAGE_SERVICE_KEY")?,
        bucket: get("STORAGE_BUCKET").unwrap_or_else(|| DEFAULT_STORAGE_BUCKET.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.json_limit, 25 * 1024 * 1024);
        assert_eq!(config.render.provider, None);
        assert_eq!(config.render.poll_interval, Duration::from_secs(5));
        assert_eq!(config.render.max_poll_attempts, 60);
        assert_eq!(config.render.storage, None);
        assert!(!config.open_browser);
    }

    #[test]
    fn first_configured_provider_wins_without_explicit_choice() {
        let config = config(&[
            ("CREATOMATE_API_KEY", "cm-key"),
            ("CREATOMATE_TEMPLATE_ID", "tpl"),
            ("SHOTSTACK_API_KEY", "ss-key"),
        ])
        .unwrap();
        assert!(matches!(
            config.render.provider,
            Some(ProviderConfig::Shotstack { ref api_key, .. }) if api_key == "ss-key"
        ));
    }

    #[test]
    fn explicit_provider_overrides_precedence() {
        let config = config(&[
            ("RENDER_PROVIDER", "Creatomate"),
            ("CREATOMATE_API_KEY", "cm-key"),
            ("CREATOMATE_TEMPLATE_ID", "tpl"),
            ("SHOTSTACK_API_KEY", "ss-key"),
        ])
        .unwrap();
        assert_eq!(
            config.render.provider,
            Some(ProviderConfig::Creatomate {
                api_key: "cm-key".to_string(),
                api_url: DEFAULT_CREATOMATE_API_URL.to_string(),
                template_id: "tpl".to_string(),
            })
        );
    }

    #[test]
    fn explicit_provider_without_credentials_is_an_error() {
        let err = config(&[("RENDER_PROVIDER", "creatomate"), ("CREATOMATE_API_KEY", "k")])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingProviderSetting {
                provider: "creatomate",
                missing: "CREATOMATE_TEMPLATE_ID",
            }
        );
        assert!(config(&[("RENDER_PROVIDER", "ffmpeg")]).is_err());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("SHOTSTACK_API_KEY", "  "), ("STUDIO_PORT", "")]).unwrap();
        assert_eq!(config.render.provider, None);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = config(&[("RENDER_MAX_POLL_ATTEMPTS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "RENDER_MAX_POLL_ATTEMPTS", .. }));
    }

    #[test]
    fn oversized_json_limit_is_rejected() {
        let too_big = usize::MAX.to_string();
        let err = config(&[("STUDIO_JSON_LIMIT_MB", too_big.as_str())]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "STUDIO_JSON_LIMIT_MB", .. }));

        let config = config(&[("STUDIO_JSON_LIMIT_MB", "2")]).unwrap();
        assert_eq!(config.json_limit, 2 * 1024 * 1024);
    }

    #[test]
    fn storage_needs_url_and_key() {
        assert_eq!(config(&[("STORAGE_URL", "https://x.supabase.co")]).unwrap().render.storage, None);
        let storage = config(&[
            ("STORAGE_URL", "https://x.supabase.co/"),
            ("STORAGE_SERVICE_KEY", "service"),
        ])
        .unwrap()
        .render
        .storage
        .unwrap();
        assert_eq!(storage.url, "https://x.supabase.co");
        assert_eq!(storage.bucket, "rendered-videos");
    }
}
