//! Client configuration: Graph base URL, bearer token, and request timeout.
//!
//! Resolution order (later wins):
//! 1. Built-in defaults
//! 2. `[onedrive]` table of the config file
//! 3. `ONEDRIVE_*` environment variables
//!
//! The config file is the explicit `--config` path when given, otherwise the
//! first of `./.onedrive-mcp.toml` and `~/.config/onedrive-mcp.toml` that exists.

use std::fmt;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_ACCESS_TOKEN: &str = "ONEDRIVE_ACCESS_TOKEN";
pub const ENV_BASE_URL: &str = "ONEDRIVE_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "ONEDRIVE_TIMEOUT_MS";

const CONFIG_FILENAME: &str = ".onedrive-mcp.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "onedrive-mcp.toml";

/// On-disk config file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    #[serde(default)]
    pub onedrive: OnedriveSection,
}

/// The `[onedrive]` table. Every key is optional.
#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OnedriveSection {
    pub access_token: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl fmt::Debug for OnedriveSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnedriveSection")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Fully resolved client configuration.
#[derive(Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: SecretString,
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Config with default base URL and timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: SecretString::from(access_token.into()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Load from the explicit or discovered config file plus the process environment.
    pub fn load(explicit_path: Option<&Path>) -> ClientResult<Self> {
        let path = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(),
        };

        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading OneDrive client config");
                Self::load_config_file(&path)?
            }
            None => {
                debug!("No config file found, using environment only");
                ConfigFile::default()
            }
        };

        Self::resolve(file.onedrive, |key| std::env::var(key).ok())
    }

    /// Read and parse a config file.
    pub fn load_config_file(path: &Path) -> ClientResult<ConfigFile> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| ClientError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Layer environment overrides from `env` over `section` and validate.
    pub fn resolve(
        section: OnedriveSection,
        env: impl Fn(&str) -> Option<String>,
    ) -> ClientResult<Self> {
        let access_token = env(ENV_ACCESS_TOKEN)
            .or(section.access_token)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ClientError::config_error(format!(
                    "no access token configured; set {ENV_ACCESS_TOKEN} or access-token in {CONFIG_FILENAME}"
                ))
            })?;

        let base_url = env(ENV_BASE_URL)
            .or(section.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| {
            ClientError::config_error(format!("invalid base-url '{base_url}': {e}"))
        })?;

        let timeout_ms = match env(ENV_TIMEOUT_MS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ClientError::config_error(format!("invalid {ENV_TIMEOUT_MS} '{raw}': {e}"))
            })?,
            None => section.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        };

        Ok(Self {
            base_url,
            access_token: SecretString::from(access_token),
            timeout_ms,
        })
    }

    /// `Authorization` header value.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }
}

/// Search for a config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let home = std::env::var("HOME").ok().map(PathBuf::from)?;
    let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}
