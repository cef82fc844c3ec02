use crate::chrome::ChromeVersion;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";
pub const DEFAULT_IDENTITY_HEADER: &str = "x-remote-user";
pub const DEFAULT_SITE_TITLE: &str = "Intercollegiate Athletics Intranet";
pub const DEFAULT_WEBMASTER_EMAIL: &str = "icaweb@umn.edu";
pub const DEFAULT_WEBMASTER_NAME: &str = "ICA Technology Services";
pub const DEFAULT_PRODUCTION_HOST: &str = "www.athletics.umn.edu";
pub const DEFAULT_LOGOUT_URL: &str = "/Shibboleth.sso/Logout";
const DEFAULT_PG_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_PG_CONNECT_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_PG_ACQUIRE_TIMEOUT_MS: u64 = 2_000;

// Portal configuration sourced from environment variables, optionally
// overridden by the YAML file named in ICA_PORTAL_CONFIG.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub storage: StorageBackend,
    pub postgres: Option<PostgresConfig>,
    // YAML directory seed for the memory backend.
    pub seed_path: Option<PathBuf>,
    // Header set by the authenticating proxy (the web server's REMOTE_USER).
    pub identity_header: String,
    pub chrome_version: ChromeVersion,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => bail!("unknown storage backend: {other}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresConfig {
    pub url: String,
    #[serde(default = "default_pg_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_pg_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_pg_acquire_timeout_ms")]
    pub acquire_timeout_ms: u64,
}

fn default_pg_max_connections() -> u32 {
    DEFAULT_PG_MAX_CONNECTIONS
}

fn default_pg_connect_timeout_ms() -> u64 {
    DEFAULT_PG_CONNECT_TIMEOUT_MS
}

fn default_pg_acquire_timeout_ms() -> u64 {
    DEFAULT_PG_ACQUIRE_TIMEOUT_MS
}

/// Site-wide values interpolated into the page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub default_title: String,
    pub webmaster_email: String,
    pub webmaster_name: String,
    // Host name of the live site; other hosts get the testing banner (classic chrome).
    pub production_host: Option<String>,
    pub logout_url: String,
    pub analytics_id: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_SITE_TITLE.to_string(),
            webmaster_email: DEFAULT_WEBMASTER_EMAIL.to_string(),
            webmaster_name: DEFAULT_WEBMASTER_NAME.to_string(),
            production_host: Some(DEFAULT_PRODUCTION_HOST.to_string()),
            logout_url: DEFAULT_LOGOUT_URL.to_string(),
            analytics_id: None,
        }
    }
}

impl SiteConfig {
    /// Message returned when a page cannot be served because of a backend failure.
    pub fn unavailable_message(&self) -> String {
        format!(
            "Unable to load this page. Please contact {} for assistance.",
            self.webmaster_email
        )
    }
}

#[derive(Debug, Default, Deserialize)]
struct PortalConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    storage: Option<StorageBackend>,
    postgres: Option<PostgresConfig>,
    seed_path: Option<PathBuf>,
    identity_header: Option<String>,
    chrome_version: Option<ChromeVersion>,
    site: Option<SiteOverride>,
}

#[derive(Debug, Default, Deserialize)]
struct SiteOverride {
    default_title: Option<String>,
    webmaster_email: Option<String>,
    webmaster_name: Option<String>,
    production_host: Option<String>,
    logout_url: Option<String>,
    analytics_id: Option<String>,
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_nonempty(key).and_then(|value| value.parse::<T>().ok())
}

impl PortalConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_nonempty("ICA_PORTAL_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse ICA_PORTAL_BIND")?;
        let metrics_bind = env_nonempty("ICA_PORTAL_METRICS_BIND")
            .unwrap_or_else(|| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse ICA_PORTAL_METRICS_BIND")?;
        let postgres = env_nonempty("ICA_PORTAL_POSTGRES_URL").map(|url| PostgresConfig {
            url,
            max_connections: env_parsed("ICA_PORTAL_PG_MAX_CONNECTIONS")
                .filter(|value| *value > 0)
                .unwrap_or(DEFAULT_PG_MAX_CONNECTIONS),
            connect_timeout_ms: env_parsed("ICA_PORTAL_PG_CONNECT_TIMEOUT_MS")
                .filter(|value| *value > 0)
                .unwrap_or(DEFAULT_PG_CONNECT_TIMEOUT_MS),
            acquire_timeout_ms: env_parsed("ICA_PORTAL_PG_ACQUIRE_TIMEOUT_MS")
                .filter(|value| *value > 0)
                .unwrap_or(DEFAULT_PG_ACQUIRE_TIMEOUT_MS),
        });
        // A database URL alone selects postgres unless the backend is named explicitly.
        let storage = match env_nonempty("ICA_PORTAL_STORAGE") {
            Some(value) => value.parse().with_context(|| "parse ICA_PORTAL_STORAGE")?,
            None if postgres.is_some() => StorageBackend::Postgres,
            None => StorageBackend::Memory,
        };
        let chrome_version = match env_nonempty("ICA_PORTAL_CHROME") {
            Some(value) => value.parse().with_context(|| "parse ICA_PORTAL_CHROME")?,
            None => ChromeVersion::default(),
        };

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            default_title: env_nonempty("ICA_PORTAL_SITE_TITLE").unwrap_or(defaults.default_title),
            webmaster_email: env_nonempty("ICA_PORTAL_WEBMASTER_EMAIL")
                .unwrap_or(defaults.webmaster_email),
            webmaster_name: env_nonempty("ICA_PORTAL_WEBMASTER_NAME")
                .unwrap_or(defaults.webmaster_name),
            production_host: env_nonempty("ICA_PORTAL_PRODUCTION_HOST")
                .or(defaults.production_host),
            logout_url: env_nonempty("ICA_PORTAL_LOGOUT_URL").unwrap_or(defaults.logout_url),
            analytics_id: env_nonempty("ICA_PORTAL_ANALYTICS_ID"),
        };

        Ok(Self {
            bind_addr,
            metrics_bind,
            storage,
            postgres,
            seed_path: env_nonempty("ICA_PORTAL_SEED").map(PathBuf::from),
            identity_header: env_nonempty("ICA_PORTAL_IDENTITY_HEADER")
                .map(|value| value.to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_string()),
            chrome_version,
            site,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Some(path) = env_nonempty("ICA_PORTAL_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read ICA_PORTAL_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        config.validate()?;
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: PortalConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse portal config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.postgres {
            self.postgres = Some(value);
        }
        if let Some(value) = override_cfg.storage {
            self.storage = value;
        }
        if let Some(value) = override_cfg.seed_path {
            self.seed_path = Some(value);
        }
        if let Some(value) = override_cfg.identity_header {
            self.identity_header = value.to_ascii_lowercase();
        }
        if let Some(value) = override_cfg.chrome_version {
            self.chrome_version = value;
        }
        if let Some(site) = override_cfg.site {
            if let Some(value) = site.default_title {
                self.site.default_title = value;
            }
            if let Some(value) = site.webmaster_email {
                self.site.webmaster_email = value;
            }
            if let Some(value) = site.webmaster_name {
                self.site.webmaster_name = value;
            }
            if let Some(value) = site.production_host {
                self.site.production_host = Some(value).filter(|host| !host.is_empty());
            }
            if let Some(value) = site.logout_url {
                self.site.logout_url = value;
            }
            if let Some(value) = site.analytics_id {
                self.site.analytics_id = Some(value).filter(|id| !id.is_empty());
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.storage == StorageBackend::Postgres && self.postgres.is_none() {
            bail!("postgres storage selected but no postgres url configured");
        }
        axum::http::HeaderName::from_bytes(self.identity_header.as_bytes())
            .with_context(|| format!("invalid identity header: {}", self.identity_header))?;
        Ok(())
    }
}
