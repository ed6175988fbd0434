//! The configuration structs used to build the AppConfig, and their impls.
use std::{net::SocketAddr, path::Path, time::Duration};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub site_config: SiteConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
    pub base_url: String,
}

/// Settings of the landing page and of the signup forms it embeds.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub product_name: String,
    /// How long a submission result stays visible before it is cleared.
    pub message_clear_millis: u64,
    pub client_timeout_millis: u64,
}

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    /// Merges `base.toml`, `{environment}.toml` and `APP_` prefixed environment variables, in that order.
    /// Nested keys are separated by a double underscore: `APP_NET_CONFIG__APP_PORT=3000`.
    pub fn load(config_dir: &Path, environment: &Environment) -> ConfigResult<Self> {
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let config: AppConfig = Figment::new()
            .merge(Toml::file_exact(config_dir.join("base.toml")))
            .merge(Toml::file_exact(config_dir.join(environment_filename)))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()?;

        Ok(config)
    }
}

impl NetConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.app_port))
    }

    pub fn valid_base_url(&self) -> ConfigResult<reqwest::Url> {
        reqwest::Url::parse(&self.base_url)
            .map_err(|er| ConfigError::InvalidBaseUrl(format!("{}: {er}", self.base_url)))
    }
}

impl SiteConfig {
    pub fn message_clear_delay(&self) -> Duration {
        Duration::from_millis(self.message_clear_millis)
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_millis(self.client_timeout_millis)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################
