use crate::core::errors::Result;
use config::{Config, Environment, File};
use log::info;
use serde::Deserialize;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Settings
-------------------------------------------------------------------------------------------------*/

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default `User-Agent` header sent with the HTTP request.
pub const DEFAULT_USER_AGENT: &str = concat!("cloudip/", env!("CARGO_PKG_VERSION"));

/// Runtime settings, layered from built-in defaults, a configuration file, and `CLOUDIP_*`
/// environment variables (highest precedence).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Settings {
    /// HTTP request timeout in seconds.
    pub timeout: u64,

    /// `User-Agent` header sent with the HTTP request.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Load the settings. An explicit `config_file` must exist; without one, an optional
    /// `${HOME}/.cloudip.{yaml,toml,json,...}` file is read when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                info!("Using config file: {:?}", path);
                File::from(path).required(true)
            }
            None => {
                let home_config = dirs::home_dir()
                    .unwrap_or_default()
                    .join(".cloudip")
                    .to_string_lossy()
                    .into_owned();
                File::with_name(&home_config).required(false)
            }
        };

        let settings = Config::builder()
            .set_default("timeout", DEFAULT_TIMEOUT)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(file)
            .add_source(Environment::with_prefix("CLOUDIP"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
