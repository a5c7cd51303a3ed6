use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

fn default_line_api_url() -> String {
    "https://api.line.me".to_string()
}

fn default_server_port() -> u16 {
    8080
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    /// Channel credential for the push provider. May be left unset; the
    /// dispatcher reports a configuration error instead of sending.
    #[serde(default)]
    pub line_channel_token: String,

    #[serde(default = "default_line_api_url")]
    pub line_api_url: String,

    pub base_app_url: String,

    pub database_url: String,

    /// Environment fallback for the maintenance flag, compared against the
    /// literal "true". A value in the settings table takes precedence.
    #[serde(default)]
    pub maintenance_mode: String,

    /// Environment fallback for the maintenance allow-list, comma-separated.
    #[serde(default)]
    pub notify_recipients: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
