use anyhow::{Error, Result, anyhow};
use serde_json::Value as JsonValue;
use tokio_postgres::NoTls;
use tracing::{debug, warn};

use crate::{
    config::Config,
    models::delivery::{MAINTENANCE_KEY, RECIPIENTS_KEY, StoredSettings},
};

pub struct SettingsClient {
    client: tokio_postgres::Client,
}

impl SettingsClient {
    pub async fn connect(database_url: &str) -> Result<Self, Error> {
        let (client, connection) = tokio_postgres::connect(database_url, NoTls)
            .await
            .map_err(|e| anyhow!("Failed to connect to settings store: {}", e))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!(error = %e, "Settings store connection error");
            }
        });

        Ok(Self { client })
    }

    /// Reads both delivery-policy keys in one query. A key missing from the
    /// table, or stored with a SQL NULL value, stays `None`.
    pub async fn fetch_settings(&self) -> Result<StoredSettings, Error> {
        let keys = vec![MAINTENANCE_KEY, RECIPIENTS_KEY];

        let rows = self
            .client
            .query(
                "SELECT key, value FROM app_settings WHERE key = ANY($1)",
                &[&keys],
            )
            .await
            .map_err(|e| anyhow!("Settings query failed: {}", e))?;

        let mut settings = StoredSettings::default();

        for row in rows {
            let key: String = row.get("key");
            let value: Option<JsonValue> = row.get("value");

            match key.as_str() {
                MAINTENANCE_KEY => settings.maintenance = value,
                RECIPIENTS_KEY => settings.recipients = value,
                _ => {}
            }
        }

        debug!(
            maintenance_present = settings.maintenance.is_some(),
            recipients_present = settings.recipients.is_some(),
            "Fetched delivery settings"
        );

        Ok(settings)
    }
}

/// Best-effort settings read. Delivery must keep working when the store is
/// down, so any failure here resolves to "no stored values" and the caller
/// falls through to environment configuration.
pub async fn fetch_stored_settings(config: &Config) -> StoredSettings {
    match try_fetch(config).await {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "Settings store unavailable, using environment fallback");
            StoredSettings::default()
        }
    }
}

async fn try_fetch(config: &Config) -> Result<StoredSettings, Error> {
    let client = SettingsClient::connect(&config.database_url).await?;
    client.fetch_settings().await
}
