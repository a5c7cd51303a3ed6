use std::{collections::HashMap, time::Instant};

use tracing::{debug, warn};

use crate::{
    clients::settings::SettingsClient,
    config::Config,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    config: Config,
}

impl HealthChecker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        let store_health = self.check_settings_store().await;
        checks.insert("settings_store".to_string(), store_health);

        let credential_health = self.check_push_credential();
        checks.insert("push_credential".to_string(), credential_health);

        let overall_status = Self::determine_overall_status(&checks);

        HealthCheckResponse {
            status: overall_status,
            checks,
        }
    }

    /// Delivery falls back to environment values when the store is down,
    /// so an unreachable store degrades the service without failing it.
    async fn check_settings_store(&self) -> ServiceHealth {
        let start = Instant::now();

        match SettingsClient::connect(&self.config.database_url).await {
            Ok(client) => match client.fetch_settings().await {
                Ok(_) => {
                    let elapsed = start.elapsed().as_millis() as u64;
                    debug!(response_time_ms = elapsed, "Settings store health check passed");
                    ServiceHealth::healthy(elapsed)
                }
                Err(e) => {
                    warn!(error = %e, "Settings store query failed");
                    ServiceHealth::degraded(format!("Settings query failed: {}", e))
                }
            },
            Err(e) => {
                warn!(error = %e, "Settings store connection failed");
                ServiceHealth::degraded(format!("Connection failed: {}", e))
            }
        }
    }

    fn check_push_credential(&self) -> ServiceHealth {
        if self.config.line_channel_token.trim().is_empty() {
            ServiceHealth::unhealthy("Push provider credential is not configured".to_string())
        } else {
            ServiceHealth::healthy(0)
        }
    }

    fn determine_overall_status(checks: &HashMap<String, ServiceHealth>) -> HealthStatus {
        let has_unhealthy = checks
            .values()
            .any(|health| health.status == HealthStatus::Unhealthy);

        let has_degraded = checks
            .values()
            .any(|health| health.status == HealthStatus::Degraded);

        if has_unhealthy {
            HealthStatus::Unhealthy
        } else if has_degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        }
    }
}
