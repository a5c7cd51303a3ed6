use tracing::info;

use crate::{
    builder::build_message,
    clients::{line::LineClient, settings::fetch_stored_settings},
    config::Config,
    error::DispatchError,
    models::{
        delivery::{DeliveryConfig, DeliveryMode},
        profile::RenderProfile,
        request::NotificationRequest,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Delivered,
    Skipped,
}

/// Dispatch pipeline for one post-created event: classify the request,
/// build the card message, resolve the delivery mode from the settings
/// store (environment fallback per key), then hand off to the provider
/// client. At most one provider call per invocation; a skipped delivery is
/// success, not an error.
pub async fn dispatch_notification(
    config: &Config,
    request: NotificationRequest,
) -> Result<DispatchOutcome, DispatchError> {
    let profile = RenderProfile::classify(&request, &config.base_app_url);
    let message = build_message(&request, &profile);

    let stored = fetch_stored_settings(config).await;
    let mode = DeliveryConfig::resolve(&stored, config).delivery_mode();

    match mode {
        DeliveryMode::Skip => {
            info!("Maintenance mode active with no recipients configured, skipping delivery");
            Ok(DispatchOutcome::Skipped)
        }
        DeliveryMode::Broadcast => {
            let client = LineClient::new(config)?;
            client.broadcast(&message).await?;

            info!(
                event_log = profile.event_log,
                "Notification broadcast to all subscribers"
            );
            Ok(DispatchOutcome::Delivered)
        }
        DeliveryMode::Multicast(recipients) => {
            let client = LineClient::new(config)?;

            info!(
                recipient_count = recipients.len(),
                "Maintenance mode active, delivering to allow-list only"
            );

            client.multicast(recipients, &message).await?;
            Ok(DispatchOutcome::Delivered)
        }
    }
}
