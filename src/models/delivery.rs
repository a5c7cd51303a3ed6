use serde_json::Value as JsonValue;

use crate::config::Config;

pub const MAINTENANCE_KEY: &str = "maintenance_mode";
pub const RECIPIENTS_KEY: &str = "notify_recipients";

/// Raw values of the two settings keys as read from the settings table.
/// `None` means the key was absent or the store was unreachable.
#[derive(Debug, Clone, Default)]
pub struct StoredSettings {
    pub maintenance: Option<JsonValue>,
    pub recipients: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryMode {
    Broadcast,
    Multicast(Vec<String>),
    Skip,
}

#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    pub maintenance_active: bool,
    pub recipients: Vec<String>,
}

impl DeliveryConfig {
    /// The two keys resolve independently: the store may supply one while
    /// the environment supplies the other.
    pub fn resolve(stored: &StoredSettings, config: &Config) -> Self {
        let maintenance_active = match &stored.maintenance {
            Some(value) if !value.is_null() => value.as_bool().unwrap_or(false),
            _ => config.maintenance_mode.trim() == "true",
        };

        let recipients = match &stored.recipients {
            Some(JsonValue::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect(),
            _ => config
                .notify_recipients
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
        };

        Self {
            maintenance_active,
            recipients,
        }
    }

    /// Maintenance off broadcasts to all subscribers. Maintenance on
    /// multicasts to the allow-list, or skips delivery outright when the
    /// list is empty; a skip is reported upstream as success, not an error.
    pub fn delivery_mode(self) -> DeliveryMode {
        if !self.maintenance_active {
            DeliveryMode::Broadcast
        } else if self.recipients.is_empty() {
            DeliveryMode::Skip
        } else {
            DeliveryMode::Multicast(self.recipients)
        }
    }
}
