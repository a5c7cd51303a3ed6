use serde::Deserialize;

/// Category tag that switches rendering to the social-event-log card.
pub const EVENT_LOG_CATEGORY: &str = "event-log";

/// Notification payload posted by the portal when a board post or event-log
/// entry is created. Every field is untrusted and optional; downstream
/// stages apply defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationRequest {
    pub post_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub author_name: Option<String>,

    // Event-log display extras, ignored for ordinary board categories.
    pub venue_name: Option<String>,
    pub event_date: Option<String>,
    pub group_name: Option<String>,
    pub event_status: Option<String>,
}

impl NotificationRequest {
    pub fn is_event_log(&self) -> bool {
        self.category.as_deref() == Some(EVENT_LOG_CATEGORY)
    }
}

/// Trim `value`, substitute `placeholder` when the result is empty, and trim
/// once more. The provider rejects messages containing empty strings, so
/// every required display field passes through here before construction.
pub fn sanitize(value: Option<&str>, placeholder: &str) -> String {
    let trimmed = value.unwrap_or_default().trim();

    if trimmed.is_empty() {
        placeholder.trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trimmed value of an optional field, with blank and whitespace-only
/// treated the same as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
