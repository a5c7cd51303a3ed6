use crate::models::request::NotificationRequest;

pub const DEFAULT_LABEL: &str = "Post";
pub const DEFAULT_COLOR: &str = "#95A5A6";

pub const EVENT_LOG_LABEL: &str = "Event Log";
pub const EVENT_LOG_COLOR: &str = "#F39C12";

pub const STATUS_ATTENDED_LABEL: &str = "Attended";
pub const STATUS_PLANNED_LABEL: &str = "Planned";
pub const STATUS_ATTENDED_COLOR: &str = "#27AE60";
pub const STATUS_PLANNED_COLOR: &str = "#7F8C8D";

/// Display metadata derived from the request's category. Classification
/// never fails; unrecognized input degrades to the default label/color.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProfile {
    pub event_log: bool,
    pub label: String,
    pub accent_color: String,
    pub deep_link: String,
    pub status_label: String,
    pub status_color: String,
}

impl RenderProfile {
    pub fn classify(request: &NotificationRequest, base_app_url: &str) -> Self {
        let base = base_app_url.trim_end_matches('/');

        if request.is_event_log() {
            let (status_label, status_color) = classify_status(request.event_status.as_deref());

            return Self {
                event_log: true,
                label: EVENT_LOG_LABEL.to_string(),
                accent_color: EVENT_LOG_COLOR.to_string(),
                // Event-log entries link to the shared log index, never to
                // an individual post.
                deep_link: format!("{}/events", base),
                status_label,
                status_color,
            };
        }

        let (label, accent_color) = classify_category(request.category.as_deref());

        let deep_link = match request.post_id.as_deref() {
            Some(id) => format!("{}/posts/{}", base, id),
            None => format!("{}/posts", base),
        };

        Self {
            event_log: false,
            label: label.to_string(),
            accent_color: accent_color.to_string(),
            deep_link,
            status_label: String::new(),
            status_color: STATUS_PLANNED_COLOR.to_string(),
        }
    }
}

fn classify_category(category: Option<&str>) -> (&'static str, &'static str) {
    match category {
        Some("report") => ("Report", "#E74C3C"),
        Some("request") => ("Request", "#3498DB"),
        Some("notice") => ("Notice", "#2ECC71"),
        _ => (DEFAULT_LABEL, DEFAULT_COLOR),
    }
}

fn classify_status(status: Option<&str>) -> (String, String) {
    match status {
        Some("attended") => (
            STATUS_ATTENDED_LABEL.to_string(),
            STATUS_ATTENDED_COLOR.to_string(),
        ),
        Some("planned") => (
            STATUS_PLANNED_LABEL.to_string(),
            STATUS_PLANNED_COLOR.to_string(),
        ),
        _ => (String::new(), STATUS_PLANNED_COLOR.to_string()),
    }
}
