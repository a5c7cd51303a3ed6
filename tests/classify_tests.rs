use notify_service::models::{
    profile::{
        DEFAULT_COLOR, DEFAULT_LABEL, EVENT_LOG_COLOR, EVENT_LOG_LABEL, RenderProfile,
        STATUS_ATTENDED_LABEL, STATUS_PLANNED_COLOR, STATUS_PLANNED_LABEL,
    },
    request::NotificationRequest,
};

const BASE_URL: &str = "https://portal.example.com";

/// Test: Each board category maps to its own label and color
#[test]
fn test_known_categories_map_to_distinct_profiles() {
    let report = classify_category(Some("report"));
    let request = classify_category(Some("request"));
    let notice = classify_category(Some("notice"));

    assert_eq!(report.label, "Report");
    assert_eq!(request.label, "Request");
    assert_eq!(notice.label, "Notice");

    assert_ne!(report.accent_color, request.accent_color);
    assert_ne!(request.accent_color, notice.accent_color);
    assert_ne!(report.accent_color, notice.accent_color);
}

/// Test: Unrecognized categories degrade to the default profile instead of failing
#[test]
fn test_unrecognized_category_falls_back_to_default() {
    for category in [Some("banquet"), Some(""), None] {
        let profile = classify_category(category);

        assert_eq!(profile.label, DEFAULT_LABEL);
        assert_eq!(profile.accent_color, DEFAULT_COLOR);
        assert!(!profile.event_log);
    }
}

/// Test: Board posts with an id deep-link to the post, without one to the index
#[test]
fn test_board_deep_link_targets_post_when_id_present() {
    let mut request = NotificationRequest {
        category: Some("notice".to_string()),
        post_id: Some("42".to_string()),
        ..Default::default()
    };

    let profile = RenderProfile::classify(&request, BASE_URL);
    assert_eq!(profile.deep_link, "https://portal.example.com/posts/42");

    request.post_id = None;
    let profile = RenderProfile::classify(&request, BASE_URL);
    assert_eq!(profile.deep_link, "https://portal.example.com/posts");
}

/// Test: Event-log entries always deep-link to the log index, never a post
#[test]
fn test_event_log_deep_link_ignores_post_id() {
    let request = NotificationRequest {
        category: Some("event-log".to_string()),
        post_id: Some("42".to_string()),
        ..Default::default()
    };

    let profile = RenderProfile::classify(&request, BASE_URL);

    assert!(profile.event_log);
    assert_eq!(profile.deep_link, "https://portal.example.com/events");
    assert_eq!(profile.label, EVENT_LOG_LABEL);
    assert_eq!(profile.accent_color, EVENT_LOG_COLOR);
}

/// Test: A trailing slash on the base URL does not double up in links
#[test]
fn test_base_url_trailing_slash_is_normalized() {
    let request = NotificationRequest {
        category: Some("report".to_string()),
        post_id: Some("7".to_string()),
        ..Default::default()
    };

    let profile = RenderProfile::classify(&request, "https://portal.example.com/");

    assert_eq!(profile.deep_link, "https://portal.example.com/posts/7");
}

/// Test: Event lifecycle states map to status labels, anything else to none
#[test]
fn test_event_status_classification() {
    let attended = classify_event_status(Some("attended"));
    assert_eq!(attended.status_label, STATUS_ATTENDED_LABEL);

    let planned = classify_event_status(Some("planned"));
    assert_eq!(planned.status_label, STATUS_PLANNED_LABEL);
    assert_eq!(planned.status_color, STATUS_PLANNED_COLOR);

    let unknown = classify_event_status(Some("cancelled"));
    assert!(unknown.status_label.is_empty());
    assert_eq!(unknown.status_color, STATUS_PLANNED_COLOR);

    let absent = classify_event_status(None);
    assert!(absent.status_label.is_empty());
}

/// Test: Ordinary board posts never carry a status label
#[test]
fn test_board_posts_have_no_status_label() {
    let request = NotificationRequest {
        category: Some("report".to_string()),
        event_status: Some("attended".to_string()),
        ..Default::default()
    };

    let profile = RenderProfile::classify(&request, BASE_URL);

    assert!(profile.status_label.is_empty());
}

fn classify_category(category: Option<&str>) -> RenderProfile {
    let request = NotificationRequest {
        category: category.map(str::to_string),
        ..Default::default()
    };

    RenderProfile::classify(&request, BASE_URL)
}

fn classify_event_status(status: Option<&str>) -> RenderProfile {
    let request = NotificationRequest {
        category: Some("event-log".to_string()),
        event_status: status.map(str::to_string),
        ..Default::default()
    };

    RenderProfile::classify(&request, BASE_URL)
}
