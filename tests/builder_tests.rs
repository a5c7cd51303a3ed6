use notify_service::{
    builder::{AUTHOR_PLACEHOLDER, TITLE_PLACEHOLDER, build_message},
    models::{
        line::{FlexComponent, FlexText, PushMessage},
        profile::RenderProfile,
        request::NotificationRequest,
    },
};

const BASE_URL: &str = "https://portal.example.com";

/// Test: A blank or whitespace-only title is replaced by the placeholder
#[test]
fn test_blank_title_gets_placeholder() {
    for title in [None, Some(""), Some("   "), Some("\t\n")] {
        let request = NotificationRequest {
            category: Some("notice".to_string()),
            title: title.map(str::to_string),
            ..Default::default()
        };

        let message = build(&request);

        assert_eq!(title_text(&message), TITLE_PLACEHOLDER);
    }
}

/// Test: A populated title is trimmed but otherwise preserved
#[test]
fn test_populated_title_is_trimmed() {
    let request = NotificationRequest {
        category: Some("report".to_string()),
        title: Some("  Monthly report  ".to_string()),
        ..Default::default()
    };

    let message = build(&request);

    assert_eq!(title_text(&message), "Monthly report");
}

/// Test: A blank author still renders an author row, with the placeholder
#[test]
fn test_blank_author_gets_placeholder() {
    let request = NotificationRequest {
        category: Some("request".to_string()),
        author_name: Some("  ".to_string()),
        ..Default::default()
    };

    let message = build(&request);
    let rows = detail_rows(&message);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], ("Author".to_string(), AUTHOR_PLACEHOLDER.to_string()));
}

/// Test: A blank venue omits the venue row entirely
#[test]
fn test_blank_venue_omits_row() {
    let mut request = full_event_log_request();
    let with_venue = build(&request);

    request.venue_name = Some("   ".to_string());
    let without_venue = build(&request);

    assert_eq!(
        detail_rows(&with_venue).len(),
        detail_rows(&without_venue).len() + 1
    );
    assert!(
        detail_rows(&without_venue)
            .iter()
            .all(|(label, _)| label != "Venue")
    );
}

/// Test: Ordinary posts render only the author row, never event extras
#[test]
fn test_board_post_rows_exclude_event_extras() {
    let request = NotificationRequest {
        category: Some("request".to_string()),
        title: Some("Projector wanted".to_string()),
        author_name: Some("Alice".to_string()),
        // Populated event extras must still be ignored outside event-log mode.
        venue_name: Some("Izakaya Tanuki".to_string()),
        event_date: Some("2024-06-01".to_string()),
        group_name: Some("Tennis circle".to_string()),
        ..Default::default()
    };

    let message = build(&request);
    let rows = detail_rows(&message);

    assert_eq!(rows, vec![("Author".to_string(), "Alice".to_string())]);
    assert_eq!(header_texts(&message).len(), 1, "no status badge expected");
}

/// Test: Event-log rows appear in fixed order with the author row last
#[test]
fn test_event_log_row_order() {
    let message = build(&full_event_log_request());
    let rows = detail_rows(&message);

    let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["Venue", "Date", "Group", "Author"]);
}

/// Test: Event-log header carries the status badge when the state is known
#[test]
fn test_event_log_header_has_status_badge() {
    let message = build(&full_event_log_request());
    let texts = header_texts(&message);

    assert_eq!(texts.len(), 2);
    assert_eq!(texts[1], "Attended");
}

/// Test: Alt text wording differs between board and event-log messages
#[test]
fn test_alt_text_varies_by_mode() {
    let board = build(&NotificationRequest {
        category: Some("notice".to_string()),
        title: Some("Hall closed".to_string()),
        ..Default::default()
    });
    assert_eq!(board.alt_text, "[Board] Notice: Hall closed");

    let event = build(&full_event_log_request());
    assert_eq!(event.alt_text, "[Event Log] Spring banquet");
}

/// Test: The footer button targets the deep link with the accent color
#[test]
fn test_footer_button_targets_deep_link() {
    let request = NotificationRequest {
        category: Some("notice".to_string()),
        post_id: Some("9".to_string()),
        ..Default::default()
    };

    let profile = RenderProfile::classify(&request, BASE_URL);
    let message = build_message(&request, &profile);

    let footer = as_box_contents(&message.contents.footer);
    let FlexComponent::Button(button) = &footer[0] else {
        panic!("footer should hold a button");
    };

    assert_eq!(button.action.uri, "https://portal.example.com/posts/9");
    assert_eq!(button.color, profile.accent_color);
}

fn build(request: &NotificationRequest) -> PushMessage {
    let profile = RenderProfile::classify(request, BASE_URL);
    build_message(request, &profile)
}

fn full_event_log_request() -> NotificationRequest {
    NotificationRequest {
        category: Some("event-log".to_string()),
        title: Some("Spring banquet".to_string()),
        author_name: Some("Bob".to_string()),
        venue_name: Some("Izakaya Tanuki".to_string()),
        event_date: Some("2024-04-12".to_string()),
        group_name: Some("Tennis circle".to_string()),
        event_status: Some("attended".to_string()),
        ..Default::default()
    }
}

fn as_box_contents(component: &FlexComponent) -> &[FlexComponent] {
    match component {
        FlexComponent::Box(flex_box) => &flex_box.contents,
        other => panic!("expected a box component, got {:?}", other),
    }
}

fn header_texts(message: &PushMessage) -> Vec<String> {
    as_box_contents(&message.contents.header)
        .iter()
        .map(|component| match component {
            FlexComponent::Text(FlexText { text, .. }) => text.clone(),
            other => panic!("expected text in header, got {:?}", other),
        })
        .collect()
}

fn title_text(message: &PushMessage) -> String {
    let body = as_box_contents(&message.contents.body);
    match &body[0] {
        FlexComponent::Text(FlexText { text, .. }) => text.clone(),
        other => panic!("expected title text, got {:?}", other),
    }
}

/// Label/value pairs of the detail rows following the title.
fn detail_rows(message: &PushMessage) -> Vec<(String, String)> {
    as_box_contents(&message.contents.body)[1..]
        .iter()
        .map(|row| {
            let cells = as_box_contents(row);
            let label = match &cells[0] {
                FlexComponent::Text(FlexText { text, .. }) => text.clone(),
                other => panic!("expected label text, got {:?}", other),
            };
            let value = match &cells[1] {
                FlexComponent::Text(FlexText { text, .. }) => text.clone(),
                other => panic!("expected value text, got {:?}", other),
            };
            (label, value)
        })
        .collect()
}
