use crate::models::{
    line::{Bubble, FlexBox, FlexButton, FlexComponent, FlexText, PushMessage, UriAction},
    profile::RenderProfile,
    request::{NotificationRequest, non_blank, sanitize},
};

pub const TITLE_PLACEHOLDER: &str = "no title";
pub const AUTHOR_PLACEHOLDER: &str = "unknown user";
pub const VENUE_PLACEHOLDER: &str = "unknown venue";

const LABEL_COLOR: &str = "#FFFFFF";
const ROW_LABEL_COLOR: &str = "#AAAAAA";
const ROW_VALUE_COLOR: &str = "#666666";

/// Assembles the card-style push message for a classified request. Every
/// display field the provider requires to be non-empty is defaulted here;
/// provider-side validation rejects the whole message on a single blank
/// string, so this stage may not forward one.
pub fn build_message(request: &NotificationRequest, profile: &RenderProfile) -> PushMessage {
    let title = sanitize(request.title.as_deref(), TITLE_PLACEHOLDER);

    let alt_text = if profile.event_log {
        format!("[{}] {}", profile.label, title)
    } else {
        format!("[Board] {}: {}", profile.label, title)
    };

    let bubble = Bubble::new(
        build_header(profile),
        build_body(request, profile, &title),
        build_footer(profile),
    );

    PushMessage::flex(alt_text, bubble)
}

fn build_header(profile: &RenderProfile) -> FlexComponent {
    let mut contents = vec![FlexComponent::Text(FlexText {
        text: profile.label.clone(),
        weight: Some("bold".to_string()),
        size: Some("sm".to_string()),
        color: Some(LABEL_COLOR.to_string()),
        ..Default::default()
    })];

    if !profile.status_label.is_empty() {
        contents.push(FlexComponent::Text(FlexText {
            text: profile.status_label.clone(),
            size: Some("xs".to_string()),
            color: Some(profile.status_color.clone()),
            ..Default::default()
        }));
    }

    FlexComponent::Box(FlexBox {
        layout: "vertical".to_string(),
        contents,
        background_color: Some(profile.accent_color.clone()),
        padding_all: Some("md".to_string()),
        ..Default::default()
    })
}

fn build_body(request: &NotificationRequest, profile: &RenderProfile, title: &str) -> FlexComponent {
    let mut contents = vec![FlexComponent::Text(FlexText {
        text: title.to_string(),
        weight: Some("bold".to_string()),
        size: Some("lg".to_string()),
        wrap: Some(true),
        ..Default::default()
    })];

    contents.extend(build_rows(request, profile));

    FlexComponent::Box(FlexBox {
        layout: "vertical".to_string(),
        contents,
        spacing: Some("md".to_string()),
        ..Default::default()
    })
}

/// Detail rows in fixed order: venue, date, group (event-log mode only,
/// each only when the source field is non-blank), then the author row,
/// which always appears. Candidates are built as options and the absent
/// ones dropped, so a blank field omits its row instead of rendering empty.
fn build_rows(request: &NotificationRequest, profile: &RenderProfile) -> Vec<FlexComponent> {
    let author = sanitize(request.author_name.as_deref(), AUTHOR_PLACEHOLDER);

    let venue_row = profile
        .event_log
        .then(|| non_blank(request.venue_name.as_deref()))
        .flatten()
        .map(|venue| detail_row("Venue", &sanitize(Some(venue), VENUE_PLACEHOLDER)));

    let date_row = profile
        .event_log
        .then(|| non_blank(request.event_date.as_deref()))
        .flatten()
        .map(|date| detail_row("Date", date));

    let group_row = profile
        .event_log
        .then(|| non_blank(request.group_name.as_deref()))
        .flatten()
        .map(|group| detail_row("Group", group));

    let candidates = vec![
        venue_row,
        date_row,
        group_row,
        Some(detail_row("Author", &author)),
    ];

    candidates.into_iter().flatten().collect()
}

fn detail_row(label: &str, value: &str) -> FlexComponent {
    FlexComponent::Box(FlexBox {
        layout: "baseline".to_string(),
        contents: vec![
            FlexComponent::Text(FlexText {
                text: label.to_string(),
                size: Some("sm".to_string()),
                color: Some(ROW_LABEL_COLOR.to_string()),
                flex: Some(1),
                ..Default::default()
            }),
            FlexComponent::Text(FlexText {
                text: value.to_string(),
                size: Some("sm".to_string()),
                color: Some(ROW_VALUE_COLOR.to_string()),
                flex: Some(3),
                wrap: Some(true),
                ..Default::default()
            }),
        ],
        ..Default::default()
    })
}

fn build_footer(profile: &RenderProfile) -> FlexComponent {
    let label = if profile.event_log {
        "View event log"
    } else {
        "View post"
    };

    FlexComponent::Box(FlexBox {
        layout: "vertical".to_string(),
        contents: vec![FlexComponent::Button(FlexButton {
            style: "link".to_string(),
            color: profile.accent_color.clone(),
            action: UriAction::new(label, profile.deep_link.clone()),
        })],
        ..Default::default()
    })
}
