use serde::Serialize;

/// Wire types for the LINE Messaging API flex-message payload. Only the
/// subset of the flex schema this service emits is modelled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub alt_text: String,
    pub contents: Bubble,
}

impl PushMessage {
    pub fn flex(alt_text: String, contents: Bubble) -> Self {
        Self {
            kind: "flex".to_string(),
            alt_text,
            contents,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Bubble {
    #[serde(rename = "type")]
    pub kind: String,
    pub header: FlexComponent,
    pub body: FlexComponent,
    pub footer: FlexComponent,
}

impl Bubble {
    pub fn new(header: FlexComponent, body: FlexComponent, footer: FlexComponent) -> Self {
        Self {
            kind: "bubble".to_string(),
            header,
            body,
            footer,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FlexComponent {
    Text(FlexText),
    #[serde(rename = "box")]
    Box(FlexBox),
    Button(FlexButton),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexText {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexBox {
    pub layout: String,
    pub contents: Vec<FlexComponent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_all: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlexButton {
    pub style: String,
    pub color: String,
    pub action: UriAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct UriAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub uri: String,
}

impl UriAction {
    pub fn new(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            kind: "uri".to_string(),
            label: label.into(),
            uri: uri.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BroadcastPayload {
    pub messages: Vec<PushMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MulticastPayload {
    pub to: Vec<String>,
    pub messages: Vec<PushMessage>,
}
