use serde::Serialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonValue>,
}

impl ApiResponse {
    pub fn success(message: String) -> Self {
        Self {
            success: true,
            message,
            error: None,
        }
    }

    pub fn error(error: JsonValue, message: String) -> Self {
        Self {
            success: false,
            message,
            error: Some(error),
        }
    }
}
