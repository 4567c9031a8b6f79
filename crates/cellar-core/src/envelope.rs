//! The uniform JSON response envelope.

use serde::{Deserialize, Serialize};

/// The `{success, data?, error?, message?}` wrapper used by every API
/// endpoint. Validation failures additionally carry a `details` array;
/// that field is attached at the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A success envelope carrying data.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// A success envelope carrying data and a message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    /// A success envelope carrying only a message.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    /// A failure envelope.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::failure("Beer not found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Beer not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn deserializes_with_absent_fields() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[3]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(vec![3]));
        assert_eq!(envelope.message, None);
    }
}
