//! Response envelopes
//!
//! Most endpoints wrap payloads in `{success, data}`; a handful return a
//! bare `{success, message}` acknowledgement. Comment endpoints use neither
//! (they return bare JSON) - that inconsistency is part of the API contract
//! and is preserved at the handler layer, not here.

use std::borrow::Cow;

use serde::Serialize;

/// `{success: true, data: ...}` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{success: true, message: ...}` acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: Cow<'static, str>,
}

impl ApiMessage {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(ApiResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], 1);
    }

    #[test]
    fn test_message_shape() {
        let json = serde_json::to_value(ApiMessage::new("Logged out successfully")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Logged out successfully");
    }
}
