//! API Models
//!
//! Response bodies owned by the REST surface itself. The interview wire
//! schemas live in `interview-core` and are shared with the HTTP bridging
//! client.

use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by the REST surface.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "Generation failed".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"message":"Generation failed"}"#);
    }
}
