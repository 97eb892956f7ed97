/**
 * Error Conversion
 *
 * This module converts API errors into HTTP responses using the shared
 * error envelope:
 *
 * ```json
 * {
 *   "statusCode": 401,
 *   "message": "Invalid access token",
 *   "success": false
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
        }

        let body = Json(serde_json::json!({
            "statusCode": status.as_u16(),
            "message": self.message(),
            "success": false,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = ApiError::unauthorized("Invalid access token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["statusCode"], 401);
        assert_eq!(body["message"], "Invalid access token");
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
    }
}
