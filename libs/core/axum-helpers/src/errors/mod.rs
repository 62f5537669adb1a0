use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body for requests that match no route.
///
/// ```json
/// { "error": "NotFound", "message": "Cannot GET /nope" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Fallback handler for unmatched routes.
pub async fn not_found(method: axum::http::Method, uri: axum::http::Uri) -> Response {
    tracing::debug!(%method, path = uri.path(), "No route matched");

    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: format!("Cannot {} {}", method, uri.path()),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, Uri};
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_not_found_body() {
        let response = not_found(Method::GET, Uri::from_static("/nope?x=1")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NotFound");
        assert_eq!(json["message"], "Cannot GET /nope");
    }
}
