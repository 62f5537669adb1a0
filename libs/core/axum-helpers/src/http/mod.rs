//! HTTP middleware.
//!
//! ```ignore
//! use axum_helpers::http::request_log;
//!
//! let app = Router::new()
//!     .route("/users", get(list_users))
//!     .layer(axum::middleware::from_fn(request_log));
//! ```

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs the method and path of every request before it reaches the handler.
///
/// The query string is not part of the logged path.
pub async fn request_log(request: Request, next: Next) -> Response {
    tracing::info!(
        "Request method {} and path {}",
        request.method(),
        request.uri().path()
    );

    next.run(request).await
}
