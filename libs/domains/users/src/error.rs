use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::{ErrorBody, MessageResponse};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid user id: {0}")]
    InvalidId(String),

    #[error("No user found")]
    NoUserFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("{0}")]
    Validation(String),

    /// Request body that could not be read as the expected JSON
    #[error("{0}")]
    Body(#[from] JsonRejection),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Failure reported by the backing store, message passed through as is
    #[error("{0}")]
    Store(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Store(err.to_string())
    }
}

/// Default mapping used by the CRUD routes.
///
/// Store, id and validation failures are client errors carrying the raw
/// message. Auth routes map their failures themselves.
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("User not found")),
            )
                .into_response(),
            UserError::InvalidId(_)
            | UserError::Validation(_)
            | UserError::Body(_)
            | UserError::Store(_) => {
                tracing::warn!(error = %self, "Request failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            UserError::NoUserFound | UserError::InvalidPassword => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            UserError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
