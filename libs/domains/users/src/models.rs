use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page used when `page` is missing or unusable
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when `limit` is missing or unusable
pub const DEFAULT_LIMIT: u32 = 3;

/// User record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
}

/// Fields persisted on registration; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

/// Registration body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Ann")]
    pub name: String,
    pub password: String,
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Login body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Password change body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: String,
    pub current_password: String,
    pub new_password: String,
}

/// Profile update body. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Raw `page` / `limit` query parameters.
///
/// Kept as strings so that unparsable values fall back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 3)
    pub limit: Option<String>,
}

/// Parsed pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<&ListParams> for Pagination {
    fn from(params: &ListParams) -> Self {
        Self {
            page: parse_positive(params.page.as_deref(), DEFAULT_PAGE),
            limit: parse_positive(params.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}

impl Pagination {
    /// Half-open `[start, end)` slice bounds for this page.
    pub fn window(&self) -> (u64, u64) {
        let page = u64::from(self.page);
        let limit = u64::from(self.limit);
        (
            page.saturating_sub(1).saturating_mul(limit),
            page.saturating_mul(limit),
        )
    }
}

fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(|s| s.trim().parse::<u32>()) {
        Some(Ok(value)) if value > 0 => value,
        _ => default,
    }
}

/// Declarative shape check for user profile fields
#[derive(Debug, Clone, Validate)]
pub struct UserSchema {
    #[validate(length(min = 3, max = 30, message = "name must be between 3 and 30 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

impl From<&RegisterRequest> for UserSchema {
    fn from(input: &RegisterRequest) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
        }
    }
}

/// `{"message": ...}` response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": ...}` response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Where a single-user lookup was answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    Cache,
    Database,
}

impl LookupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupSource::Cache => "cache",
            LookupSource::Database => "database",
        }
    }
}

impl std::fmt::Display for LookupSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
