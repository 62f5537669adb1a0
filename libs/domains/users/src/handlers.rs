use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{
    ChangePasswordRequest, ErrorBody, ListParams, LoginRequest, MessageResponse, Pagination,
    RegisterRequest, UpdateUser, User,
};
use crate::repository::UserRepository;
use crate::service::UserService;

const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        get_user,
        update_user,
        delete_user,
        register,
        login,
        change_password,
    ),
    components(schemas(
        User,
        UpdateUser,
        RegisterRequest,
        LoginRequest,
        ChangePasswordRequest,
        MessageResponse,
        ErrorBody
    )),
    tags(
        (name = TAG, description = "User records and password authentication")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/change-password", post(change_password))
        .with_state(shared_service)
}

/// List all users
///
/// `page` and `limit` are accepted but the full collection is returned.
#[utoipa::path(
    get,
    path = "/users",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 400, description = "Store failure", body = ErrorBody)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(params): Query<ListParams>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users(Pagination::from(&params)).await?;
    Ok(Json(users))
}

/// Get a user by id (cached)
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Numeric user id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 400, description = "Malformed id or store failure", body = ErrorBody)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<User>> {
    let (user, _source) = service.get_user(&id).await?;
    user.map(Json).ok_or(UserError::NotFound)
}

/// Update a user's name and/or email
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Numeric user id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed id, unknown user or store failure", body = ErrorBody)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> UserResult<Json<User>> {
    let Json(input) = payload?;
    let user = service.update_user(&id, input).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Numeric user id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Malformed id, unknown user or store failure", body = ErrorBody)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(&id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}

/// Register a new user
///
/// Unreadable bodies fall through to the generic 500 like any other failure.
#[utoipa::path(
    post,
    path = "/register",
    tag = TAG,
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User was created", body = String, content_type = "text/plain"),
        (status = 400, description = "Schema violation (only when enforced)", body = ErrorBody),
        (status = 500, description = "Error while creating a user", body = String, content_type = "text/plain")
    )
)]
async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(input)) => service.register(input).await,
        Err(rejection) => Err(rejection.into()),
    };

    match result {
        Ok(_) => (StatusCode::OK, "User was created").into_response(),
        Err(UserError::Validation(error)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error while creating a user").into_response()
        }
    }
}

/// Check credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = String, content_type = "text/plain"),
        (status = 401, description = "No user found / Invalid password", body = String, content_type = "text/plain"),
        (status = 500, description = "Login error", body = String, content_type = "text/plain")
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(input)) => service.login(input).await,
        Err(rejection) => Err(rejection.into()),
    };

    match result {
        Ok(_) => (StatusCode::OK, "Login successful").into_response(),
        Err(UserError::NoUserFound) => (StatusCode::UNAUTHORIZED, "No user found").into_response(),
        Err(UserError::InvalidPassword) => {
            (StatusCode::UNAUTHORIZED, "Invalid password").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Login failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Login error").into_response()
        }
    }
}

/// Change a user's password
#[utoipa::path(
    post,
    path = "/change-password",
    tag = TAG,
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed successfully", body = String, content_type = "text/plain"),
        (status = 401, description = "User not found! / Invalid current password!", body = String, content_type = "text/plain"),
        (status = 500, description = "Error while changing password", body = String, content_type = "text/plain")
    )
)]
async fn change_password<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(input)) => service.change_password(input).await,
        Err(rejection) => Err(rejection.into()),
    };

    match result {
        Ok(()) => (StatusCode::OK, "Password changed successfully").into_response(),
        Err(UserError::NoUserFound) => {
            (StatusCode::UNAUTHORIZED, "User not found!").into_response()
        }
        Err(UserError::InvalidPassword) => {
            (StatusCode::UNAUTHORIZED, "Invalid current password!").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Password change failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error while changing password",
            )
                .into_response()
        }
    }
}
