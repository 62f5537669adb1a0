use axum::Router;

pub mod health;
pub mod users;

/// All application routes, mounted at the root.
///
/// Returns a stateless Router; sub-routers have their state applied.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(users::router(state))
}

/// Router with the `/ready` endpoint backed by a real database check.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
