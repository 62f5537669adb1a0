use axum::Router;
use domain_users::{PostgresUserRepository, UserCache, UserService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PostgresUserRepository::new(state.db.clone());
    let service = UserService::new(repository, UserCache::new(), state.config.users.clone());
    handlers::router(service)
}
