use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::{Modify, OpenApi};

/// Pulls the users domain paths and schemas into the service document
struct UsersPaths;

impl Modify for UsersPaths {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        openapi.merge(domain_users::ApiDoc::openapi());
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "User records with salted password authentication"
    ),
    modifiers(&UsersPaths)
)]
pub struct ApiDoc;
