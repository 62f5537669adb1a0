use std::sync::Arc;
use validator::Validate;

use crate::cache::UserCache;
use crate::config::UsersConfig;
use crate::error::{UserError, UserResult};
use crate::models::{
    ChangePasswordRequest, LoginRequest, LookupSource, NewUser, Pagination, RegisterRequest,
    UpdateUser, User, UserSchema,
};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    cache: UserCache,
    config: UsersConfig,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, cache: UserCache, config: UsersConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            cache,
            config,
        }
    }

    /// List every user.
    ///
    /// The page window is computed and logged but not applied; callers
    /// always receive the full collection.
    pub async fn list_users(&self, pagination: Pagination) -> UserResult<Vec<User>> {
        let (start, end) = pagination.window();
        tracing::debug!(
            page = pagination.page,
            limit = pagination.limit,
            start,
            end,
            "Listing users"
        );

        self.repository.list().await
    }

    /// Look up a user by raw path id, answering from the cache when possible.
    pub async fn get_user(&self, raw_id: &str) -> UserResult<(Option<User>, LookupSource)> {
        if let Some(cached) = self.cache.get(raw_id).await {
            tracing::info!(id = raw_id, source = %LookupSource::Cache, "User lookup");
            return Ok((cached, LookupSource::Cache));
        }

        let id = parse_id(raw_id)?;
        let user = self.repository.get_by_id(id).await?;
        self.cache.insert(raw_id, user.clone()).await;

        tracing::info!(id = raw_id, source = %LookupSource::Database, "User lookup");
        Ok((user, LookupSource::Database))
    }

    /// Hash the password and persist a new user.
    pub async fn register(&self, input: RegisterRequest) -> UserResult<User> {
        if self.config.enforce_schema {
            UserSchema::from(&input)
                .validate()
                .map_err(|e| UserError::Validation(e.to_string()))?;
        }

        let hashed_password = hash_password(&input.password)?;

        self.repository
            .create(NewUser {
                name: input.name,
                email: input.email,
                hashed_password,
            })
            .await
    }

    pub async fn update_user(&self, raw_id: &str, input: UpdateUser) -> UserResult<User> {
        let id = parse_id(raw_id)?;
        self.repository.update_profile(id, input).await
    }

    pub async fn delete_user(&self, raw_id: &str) -> UserResult<()> {
        let id = parse_id(raw_id)?;
        self.repository.delete(id).await
    }

    /// Stateless credential check. No session or token is issued.
    pub async fn login(&self, input: LoginRequest) -> UserResult<User> {
        let user = self
            .repository
            .get_by_email(&input.email)
            .await?
            .ok_or(UserError::NoUserFound)?;

        if !verify_password(&input.password, &user.hashed_password)? {
            return Err(UserError::InvalidPassword);
        }

        Ok(user)
    }

    /// Verify the current password, then store a new salted hash.
    pub async fn change_password(&self, input: ChangePasswordRequest) -> UserResult<()> {
        let user = self
            .repository
            .get_by_email(&input.email)
            .await?
            .ok_or(UserError::NoUserFound)?;

        if !verify_password(&input.current_password, &user.hashed_password)? {
            return Err(UserError::InvalidPassword);
        }

        let hashed_password = hash_password(&input.new_password)?;
        self.repository
            .update_password(&user.email, hashed_password)
            .await
    }
}

fn parse_id(raw_id: &str) -> UserResult<i32> {
    raw_id
        .parse()
        .map_err(|_| UserError::InvalidId(raw_id.to_string()))
}
