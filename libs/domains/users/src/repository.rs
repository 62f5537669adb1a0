use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, UpdateUser, User};

pub(crate) const UPDATE_NOT_FOUND: &str = "Record to update not found.";
pub(crate) const DELETE_NOT_FOUND: &str = "Record to delete does not exist.";
pub(crate) const DUPLICATE_EMAIL: &str = "Unique constraint failed on the fields: (`email`)";

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id
    async fn list(&self) -> UserResult<Vec<User>>;

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert a user; the store assigns the id
    async fn create(&self, user: NewUser) -> UserResult<User>;

    /// Overwrite the provided profile fields of an existing user
    async fn update_profile(&self, id: i32, input: UpdateUser) -> UserResult<User>;

    async fn delete(&self, id: i32) -> UserResult<()>;

    /// Replace the stored hash of the user with this email
    async fn update_password(&self, email: &str, hashed_password: String) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Table {
    users: HashMap<i32, User>,
    last_id: i32,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        let mut users: Vec<User> = table.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        Ok(self.table.read().await.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        if table.email_taken(&user.email, None) {
            return Err(UserError::Store(DUPLICATE_EMAIL.to_string()));
        }

        table.last_id += 1;
        let user = User {
            id: table.last_id,
            name: user.name,
            email: user.email,
            hashed_password: user.hashed_password,
        };
        table.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update_profile(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        if !table.users.contains_key(&id) {
            return Err(UserError::Store(UPDATE_NOT_FOUND.to_string()));
        }
        if let Some(ref email) = input.email {
            if table.email_taken(email, Some(id)) {
                return Err(UserError::Store(DUPLICATE_EMAIL.to_string()));
            }
        }

        let user = table
            .users
            .get_mut(&id)
            .ok_or_else(|| UserError::Store(UPDATE_NOT_FOUND.to_string()))?;
        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(email) = input.email {
            user.email = email;
        }

        tracing::info!(user_id = id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let mut table = self.table.write().await;

        match table.users.remove(&id) {
            Some(_) => {
                tracing::info!(user_id = id, "Deleted user");
                Ok(())
            }
            None => Err(UserError::Store(DELETE_NOT_FOUND.to_string())),
        }
    }

    async fn update_password(&self, email: &str, hashed_password: String) -> UserResult<()> {
        let mut table = self.table.write().await;

        let user = table
            .users
            .values_mut()
            .find(|u| u.email == email)
            .ok_or_else(|| UserError::Store(UPDATE_NOT_FOUND.to_string()))?;
        user.hashed_password = hashed_password;

        tracing::info!(user_id = user.id, "Updated password");
        Ok(())
    }
}
