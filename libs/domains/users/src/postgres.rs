use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{NewUser, UpdateUser, User},
    repository::{DELETE_NOT_FOUND, UPDATE_NOT_FOUND, UserRepository},
};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, user: NewUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = user.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn update_profile(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| UserError::Store(UPDATE_NOT_FOUND.to_string()))?;

        if input.is_empty() {
            return Ok(model.into());
        }

        let mut active_model = model.into_active_model();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(email) = input.email {
            active_model.email = Set(email);
        }

        let updated = active_model.update(&self.db).await?;

        tracing::info!(user_id = id, "Updated user");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(UserError::Store(DELETE_NOT_FOUND.to_string()));
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }

    async fn update_password(&self, email: &str, hashed_password: String) -> UserResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::HashedPassword, Expr::value(hashed_password))
            .filter(entity::Column::Email.eq(email))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(UserError::Store(UPDATE_NOT_FOUND.to_string()));
        }

        tracing::info!("Updated password");
        Ok(())
    }
}
