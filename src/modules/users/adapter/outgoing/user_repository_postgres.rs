use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;

use crate::shared::db::is_unique_violation;
use crate::users::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError, UserView,
};

use super::sea_orm_entity::{ActiveModel as UserActiveModel, Entity as UserEntity, Role};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserView, UserRepositoryError> {
        let active = UserActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            hashed_password: Set(data.hashed_password),
            role: Set(Role::from(data.role)),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserRepositoryError::EmailAlreadyExists
            } else {
                UserRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_view())
    }

    async fn update_user(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<UserView, UserRepositoryError> {
        let existing = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if data == UpdateUserData::default() {
            return Ok(existing.to_view());
        }

        let mut active = existing.into_active_model();
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(is_active) = data.is_active {
            active.is_active = Set(is_active);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_view())
    }
}
