use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set, Unchanged};
use tracing::debug;

use models::users;

use crate::errors::ServiceError;
use crate::users::domain::UserFields;
use crate::users::repository::{UserDeleter, UserReader, UserUpdater, UserWriter};
use crate::users::User;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl UserReader for SeaOrmUserRepository {
    async fn get(&self, id: i32) -> Result<User, ServiceError> {
        users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", id))
    }
}

#[async_trait]
impl UserWriter for SeaOrmUserRepository {
    async fn create(&self, fields: UserFields) -> Result<User, ServiceError> {
        let am = users::ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            email: Set(fields.email),
        };
        let created = am.insert(&self.db).await?;
        debug!(id = created.id, "user row inserted");
        Ok(created)
    }
}

#[async_trait]
impl UserUpdater for SeaOrmUserRepository {
    /// Single `UPDATE ... WHERE id = ?`; a missing row surfaces as `RecordNotUpdated`.
    async fn update(&self, id: i32, fields: UserFields) -> Result<User, ServiceError> {
        let am = users::ActiveModel {
            id: Unchanged(id),
            name: Set(fields.name),
            email: Set(fields.email),
        };
        match am.update(&self.db).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => Err(ServiceError::not_found("user", id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl UserDeleter for SeaOrmUserRepository {
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = users::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("user", id));
        }
        Ok(())
    }
}
