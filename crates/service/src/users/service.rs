use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use super::domain::UserFields;
use super::repository::UserRepository;
use super::User;
use crate::errors::ServiceError;

/// Operation contract the transport layer depends on.
///
/// New cross-cutting behaviour is added by wrapping an implementation
/// (see [`super::NotifyingUserService`]), not by editing existing ones.
#[async_trait]
pub trait UserOperations: Send + Sync {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, ServiceError>;
    async fn get_user(&self, id: i32) -> Result<User, ServiceError>;
    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<User, ServiceError>;
    async fn delete_user(&self, id: i32) -> Result<(), ServiceError>;
}

/// Application service for users: builds records and delegates to the repository.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// # Examples
    /// ```
    /// use service::users::{UserOperations, UserService, repository::mock::MemoryUserRepository};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MemoryUserRepository::default()));
    /// let user = tokio_test::block_on(svc.create_user("A", "a@x")).unwrap();
    /// assert_eq!(user.id, 1);
    /// let found = tokio_test::block_on(svc.get_user(1)).unwrap();
    /// assert_eq!(found, user);
    /// ```
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: UserRepository> UserOperations for UserService<R> {
    #[instrument(skip(self, email))]
    async fn create_user(&self, name: &str, email: &str) -> Result<User, ServiceError> {
        let user = self.repo.create(UserFields::new(name, email)).await?;
        info!(user_id = user.id, "user_created");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: i32) -> Result<User, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, email))]
    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<User, ServiceError> {
        self.repo.update(id, UserFields::new(name, email)).await
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(user_id = id, "user_deleted");
        Ok(())
    }
}
