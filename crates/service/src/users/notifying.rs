use async_trait::async_trait;
use tracing::warn;

use super::service::UserOperations;
use super::User;
use crate::errors::ServiceError;
use crate::policy::NotificationService;

/// Sends a welcome message after every successful create.
///
/// Delivery is best-effort: the record is already stored when the notifier
/// runs, so a delivery failure is logged and the created user is returned.
pub struct NotifyingUserService<S: UserOperations> {
    inner: S,
    notifications: NotificationService,
}

impl<S: UserOperations> NotifyingUserService<S> {
    pub fn new(inner: S, notifications: NotificationService) -> Self { Self { inner, notifications } }
}

#[async_trait]
impl<S: UserOperations> UserOperations for NotifyingUserService<S> {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, ServiceError> {
        let user = self.inner.create_user(name, email).await?;
        if let Err(e) = self.notifications.notify(&format!("Welcome, {}!", user.name)) {
            warn!(user_id = user.id, err = %e, "welcome_notification_failed");
        }
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> Result<User, ServiceError> { self.inner.get_user(id).await }

    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<User, ServiceError> {
        self.inner.update_user(id, name, email).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), ServiceError> { self.inner.delete_user(id).await }
}
