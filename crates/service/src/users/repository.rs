use async_trait::async_trait;

use super::domain::UserFields;
use super::User;
use crate::errors::ServiceError;

/// Read access by id.
#[async_trait]
pub trait UserReader: Send + Sync {
    async fn get(&self, id: i32) -> Result<User, ServiceError>;
}

/// Insert a new record; the store assigns the id.
#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn create(&self, fields: UserFields) -> Result<User, ServiceError>;
}

/// Replace every mutable field of an existing record.
#[async_trait]
pub trait UserUpdater: Send + Sync {
    async fn update(&self, id: i32, fields: UserFields) -> Result<User, ServiceError>;
}

#[async_trait]
pub trait UserDeleter: Send + Sync {
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// Full CRUD capability, available for any type implementing all four parts.
pub trait UserRepository: UserReader + UserWriter + UserUpdater + UserDeleter {}

impl<T> UserRepository for T where T: UserReader + UserWriter + UserUpdater + UserDeleter {}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Ids start at 1 and are never reused, mirroring a database sequence.
    #[derive(Default)]
    pub struct MemoryUserRepository {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        last_id: i32,
        rows: BTreeMap<i32, User>,
    }

    impl MemoryUserRepository {
        pub fn len(&self) -> usize { self.lock().rows.len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
            // a poisoned lock only means another test thread panicked mid-operation
            self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    #[async_trait]
    impl UserReader for MemoryUserRepository {
        async fn get(&self, id: i32) -> Result<User, ServiceError> {
            self.lock().rows.get(&id).cloned().ok_or_else(|| ServiceError::not_found("user", id))
        }
    }

    #[async_trait]
    impl UserWriter for MemoryUserRepository {
        async fn create(&self, fields: UserFields) -> Result<User, ServiceError> {
            let mut inner = self.lock();
            inner.last_id += 1;
            let user = User { id: inner.last_id, name: fields.name, email: fields.email };
            inner.rows.insert(user.id, user.clone());
            Ok(user)
        }
    }

    #[async_trait]
    impl UserUpdater for MemoryUserRepository {
        async fn update(&self, id: i32, fields: UserFields) -> Result<User, ServiceError> {
            let mut inner = self.lock();
            let row = inner.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("user", id))?;
            row.name = fields.name;
            row.email = fields.email;
            Ok(row.clone())
        }
    }

    #[async_trait]
    impl UserDeleter for MemoryUserRepository {
        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            self.lock().rows.remove(&id).map(|_| ()).ok_or_else(|| ServiceError::not_found("user", id))
        }
    }

}
