//! Users: three-layer architecture (domain, repository, service).
//!
//! The repository is split into single-operation capabilities so that
//! consumers depend only on what they call; `UserRepository` composes them.

pub mod directory;
pub mod domain;
pub mod notifying;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::UserFields;
pub use models::users::Model as User;
pub use notifying::NotifyingUserService;
pub use service::{UserOperations, UserService};
