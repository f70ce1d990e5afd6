use std::sync::Arc;

use service::users::UserOperations;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<dyn UserOperations>,
}

impl ServerState {
    pub fn new(users: Arc<dyn UserOperations>) -> Self { Self { users } }
}
