//! Read-only consumers of the user store.

use super::repository::UserReader;
use crate::errors::ServiceError;

/// Render a user as `name <email>`; needs read access only.
pub async fn describe_user<R: UserReader + ?Sized>(reader: &R, id: i32) -> Result<String, ServiceError> {
    let user = reader.get(id).await?;
    Ok(format!("{} <{}>", user.name, user.email))
}
