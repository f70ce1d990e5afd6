//! Service layer for the user registry.
//! - `users`: store contracts, SeaORM and in-memory stores, the user service and its decorators.
//! - `policy`: substitutable strategies (discounts, notification channels, speakers).
//! - Errors are propagated unchanged from store to caller.

pub mod errors;
pub mod policy;
pub mod users;
#[cfg(test)]
pub mod test_support;
