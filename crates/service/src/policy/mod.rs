//! Substitutable strategies.
//!
//! Each trait has the single method its call site needs. Implementations are
//! stateless values chosen by the caller at construction time; adding one means
//! implementing the trait and nothing else.

pub mod discount;
pub mod notifier;
pub mod speaker;

pub use discount::{final_price, CustomerTier, DiscountCalculator};
pub use notifier::{NotificationService, Notifier, NotifyError};
pub use speaker::{describe_animal, Speaker};
