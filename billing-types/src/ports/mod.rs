//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete
//! implementations: the transaction store, the payment gateway, and the
//! email provider are all external collaborators of this service.

mod gateway;
mod mailer;
mod store;

pub use gateway::{ChargeOutcome, PaymentGateway};
pub use mailer::Mailer;
pub use store::TransactionStore;
