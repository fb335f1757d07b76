//! Domain models for the billing service.

pub mod customer;
pub mod email;
pub mod money;
pub mod payment_method;
pub mod transaction;

pub use customer::CustomerId;
pub use email::{Attachment, EmailMessage, EmailTemplate};
pub use money::{Currency, Money};
pub use payment_method::{MethodKind, PaymentMethod, PaymentMethodId};
pub use transaction::{Transaction, TransactionId, TransactionStatus};
