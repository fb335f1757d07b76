//! # Billing Types
//!
//! Domain types and port traits for the billing service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, PaymentMethod, Transaction, email values)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain, store, provider, and service error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Attachment, Currency, CustomerId, EmailMessage, EmailTemplate, MethodKind, Money,
    PaymentMethod, PaymentMethodId, Transaction, TransactionId, TransactionStatus,
};
pub use dto::*;
pub use error::{DomainError, GatewayError, MailerError, ServiceError, StoreError};
pub use ports::{ChargeOutcome, Mailer, PaymentGateway, TransactionStore};
