//! # Billing Service
//!
//! Application service layer for the billing system.
//!
//! ## Architecture
//!
//! - `payment` - Payment service (charge, refund, history)
//! - `email` - Email service (single and bulk dispatch)
//!
//! Services are generic over the ports in `billing-types`, allowing
//! different store, gateway, and mailer implementations to be injected.

pub mod email;
pub mod payment;

#[cfg(test)]
mod email_tests;

pub use email::EmailService;
pub use payment::PaymentService;
