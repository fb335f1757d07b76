//! # Billing Providers
//!
//! Simulated provider adapters for development and testing:
//!
//! - [`SimulatedGateway`] - payment gateway with a configurable approval rate
//! - [`SimulatedMailer`] - email provider with an in-memory outbox
//!
//! Neither talks to the network. They implement the `PaymentGateway` and
//! `Mailer` ports, so the application services run against them unchanged.

pub mod gateway;
pub mod mailer;

pub use gateway::SimulatedGateway;
pub use mailer::SimulatedMailer;
