//! Simulated payment gateway.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::Rng;

use billing_types::{ChargeOutcome, GatewayError, Money, PaymentGateway, PaymentMethod, Transaction};

enum Mode {
    /// Approve with the given probability
    Rate(f64),
    AlwaysApprove,
    AlwaysDecline,
    /// Every call fails as unreachable
    Outage,
}

/// Payment gateway that decides charges by coin flip.
///
/// The default approval rate is 0.9. Fixed modes are available so tests
/// and demos can force a specific path.
pub struct SimulatedGateway {
    mode: Mode,
    charges: AtomicUsize,
    refunds: AtomicUsize,
}

impl SimulatedGateway {
    /// Creates a gateway approving roughly nine charges in ten.
    pub fn new() -> Self {
        Self::with_mode(Mode::Rate(0.9))
    }

    /// Creates a gateway with the given approval probability, clamped to
    /// `[0.0, 1.0]`.
    pub fn with_approval_rate(rate: f64) -> Self {
        Self::with_mode(Mode::Rate(rate.clamp(0.0, 1.0)))
    }

    /// Creates a gateway that approves every charge.
    pub fn always_approve() -> Self {
        Self::with_mode(Mode::AlwaysApprove)
    }

    /// Creates a gateway that declines every charge.
    pub fn always_decline() -> Self {
        Self::with_mode(Mode::AlwaysDecline)
    }

    /// Creates a gateway where every call fails as unreachable.
    pub fn outage() -> Self {
        Self::with_mode(Mode::Outage)
    }

    /// Number of charge calls made so far.
    pub fn charges(&self) -> usize {
        self.charges.load(Ordering::SeqCst)
    }

    /// Number of refund calls made so far.
    pub fn refunds(&self) -> usize {
        self.refunds.load(Ordering::SeqCst)
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            charges: AtomicUsize::new(0),
            refunds: AtomicUsize::new(0),
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(
        &self,
        method: &PaymentMethod,
        amount: Money,
    ) -> Result<ChargeOutcome, GatewayError> {
        self.charges.fetch_add(1, Ordering::SeqCst);

        let outcome = match self.mode {
            Mode::Rate(rate) => {
                if rand::rng().random_bool(rate) {
                    ChargeOutcome::Approved
                } else {
                    ChargeOutcome::Declined
                }
            }
            Mode::AlwaysApprove => ChargeOutcome::Approved,
            Mode::AlwaysDecline => ChargeOutcome::Declined,
            Mode::Outage => {
                return Err(GatewayError::Unreachable("simulated gateway outage".into()));
            }
        };

        tracing::debug!(method = %method.id, %amount, ?outcome, "simulated charge");
        Ok(outcome)
    }

    async fn refund(&self, transaction: &Transaction) -> Result<(), GatewayError> {
        self.refunds.fetch_add(1, Ordering::SeqCst);

        if matches!(self.mode, Mode::Outage) {
            return Err(GatewayError::Unreachable("simulated gateway outage".into()));
        }

        tracing::debug!(transaction_id = %transaction.id, "simulated refund");
        Ok(())
    }
}
