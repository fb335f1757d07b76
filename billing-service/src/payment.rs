//! Payment Application Service
//!
//! Orchestrates the transaction lifecycle through the store and gateway
//! ports. Contains NO infrastructure logic - pure business orchestration.

use billing_types::{
    ChargeOutcome, ChargeRequest, Currency, CustomerId, Money, PaymentGateway, ServiceError,
    Transaction, TransactionId, TransactionStore,
};

/// Application service for payment operations.
///
/// Generic over `S: TransactionStore` and `G: PaymentGateway` - the
/// adapters are injected at compile time. This enables:
/// - Swapping the store or gateway without code changes
/// - Testing with in-memory doubles
/// - Compile-time checks for port implementation
pub struct PaymentService<S: TransactionStore, G: PaymentGateway> {
    store: S,
    gateway: G,
}

impl<S: TransactionStore, G: PaymentGateway> PaymentService<S, G> {
    /// Creates a new payment service with the given store and gateway.
    pub fn new(store: S, gateway: G) -> Self {
        Self { store, gateway }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Charge
    // ─────────────────────────────────────────────────────────────────────────────

    /// Charges a payment method and records the resulting transaction.
    ///
    /// The amount is validated before the gateway is contacted; an invalid
    /// amount never produces a transaction. The gateway outcome decides
    /// the final status: approval completes the transaction, a decline or
    /// an unreachable gateway fails it. Either way the transaction is
    /// persisted and returned rather than surfaced as an error.
    #[tracing::instrument(skip(self, req), fields(amount = req.amount, method = %req.method.id))]
    pub async fn charge(&self, req: ChargeRequest) -> Result<Transaction, ServiceError> {
        // Business validation, before any provider call
        if req.amount <= 0 {
            return Err(ServiceError::InvalidArgument(
                "Amount must be positive".into(),
            ));
        }

        let amount = Money::new(req.amount, Currency::USD)?;
        let mut tx = Transaction::pending(amount, req.method);

        match self.gateway.charge(&tx.payment_method, tx.amount).await {
            Ok(ChargeOutcome::Approved) => {
                tx.complete()?;
                tracing::info!(transaction_id = %tx.id, "charge approved");
            }
            Ok(ChargeOutcome::Declined) => {
                tx.fail()?;
                tracing::warn!(transaction_id = %tx.id, "charge declined");
            }
            Err(e) => {
                tx.fail()?;
                tracing::warn!(transaction_id = %tx.id, error = %e, "charge not processed");
            }
        }

        self.store.record(&tx, req.customer_id).await?;
        Ok(tx)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Refund
    // ─────────────────────────────────────────────────────────────────────────────

    /// Refunds a completed transaction.
    ///
    /// Only `Completed` transactions are refundable, and only once: the
    /// transaction moves to `Refunded`, so a second attempt is rejected.
    /// The gateway is instructed before any state changes; a gateway
    /// failure leaves the transaction `Completed`.
    #[tracing::instrument(skip(self), fields(transaction_id = %id))]
    pub async fn refund(&self, id: TransactionId) -> Result<Transaction, ServiceError> {
        let mut tx = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Transaction {}", id)))?;

        if !tx.is_refundable() {
            return Err(ServiceError::InvalidState(
                "Can only refund completed transactions".into(),
            ));
        }

        self.gateway.refund(&tx).await?;

        tx.mark_refunded()?;
        self.store.update(&tx).await?;
        tracing::info!("transaction refunded");

        Ok(tx)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Transaction History
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets a transaction by ID.
    pub async fn transaction(&self, id: TransactionId) -> Result<Transaction, ServiceError> {
        self.store
            .get(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| ServiceError::NotFound(format!("Transaction {}", id))))
    }

    /// Lists a customer's transactions, newest first.
    ///
    /// A customer with no recorded transactions yields an empty list.
    pub async fn transactions_for_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Transaction>, ServiceError> {
        self.store
            .list_for_customer(customer)
            .await
            .map_err(Into::into)
    }
}
