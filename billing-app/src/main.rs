//! # Billing Demo
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the transaction store adapter
//! - Create the payment and email services
//! - Drive a charge / history / refund / email flow against the
//!   simulated providers

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billing_providers::{SimulatedGateway, SimulatedMailer};
use billing_service::{EmailService, PaymentService};
use billing_store::MemoryStore;
#[cfg(feature = "sqlite")]
use billing_store::SqliteStore;
use billing_types::{
    ChargeRequest, CustomerId, EmailTemplate, MethodKind, PaymentMethod, ServiceError,
    TransactionStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,billing_app=debug,billing_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Gateway approval rate: {}", config.approval_rate);

    match config.database_url.as_deref() {
        #[cfg(feature = "sqlite")]
        Some(url) => {
            tracing::info!("Using database: {}", url);
            let store = SqliteStore::new(url).await?;
            run_demo(store, &config).await
        }
        #[cfg(not(feature = "sqlite"))]
        Some(_) => {
            anyhow::bail!("DATABASE_URL is set but this binary was built without `sqlite`")
        }
        None => {
            tracing::info!("Using in-memory store");
            run_demo(MemoryStore::new(), &config).await
        }
    }
}

/// Runs the demonstration flow against whatever store was configured.
async fn run_demo<S: TransactionStore>(store: S, config: &config::Config) -> anyhow::Result<()> {
    let payments = PaymentService::new(
        store,
        SimulatedGateway::with_approval_rate(config.approval_rate),
    );
    let email = EmailService::new(SimulatedMailer::new());

    let customer = CustomerId::new();
    tracing::info!(%customer, "demo customer created");

    // A few charge attempts against different instruments
    let card = PaymentMethod::new("pm_card_visa", MethodKind::Card, "4242", Some("12/27".into()))?;
    let paypal = PaymentMethod::new("pm_paypal_1", MethodKind::Paypal, "0001", None)?;
    let bank = PaymentMethod::new("pm_bank_1", MethodKind::Bank, "6789", None)?;

    for (amount, method) in [(2499, card.clone()), (450, paypal), (12000, bank)] {
        let tx = payments
            .charge(ChargeRequest {
                customer_id: Some(customer),
                amount,
                method,
            })
            .await?;
        tracing::info!(
            transaction_id = %tx.id,
            amount = %tx.amount,
            status = %tx.status,
            "charge attempt finished"
        );
    }

    // Invalid amounts are rejected before the gateway sees them
    let rejected = payments
        .charge(ChargeRequest {
            customer_id: Some(customer),
            amount: 0,
            method: card,
        })
        .await;
    if let Err(e) = rejected {
        tracing::info!("zero amount rejected: {}", e);
    }

    // History, newest first
    let history = payments.transactions_for_customer(customer).await?;
    tracing::info!("customer has {} transactions", history.len());
    for tx in &history {
        tracing::info!(transaction_id = %tx.id, status = %tx.status, amount = %tx.amount, "history entry");
    }

    // Refund the most recent completed charge, then show the double-refund guard
    if let Some(completed) = history.iter().find(|tx| tx.is_refundable()) {
        let refunded = payments.refund(completed.id).await?;
        tracing::info!(transaction_id = %refunded.id, status = %refunded.status, "refund applied");

        match payments.refund(refunded.id).await {
            Err(ServiceError::InvalidState(msg)) => {
                tracing::info!("second refund rejected: {}", msg);
            }
            other => anyhow::bail!("expected the second refund to be rejected, got {:?}", other),
        }
    } else {
        tracing::info!("no completed charge to refund this run");
    }

    // Receipt for the customer
    let receipt = EmailTemplate::new("Your receipt", "Thanks for your purchase.")
        .with_recipient("customer@example.com");
    let report = email.send(&receipt).await;
    tracing::info!("receipt email: {}", serde_json::to_string(&report)?);

    // Bulk notification; a malformed address fails without stopping the rest
    let template = EmailTemplate::new("Scheduled maintenance", "We will be offline on Saturday.");
    let recipients = vec![
        "alice@example.com".to_string(),
        "broken-address".to_string(),
        "bob@example.com".to_string(),
    ];
    let reports = email.send_bulk(&template, &recipients).await;
    for (recipient, report) in recipients.iter().zip(&reports) {
        tracing::info!(recipient = %recipient, success = report.success, "bulk email report");
    }

    Ok(())
}
