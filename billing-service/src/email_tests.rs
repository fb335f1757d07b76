//! EmailService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use billing_types::{EmailMessage, EmailTemplate, Mailer, MailerError};

    use crate::EmailService;

    /// Mailer double that captures delivered messages in memory.
    pub struct MockMailer {
        outbox: Mutex<Vec<EmailMessage>>,
        fail: bool,
    }

    impl MockMailer {
        pub fn new() -> Self {
            Self {
                outbox: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                outbox: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn delivered(&self) -> Vec<EmailMessage> {
            self.outbox.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for MockMailer {
        async fn deliver(&self, message: &EmailMessage) -> Result<String, MailerError> {
            if self.fail {
                return Err(MailerError::Provider("smtp timeout".into()));
            }
            let mut outbox = self.outbox.lock().unwrap();
            outbox.push(message.clone());
            Ok(format!("msg_{}", outbox.len()))
        }
    }

    fn message(to: Vec<&str>) -> EmailMessage {
        EmailMessage::new(
            to.into_iter().map(String::from).collect(),
            "Your receipt",
            "Thanks for your purchase.",
        )
    }

    #[tokio::test]
    async fn test_send_success() {
        let service = EmailService::new(MockMailer::new());

        let report = service.send(&message(vec!["alice@example.com"])).await;

        assert!(report.success);
        assert!(report.message_id.is_some());
        assert!(report.error.is_none());
        assert_eq!(service.mailer().delivered().len(), 1);
    }

    #[tokio::test]
    async fn test_send_no_recipients() {
        let service = EmailService::new(MockMailer::new());

        let report = service.send(&message(vec![])).await;

        assert!(!report.success);
        assert_eq!(report.error.as_deref(), Some("No recipients specified"));
        assert!(service.mailer().delivered().is_empty());
    }

    #[tokio::test]
    async fn test_send_lists_every_invalid_address() {
        let service = EmailService::new(MockMailer::new());

        let report = service
            .send(&message(vec!["bad-one", "fine@example.com", "bad@two"]))
            .await;

        assert!(!report.success);
        assert_eq!(
            report.error.as_deref(),
            Some("Invalid email addresses: bad-one, bad@two")
        );
        assert!(service.mailer().delivered().is_empty());
    }

    #[tokio::test]
    async fn test_send_validates_cc_and_bcc() {
        let service = EmailService::new(MockMailer::new());

        let mut msg = message(vec!["alice@example.com"]);
        msg.cc = vec!["not an address".into()];

        let report = service.send(&msg).await;

        assert!(!report.success);
        assert_eq!(
            report.error.as_deref(),
            Some("Invalid email addresses: not an address")
        );
    }

    #[tokio::test]
    async fn test_send_provider_failure_reported() {
        let service = EmailService::new(MockMailer::failing());

        let report = service.send(&message(vec!["alice@example.com"])).await;

        assert!(!report.success);
        assert_eq!(
            report.error.as_deref(),
            Some("Email provider error: smtp timeout")
        );
    }

    #[tokio::test]
    async fn test_send_bulk_one_report_per_recipient_in_order() {
        let service = EmailService::new(MockMailer::new());
        let template = EmailTemplate::new("Maintenance window", "We will be down briefly.");

        let recipients = vec![
            "alice@example.com".to_string(),
            "broken".to_string(),
            "bob@example.com".to_string(),
        ];

        let reports = service.send_bulk(&template, &recipients).await;

        assert_eq!(reports.len(), recipients.len());
        assert!(reports[0].success);
        assert!(!reports[1].success);
        assert_eq!(
            reports[1].error.as_deref(),
            Some("Invalid email addresses: broken")
        );
        assert!(reports[2].success);

        let delivered = service.mailer().delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].to, vec!["alice@example.com".to_string()]);
        assert_eq!(delivered[1].to, vec!["bob@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_send_bulk_no_recipients() {
        let service = EmailService::new(MockMailer::new());
        let template = EmailTemplate::new("Hello", "World");

        let reports = service.send_bulk(&template, &[]).await;

        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn test_send_bulk_carries_template_fields() {
        let service = EmailService::new(MockMailer::new());
        let mut template = EmailTemplate::new("Invoice", "Attached.");
        template.html = Some("<p>Attached.</p>".into());

        service
            .send_bulk(&template, &["alice@example.com".to_string()])
            .await;

        let delivered = service.mailer().delivered();
        assert_eq!(delivered[0].subject, "Invoice");
        assert_eq!(delivered[0].html.as_deref(), Some("<p>Attached.</p>"));
    }
}
