use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::orders::repo::Order;

const MAIL_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> anyhow::Result<()>;
}

/// SendGrid-compatible HTTP relay.
#[derive(Clone)]
pub struct SendgridMailer {
    client: Client,
    api_base: String,
    api_key: String,
    sender: String,
}

impl SendgridMailer {
    pub fn new(api_base: &str, api_key: &str, sender: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(MAIL_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .context("build mail http client")?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            sender: sender.to_string(),
        })
    }
}

#[async_trait]
impl MailSender for SendgridMailer {
    #[instrument(skip(self, email), fields(to = %email.to))]
    async fn send(&self, email: &OutboundEmail) -> anyhow::Result<()> {
        let url = format!("{}/v3/mail/send", self.api_base);
        let payload = json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": { "email": self.sender },
            "subject": email.subject,
            "content": [
                { "type": "text/plain", "value": email.text },
                { "type": "text/html", "value": email.html },
            ],
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .context("mail relay unreachable")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "mail relay rejected message");
            anyhow::bail!("mail relay returned {status}");
        }

        debug!("message sent");
        Ok(())
    }
}

/// Render the order confirmation message.
pub fn order_confirmation(order: &Order) -> OutboundEmail {
    let subject = format!(
        "Your order for {} x{} is confirmed",
        order.product_name, order.quantity
    );
    let text = format!(
        "Hello,\n\nYour order for {} (quantity {}) is confirmed.\n\nMasterTools",
        order.product_name, order.quantity
    );
    let html = format!(
        "<div>\
           <h1>Hello</h1>\
           <h3>Your order for {} is confirmed</h3>\
           <p>Quantity: {}</p>\
           <p>Total: {} USD</p>\
         </div>",
        order.product_name, order.quantity, order.price
    );
    OutboundEmail {
        to: order.user_email.clone(),
        subject,
        text,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn sample_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            user_email: "bob@example.com".into(),
            product_name: "Hammer".into(),
            quantity: 3,
            price: 75,
            address: None,
            phone: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn confirmation_names_recipient_product_and_quantity() {
        let email = order_confirmation(&sample_order());
        assert_eq!(email.to, "bob@example.com");
        assert!(email.subject.contains("Hammer"));
        assert!(email.text.contains("Hammer"));
        assert!(email.text.contains("quantity 3"));
        assert!(email.html.contains("Quantity: 3"));
    }
}
