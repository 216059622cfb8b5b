use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{instrument, warn};

/// Request timeout for the payment processor.
const PAYMENT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Payment intent as returned by the processor.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a card payment intent for `amount_minor` minor units.
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> anyhow::Result<PaymentIntent>;
}

/// Stripe-compatible HTTP gateway.
#[derive(Clone)]
pub struct StripeGateway {
    client: Client,
    api_base: String,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(api_base: &str, secret_key: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PAYMENT_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .context("build payment http client")?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self))]
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> anyhow::Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&[
                ("amount", amount_minor.to_string()),
                ("currency", currency.to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await
            .context("payment processor unreachable")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "payment intent request rejected");
            anyhow::bail!("payment processor returned {status}");
        }

        let intent = response
            .json::<PaymentIntent>()
            .await
            .context("decode payment intent response")?;
        Ok(intent)
    }
}
