use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub api_key: String,
    pub sender: String,
    pub api_base: String,
}

/// What the admin gate does when the requester's account row is missing.
///
/// The store is authoritative for roles, so a valid token whose email has no
/// row is an anomaly. `Forbid` denies it like any non-admin; `NotFound`
/// surfaces it loudly as a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLookupMiss {
    Forbid,
    NotFound,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub stripe: StripeConfig,
    pub mail: MailConfig,
    pub admin_lookup_miss: AdminLookupMiss,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("ACCESS_TOKEN_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "mastertools".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "mastertools-clients".into()),
            ttl_days: std::env::var("TOKEN_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(2),
        };
        let stripe = StripeConfig {
            secret_key: std::env::var("STRIPE_SECRET_KEY")?,
            api_base: std::env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".into()),
        };
        let mail = MailConfig {
            api_key: std::env::var("EMAIL_SENDER_KEY")?,
            sender: std::env::var("EMAIL_SENDER")?,
            api_base: std::env::var("SENDGRID_API_BASE")
                .unwrap_or_else(|_| "https://api.sendgrid.com".into()),
        };
        let admin_lookup_miss = match std::env::var("ADMIN_LOOKUP_MISS").ok().as_deref() {
            Some("not_found") => AdminLookupMiss::NotFound,
            Some("forbid") | None => AdminLookupMiss::Forbid,
            Some(other) => anyhow::bail!("invalid ADMIN_LOOKUP_MISS value: {other}"),
        };
        Ok(Self {
            database_url,
            jwt,
            stripe,
            mail,
            admin_lookup_miss,
        })
    }
}
