//! Cache-invalidation client for the public storefront
//!
//! After a successful mutation the admin backend tells the storefront which
//! cached view tags went stale. Invalidation is best effort: failures are
//! logged and never fail the parent operation.

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::StorefrontConfig;

/// Cache tags the storefront knows about
pub mod tags {
    pub const ACCOMMODATIONS: &str = "accommodations";
    pub const DELIVERY_SCHEDULES: &str = "delivery_schedules";
    pub const FAQS: &str = "faqs";
    pub const ORDERS: &str = "orders";
    pub const PAYMENT_METHODS: &str = "payment_methods";
    pub const SETTINGS: &str = "settings";
    pub const TASTINGS: &str = "tastings";
    pub const WINES: &str = "wines";
}

#[derive(Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
    secret: String,
}

#[derive(Serialize)]
struct RevalidateRequest<'a> {
    tag: &'a str,
}

impl StorefrontClient {
    pub fn new(config: &StorefrontConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            secret: config.revalidate_secret.clone(),
        })
    }

    /// Invalidate the given cache tags on the storefront, one call per tag.
    /// Never returns an error; failures only produce a warning log.
    pub async fn invalidate(&self, tags: &[&str]) {
        for tag in tags {
            let url = format!("{}/api/revalidate", self.base_url);
            let result = self
                .client
                .post(&url)
                .header("x-revalidate-secret", &self.secret)
                .json(&RevalidateRequest { tag })
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!(tag, "storefront cache invalidated");
                }
                Ok(response) => {
                    tracing::warn!(
                        tag,
                        status = %response.status(),
                        "storefront cache invalidation rejected"
                    );
                }
                Err(err) => {
                    tracing::warn!(tag, error = %err, "storefront cache invalidation failed");
                }
            }
        }
    }
}
