use crate::domain::model::DayFortune;
use crate::domain::ports::{ConfigProvider, FortuneOracle};
use crate::utils::error::{Result, SajuError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP adapter for the KASI-backed lunar oracle service.
#[derive(Debug, Clone)]
pub struct KasiLunarClient {
    client: Client,
    endpoint: String,
}

impl KasiLunarClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        Self::new(
            config.oracle_endpoint().to_string(),
            config.oracle_timeout_secs(),
        )
    }
}

#[async_trait]
impl FortuneOracle for KasiLunarClient {
    async fn day_fortune(&self, compact_date: &str) -> Result<DayFortune> {
        let url = format!("{}/dayfortune", self.endpoint);
        tracing::debug!("oracle request: {} date={}", url, compact_date);

        let response = self
            .client
            .get(&url)
            .query(&[("date", compact_date)])
            .send()
            .await?;

        tracing::debug!("oracle response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SajuError::OracleStatus {
                status: response.status().as_u16(),
            });
        }

        let fortune = response.json::<DayFortune>().await?;
        Ok(fortune)
    }
}
