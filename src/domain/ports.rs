use crate::domain::model::DayFortune;
use crate::utils::error::Result;
use async_trait::async_trait;

/// External lunar-pillar lookup. The conversion table itself lives behind
/// this boundary and is never reimplemented here.
#[async_trait]
pub trait FortuneOracle: Send + Sync {
    async fn day_fortune(&self, compact_date: &str) -> Result<DayFortune>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn oracle_endpoint(&self) -> &str;
    fn oracle_timeout_secs(&self) -> u64;
}
