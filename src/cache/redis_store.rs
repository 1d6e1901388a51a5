use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use super::tiered::DurableStore;
use crate::errors::Result;

/// Redis-backed durable cache tier.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect and hold a reconnecting multiplexed connection.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_connection_manager().await?;
        info!("Connected to Redis durable cache");
        Ok(Self { conn })
    }
}

/// Remaining whole seconds until `expires_at`, floored at one second since
/// Redis rejects a zero expiry.
fn relative_ttl_secs(expires_at: DateTime<Utc>) -> u64 {
    (expires_at - Utc::now()).num_seconds().max(1) as u64
}

#[async_trait]
impl DurableStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, expires_at: DateTime<Utc>) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, value, relative_ttl_secs(expires_at)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_ttl_floors_at_one_second() {
        let past = Utc::now() - chrono::Duration::seconds(10);
        assert_eq!(relative_ttl_secs(past), 1);
    }

    #[test]
    fn relative_ttl_tracks_the_deadline() {
        let future = Utc::now() + chrono::Duration::seconds(30);
        let ttl = relative_ttl_secs(future);
        assert!((29..=30).contains(&ttl));
    }
}
