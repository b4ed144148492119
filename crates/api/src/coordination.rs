//! Key-value coordination service client.
//!
//! The service connects to the coordination store at startup but no business
//! operation uses it; only the health check exercises the connection. The
//! client is therefore optional end to end: without `COORDINATION_URL` the
//! service runs exactly the same.

use redis::aio::ConnectionManager;
use redis::Client;

/// Thin wrapper around a multiplexed coordination connection.
#[derive(Clone)]
pub struct CoordinationClient {
    connection: ConnectionManager,
}

impl std::fmt::Debug for CoordinationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinationClient")
            .field("connection", &"<ConnectionManager>")
            .finish()
    }
}

impl CoordinationClient {
    /// Connect to the coordination service.
    pub async fn connect(url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    /// Round-trip a PING to verify the connection is alive.
    pub async fn ping(&self) -> Result<(), redis::RedisError> {
        let mut conn = self.connection.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
