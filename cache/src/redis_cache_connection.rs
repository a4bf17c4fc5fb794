use crate::r2d2_redis::r2d2::{Pool, PooledConnection};
use crate::r2d2_redis::redis::Commands;
use crate::r2d2_redis::RedisConnectionManager;
use crate::{CacheConnection, Milliseconds};
use std::sync::Arc;

pub struct RedisCacheConnection {
    pool: Arc<Pool<RedisConnectionManager>>,
    conn: PooledConnection<RedisConnectionManager>,
}

impl RedisCacheConnection {
    pub fn create_connection_pool(database_url: &str) -> anyhow::Result<RedisCacheConnection> {
        let manager = RedisConnectionManager::new(database_url)?;
        let pool = Pool::builder().build(manager)?;
        let conn = pool.get()?;
        Ok(RedisCacheConnection {
            pool: Arc::from(pool),
            conn,
        })
    }

    pub fn clone_conn(&self) -> anyhow::Result<RedisCacheConnection> {
        let pool = self.pool.clone();
        let conn = pool.get()?;
        Ok(RedisCacheConnection { pool, conn })
    }
}

impl CacheConnection for RedisCacheConnection {
    fn get(&mut self, key: &str) -> anyhow::Result<String> {
        Ok(self.conn.get(key)?)
    }

    fn delete(&mut self, key: &str) -> anyhow::Result<()> {
        let _: () = self.conn.del(key.to_string())?;
        Ok(())
    }

    fn add(&mut self, key: &str, data: &str, ttl: Option<Milliseconds>) -> anyhow::Result<()> {
        let _: () = self.conn.set(key, data)?;
        if let Some(ttl_val) = ttl {
            // Set the key's time to live in milliseconds
            let _: () = self.conn.pexpire(key, ttl_val)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time};

    fn sleep(duration: Milliseconds) {
        thread::sleep(time::Duration::from_millis(duration as u64));
    }

    #[test]
    fn redis_ttl_expiry() {
        // Only runs when a local redis is available
        if let Ok(mut conn) = RedisCacheConnection::create_connection_pool("redis://127.0.0.1/") {
            conn.add("vamos:test:key", "value", Some(10)).unwrap();
            assert_eq!("value", conn.get("vamos:test:key").unwrap());

            sleep(11);
            assert!(conn.get("vamos:test:key").is_err());
        }
    }
}
