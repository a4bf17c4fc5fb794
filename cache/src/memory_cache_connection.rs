use crate::{CacheConnection, Milliseconds};
use anyhow::anyhow;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// In-process stand-in for [RedisCacheConnection], used by tests and by
/// deployments that run without a cache host. Clones share the same store,
/// mirroring how pooled redis connections share a server.
#[derive(Clone, Default)]
pub struct MemoryCacheConnection {
    store: Arc<Mutex<HashMap<String, (String, Option<Instant>)>>>,
}

impl MemoryCacheConnection {
    pub fn new() -> MemoryCacheConnection {
        MemoryCacheConnection::default()
    }
}

impl CacheConnection for MemoryCacheConnection {
    fn get(&mut self, key: &str) -> anyhow::Result<String> {
        let mut store = self.store.lock().unwrap();
        if let Some((_, Some(deadline))) = store.get(key) {
            if *deadline <= Instant::now() {
                store.remove(key);
            }
        }
        store
            .get(key)
            .map(|(data, _)| data.clone())
            .ok_or_else(|| anyhow!("Key {} not found", key))
    }

    fn delete(&mut self, key: &str) -> anyhow::Result<()> {
        self.store.lock().unwrap().remove(key);
        Ok(())
    }

    fn add(&mut self, key: &str, data: &str, ttl: Option<Milliseconds>) -> anyhow::Result<()> {
        let deadline = ttl.map(|ttl| Instant::now() + Duration::from_millis(ttl as u64));
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), (data.to_string(), deadline));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn get_add_delete() {
        let mut conn = MemoryCacheConnection::new();
        assert!(conn.get("missing").is_err());

        conn.add("key", "value", None).unwrap();
        assert_eq!("value", conn.get("key").unwrap());

        conn.delete("key").unwrap();
        assert!(conn.get("key").is_err());
    }

    #[test]
    fn ttl_expiry() {
        let mut conn = MemoryCacheConnection::new();
        conn.add("key", "value", Some(10)).unwrap();
        assert_eq!("value", conn.get("key").unwrap());

        thread::sleep(Duration::from_millis(11));
        assert!(conn.get("key").is_err());
    }

    #[test]
    fn clones_share_the_store() {
        let mut conn = MemoryCacheConnection::new();
        let mut clone = conn.clone();
        conn.add("key", "value", None).unwrap();
        assert_eq!("value", clone.get("key").unwrap());
    }
}
