pub extern crate r2d2_redis;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub use crate::r2d2_redis::redis;

mod cache_error;
mod memory_cache_connection;
mod redis_cache_connection;
mod tombstone_set;

pub use crate::cache_error::*;
pub use crate::memory_cache_connection::*;
pub use crate::redis_cache_connection::*;
pub use crate::tombstone_set::*;

pub type Milliseconds = usize;

/// Contract for the cache backends. `add` accepts an optional time to live;
/// `get` returns an error for missing keys, callers that can tolerate a cold
/// cache treat that error as a miss.
pub trait CacheConnection {
    fn get(&mut self, key: &str) -> anyhow::Result<String>;
    fn delete(&mut self, key: &str) -> anyhow::Result<()>;
    fn add(&mut self, key: &str, data: &str, ttl: Option<Milliseconds>) -> anyhow::Result<()>;
}

impl<C: CacheConnection + ?Sized> CacheConnection for Box<C> {
    fn get(&mut self, key: &str) -> anyhow::Result<String> {
        (**self).get(key)
    }

    fn delete(&mut self, key: &str) -> anyhow::Result<()> {
        (**self).delete(key)
    }

    fn add(&mut self, key: &str, data: &str, ttl: Option<Milliseconds>) -> anyhow::Result<()> {
        (**self).add(key, data, ttl)
    }
}
