use crate::{CacheConnection, Milliseconds};
use chrono::{DateTime, Duration, Utc};

pub const DELETED_EVENTS_KEY: &str = "vamos:deleted_events";

/// Record of recently deleted event ids, used to filter list reads served
/// from a replica that may not have observed the delete yet.
///
/// All entries live under one cache key as a serialized array. Every entry
/// carries its own expiry and is pruned on each read and write, so the set
/// stays bounded by the deletion rate within one TTL window. A payload that
/// does not parse as an array is treated as an empty set.
pub struct TombstoneSet<C: CacheConnection> {
    conn: C,
    key: String,
    ttl: Duration,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct Tombstone {
    id: i64,
    expires_at: DateTime<Utc>,
}

impl<C: CacheConnection> TombstoneSet<C> {
    pub fn new(conn: C, ttl_secs: i64) -> TombstoneSet<C> {
        TombstoneSet {
            conn,
            key: DELETED_EVENTS_KEY.to_string(),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Records `id` as deleted. Idempotent: re-adding an id refreshes its
    /// expiry rather than duplicating it.
    pub fn add(&mut self, id: i64) -> anyhow::Result<()> {
        let mut entries = self.load();
        entries.retain(|entry| entry.id != id);
        entries.push(Tombstone {
            id,
            expires_at: Utc::now() + self.ttl,
        });
        self.store(&entries)
    }

    pub fn contains(&mut self, id: i64) -> bool {
        self.load().iter().any(|entry| entry.id == id)
    }

    /// Ids currently tombstoned, in insertion order, without duplicates.
    pub fn all(&mut self) -> Vec<i64> {
        self.load().iter().map(|entry| entry.id).collect()
    }

    /// Removes every item whose id is tombstoned, preserving the order of the
    /// survivors.
    pub fn filter_deleted<T, F>(&mut self, items: Vec<T>, id_of: F) -> Vec<T>
    where
        F: Fn(&T) -> i64,
    {
        let deleted = self.all();
        if deleted.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| !deleted.contains(&id_of(item))).collect()
    }

    /// Testing and operational reset.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.conn.delete(&self.key)
    }

    fn load(&mut self) -> Vec<Tombstone> {
        let raw = match self.conn.get(&self.key) {
            Ok(raw) => raw,
            // Missing key and unreachable cache both read as an empty set
            Err(_) => return vec![],
        };
        let mut entries: Vec<Tombstone> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(_) => {
                warn!("Discarding unparseable tombstone payload under {}", self.key);
                return vec![];
            }
        };
        let now = Utc::now();
        entries.retain(|entry| entry.expires_at > now);
        entries
    }

    fn store(&mut self, entries: &[Tombstone]) -> anyhow::Result<()> {
        if entries.is_empty() {
            return self.conn.delete(&self.key);
        }
        let payload = serde_json::to_string(entries)?;
        // The key itself expires one TTL after the most recent deletion
        self.conn.add(&self.key, &payload, Some(self.ttl.num_milliseconds() as Milliseconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCacheConnection;
    use std::thread;
    use std::time;

    fn set() -> TombstoneSet<MemoryCacheConnection> {
        TombstoneSet::new(MemoryCacheConnection::new(), 600)
    }

    #[test]
    fn add_then_contains() {
        let mut tombstones = set();
        assert!(!tombstones.contains(42));

        tombstones.add(42).unwrap();
        assert!(tombstones.contains(42));
        assert!(!tombstones.contains(43));
    }

    #[test]
    fn add_is_idempotent() {
        let mut tombstones = set();
        tombstones.add(7).unwrap();
        tombstones.add(7).unwrap();
        assert_eq!(vec![7], tombstones.all());
    }

    #[test]
    fn filter_preserves_order() {
        let mut tombstones = set();
        tombstones.add(2).unwrap();
        tombstones.add(4).unwrap();

        let filtered = tombstones.filter_deleted(vec![1, 2, 3, 4, 5], |id| *id);
        assert_eq!(vec![1, 3, 5], filtered);
    }

    #[test]
    fn corrupt_payload_reads_as_empty() {
        let mut conn = MemoryCacheConnection::new();
        conn.add(DELETED_EVENTS_KEY, "{\"not\": \"an array\"}", None).unwrap();

        let mut tombstones = TombstoneSet::new(conn, 600);
        assert!(tombstones.all().is_empty());

        // The set is usable again after the corrupt payload is discarded
        tombstones.add(1).unwrap();
        assert!(tombstones.contains(1));
    }

    #[test]
    fn entries_expire() {
        let mut tombstones = TombstoneSet::new(MemoryCacheConnection::new(), 0);
        tombstones.add(9).unwrap();
        thread::sleep(time::Duration::from_millis(5));
        assert!(!tombstones.contains(9));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut tombstones = set();
        tombstones.add(1).unwrap();
        tombstones.add(2).unwrap();
        tombstones.clear().unwrap();
        assert!(tombstones.all().is_empty());
    }
}
