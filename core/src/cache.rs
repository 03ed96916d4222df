//! Time-boxed result cache.
//!
//! The TTL comparison lives here and nowhere else. Callers pass the current
//! instant into every operation, so tests drive the clock synthetically
//! instead of sleeping.

use std::time::{Duration, Instant};

use armory_types::{GameMode, HeroRecord, RankFilter};
use hashbrown::HashMap;

/// Key of one cached leaderboard: mode, season, rank filter.
pub type CacheKey = (GameMode, u32, RankFilter);

#[derive(Debug, Clone)]
struct CacheEntry {
    records: Vec<HeroRecord>,
    fetched_at: Instant,
}

/// TTL-keyed store of previously fetched record sets.
#[derive(Debug)]
pub struct StatsCache {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: Duration,
}

impl StatsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Records for `key` if an entry exists and is younger than the TTL.
    pub fn get(&self, key: &CacheKey, now: Instant) -> Option<&[HeroRecord]> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.fetched_at) < self.ttl {
            Some(&entry.records)
        } else {
            None
        }
    }

    /// Store a record set, overwriting any prior entry for the key.
    ///
    /// Callers only store non-empty data: an empty fetch result must leave
    /// the cache untouched so a later call retries upstream instead of
    /// trusting a transient empty response.
    pub fn put(&mut self, key: CacheKey, records: Vec<HeroRecord>, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                records,
                fetched_at: now,
            },
        );
    }

    /// Whether any entry, fresh or stale, exists for `key`.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use armory_types::Role;

    use super::*;

    fn record(hero_id: &str) -> HeroRecord {
        HeroRecord {
            hero_id: hero_id.to_string(),
            win_ratio: 50.0,
            selection_ratio: 10.0,
            ban_ratio: 1.0,
            kda: 3.0,
            role: Role::Damage,
        }
    }

    fn key() -> CacheKey {
        (GameMode::Ranked, 20, RankFilter::All)
    }

    #[test]
    fn fresh_entry_is_returned() {
        let mut cache = StatsCache::new(Duration::from_secs(1800));
        let t0 = Instant::now();
        cache.put(key(), vec![record("ana")], t0);

        let hit = cache.get(&key(), t0 + Duration::from_secs(1799)).unwrap();
        assert_eq!(hit[0].hero_id, "ana");
    }

    #[test]
    fn expired_entry_is_treated_as_absent_but_not_deleted() {
        let mut cache = StatsCache::new(Duration::from_secs(1800));
        let t0 = Instant::now();
        cache.put(key(), vec![record("ana")], t0);

        assert!(cache.get(&key(), t0 + Duration::from_secs(1800)).is_none());
        // The stale entry survives until a non-empty refresh overwrites it
        assert!(cache.contains(&key()));
    }

    #[test]
    fn put_overwrites_stale_entry() {
        let mut cache = StatsCache::new(Duration::from_secs(1800));
        let t0 = Instant::now();
        cache.put(key(), vec![record("ana")], t0);

        let t1 = t0 + Duration::from_secs(3600);
        cache.put(key(), vec![record("genji")], t1);

        let hit = cache.get(&key(), t1).unwrap();
        assert_eq!(hit[0].hero_id, "genji");
    }

    #[test]
    fn keys_are_disjoint_per_mode_and_rank() {
        let mut cache = StatsCache::new(Duration::from_secs(1800));
        let t0 = Instant::now();
        cache.put(key(), vec![record("ana")], t0);

        let quick = (GameMode::Quick, 20, RankFilter::All);
        assert!(cache.get(&quick, t0).is_none());
    }
}
