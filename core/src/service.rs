//! Stats service: cache-backed fetching and result shaping.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use armory_types::{GameMode, HeroRecord, RankFilter, RankTier, Role};
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::StatsCache;
use crate::fetch::FetchStats;
use crate::query::ResolvedQuery;

/// Maximum number of rows on a leaderboard board.
pub const LEADERBOARD_LIMIT: usize = 20;

/// Cache-backed access to upstream record sets.
pub struct StatsService<F> {
    fetcher: F,
    cache: Mutex<StatsCache>,
    season: u32,
}

impl<F: FetchStats> StatsService<F> {
    pub fn new(fetcher: F, season: u32, ttl: Duration) -> Self {
        Self {
            fetcher,
            cache: Mutex::new(StatsCache::new(ttl)),
            season,
        }
    }

    /// Record set for one (mode, rank) pair, from cache when fresh.
    ///
    /// The cache lock is held across the fetch, so concurrent misses on any
    /// key collapse into a single in-flight upstream call. An empty fetch
    /// result is returned as-is and never cached.
    pub async fn get_or_fetch(&self, mode: GameMode, rank: RankFilter) -> Vec<HeroRecord> {
        let key = (mode, self.season, rank);
        let mut cache = self.cache.lock().await;

        if let Some(records) = cache.get(&key, Instant::now()) {
            debug!(mode = mode.api_value(), mmr = %rank.mmr_value(), "cache hit");
            return records.to_vec();
        }

        let records = self.fetcher.fetch(mode, rank).await;
        if !records.is_empty() {
            cache.put(key, records.clone(), Instant::now());
        }
        records
    }

    /// One hero's record in every rank tier, in fixed ascending tier order.
    ///
    /// Tiers are fetched one at a time; a tier with no data (or without the
    /// hero) yields `None` and never drops the row, so the result always has
    /// exactly one entry per tier.
    pub async fn hero_across_tiers(&self, hero_id: &str) -> HeroTiers {
        let mut rows = Vec::with_capacity(RankTier::ALL.len());
        let mut any_data = false;
        for tier in RankTier::ALL {
            let records = self
                .get_or_fetch(GameMode::Ranked, RankFilter::Tier(tier))
                .await;
            any_data |= !records.is_empty();
            let record = records.into_iter().find(|r| r.hero_id == hero_id);
            rows.push((tier, record));
        }
        HeroTiers { rows, any_data }
    }
}

/// Result of sweeping one hero across the rank tiers.
#[derive(Debug)]
pub struct HeroTiers {
    /// Exactly one entry per tier, ascending; `None` where the tier's board
    /// does not list the hero.
    pub rows: Vec<(RankTier, Option<HeroRecord>)>,
    /// Whether any tier fetch returned records at all. `false` means the
    /// upstream had no data anywhere, not merely that the hero is absent
    /// from the boards.
    pub any_data: bool,
}

/// Filter, order, and truncate a raw record set for a leaderboard query.
///
/// The sort is stable and descending on the resolved key, so ties keep the
/// upstream order.
pub fn rank_leaderboard(records: Vec<HeroRecord>, query: &ResolvedQuery) -> Vec<HeroRecord> {
    let mut rows: Vec<HeroRecord> = records
        .into_iter()
        .filter(|record| query.role == Role::All || record.role == query.role)
        .collect();
    rows.sort_by(|a, b| {
        query
            .sort
            .extract(b)
            .partial_cmp(&query.sort.extract(a))
            .unwrap_or(Ordering::Equal)
    });
    rows.truncate(LEADERBOARD_LIMIT);
    rows
}
