//! Core pipeline for the armory hero statistics board: vocabulary tables,
//! query resolution, cache-backed fetching, result shaping, and board
//! presentation.

pub mod board;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod ow_ids;
pub mod query;
pub mod service;

// Re-exports for convenience
pub use config::ArmoryConfig;
pub use error::ArmoryError;
pub use fetch::{FetchStats, HttpFetcher};
pub use query::{Query, ResolvedQuery, resolve};
pub use service::{HeroTiers, LEADERBOARD_LIMIT, StatsService, rank_leaderboard};
