//! Upstream leaderboard fetching.

use std::time::Duration;

use armory_types::{GameMode, HeroRecord, RankFilter};
use serde::Deserialize;
use tracing::warn;

use crate::config::ArmoryConfig;
use crate::error::ArmoryError;

/// Seam between the stats service and the upstream HTTP API.
///
/// Implementations never fail: transport and decode problems degrade to an
/// empty record set, logged but never propagated.
#[allow(async_fn_in_trait)]
pub trait FetchStats {
    async fn fetch(&self, mode: GameMode, rank: RankFilter) -> Vec<HeroRecord>;
}

/// The endpoint answers either a wrapped mapping or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum LeaderboardBody {
    Wrapped { data: Vec<HeroRecord> },
    Bare(Vec<HeroRecord>),
}

impl LeaderboardBody {
    fn into_records(self) -> Vec<HeroRecord> {
        match self {
            LeaderboardBody::Wrapped { data } => data,
            LeaderboardBody::Bare(records) => records,
        }
    }
}

/// HTTP fetcher against the CN armory leaderboard endpoint.
pub struct HttpFetcher {
    client: reqwest::Client,
    api_url: String,
    season: u32,
}

impl HttpFetcher {
    pub fn new(config: &ArmoryConfig) -> Result<Self, ArmoryError> {
        // The upstream's certificate chain does not validate against common
        // roots; verification stays off until that changes upstream.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            season: config.season,
        })
    }

    async fn request(
        &self,
        mode: GameMode,
        rank: RankFilter,
    ) -> Result<Vec<HeroRecord>, reqwest::Error> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("game_mode", mode.api_value().to_string()),
                ("season", self.season.to_string()),
                ("mmr", rank.mmr_value()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: LeaderboardBody = response.json().await?;
        Ok(body.into_records())
    }
}

impl FetchStats for HttpFetcher {
    async fn fetch(&self, mode: GameMode, rank: RankFilter) -> Vec<HeroRecord> {
        match self.request(mode, rank).await {
            Ok(records) => records,
            Err(error) => {
                warn!(
                    mode = mode.api_value(),
                    mmr = %rank.mmr_value(),
                    %error,
                    "leaderboard fetch failed"
                );
                Vec::new()
            }
        }
    }
}
