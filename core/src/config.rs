//! Runtime configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ArmoryError;

/// Upstream leaderboard endpoint.
pub const DEFAULT_API_URL: &str = "https://webapi.blizzard.cn/ow-armory-server/hero_leaderboard";

/// Tunables for the board pipeline. Loaded once at startup; a missing file
/// yields (and persists) the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmoryConfig {
    pub api_url: String,
    /// Season the upstream is queried for.
    pub season: u32,
    /// Maximum age of a cached record set, in seconds.
    pub cache_ttl_secs: u64,
    /// Upstream request timeout, in seconds.
    pub fetch_timeout_secs: u64,
    /// Board font file; render degrades to system fonts when missing.
    pub font_path: PathBuf,
    /// Directory of per-hero `<hero_id>.png` icons.
    pub icon_dir: PathBuf,
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            season: 20,
            cache_ttl_secs: 1800,
            fetch_timeout_secs: 10,
            font_path: PathBuf::from("assets/font.otf"),
            icon_dir: PathBuf::from("assets/icons"),
        }
    }
}

impl ArmoryConfig {
    /// Load from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ArmoryError> {
        confy::load_path(path).map_err(|source| ArmoryError::Config {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_contract() {
        let config = ArmoryConfig::default();
        assert_eq!(config.season, 20);
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert!(config.api_url.ends_with("hero_leaderboard"));
    }
}
