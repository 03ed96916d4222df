//! Axis enums for leaderboard queries.
//!
//! The upstream API and the chat vocabulary address each query axis with
//! loosely-typed codes (integers and strings interchangeably). Each axis is
//! one enum here; conversions to and from wire codes happen only at the
//! vocabulary and deserialization boundaries.

use crate::record::HeroRecord;

/// Game mode a leaderboard is queried for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    Ranked,
    Quick,
}

impl GameMode {
    /// Wire value of the upstream `game_mode` query parameter.
    pub fn api_value(self) -> &'static str {
        match self {
            GameMode::Ranked => "jingji",
            GameMode::Quick => "kuaisu",
        }
    }

    /// Localized label used in board titles.
    pub fn display(self) -> &'static str {
        match self {
            GameMode::Ranked => "竞技模式",
            GameMode::Quick => "快速模式",
        }
    }
}

/// One of the eight fixed skill brackets, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RankTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Champion,
}

impl RankTier {
    /// All tiers in fixed ascending order. Single-hero boards iterate this
    /// array so every board has exactly one row per tier.
    pub const ALL: [RankTier; 8] = [
        RankTier::Bronze,
        RankTier::Silver,
        RankTier::Gold,
        RankTier::Platinum,
        RankTier::Diamond,
        RankTier::Master,
        RankTier::Grandmaster,
        RankTier::Champion,
    ];

    /// Tier name as the upstream `mmr` parameter expects it.
    pub fn api_name(self) -> &'static str {
        match self {
            RankTier::Bronze => "Bronze",
            RankTier::Silver => "Silver",
            RankTier::Gold => "Gold",
            RankTier::Platinum => "Platinum",
            RankTier::Diamond => "Diamond",
            RankTier::Master => "Master",
            RankTier::Grandmaster => "GrandMaster",
            RankTier::Champion => "Champion",
        }
    }

    /// Localized tier label.
    pub fn display(self) -> &'static str {
        match self {
            RankTier::Bronze => "青铜",
            RankTier::Silver => "白银",
            RankTier::Gold => "黄金",
            RankTier::Platinum => "白金",
            RankTier::Diamond => "钻石",
            RankTier::Master => "大师",
            RankTier::Grandmaster => "宗师",
            RankTier::Champion => "冠军",
        }
    }
}

/// Rank filter of a leaderboard query: a specific tier or every tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RankFilter {
    #[default]
    All,
    Tier(RankTier),
}

impl RankFilter {
    /// Wire sentinel for "all tiers" in the upstream `mmr` parameter.
    pub const ALL_SENTINEL: i32 = -127;

    /// Value of the upstream `mmr` query parameter.
    pub fn mmr_value(self) -> String {
        match self {
            RankFilter::All => Self::ALL_SENTINEL.to_string(),
            RankFilter::Tier(tier) => tier.api_name().to_string(),
        }
    }

    /// Localized label used in board titles and warnings.
    pub fn display(self) -> &'static str {
        match self {
            RankFilter::All => "所有分段",
            RankFilter::Tier(tier) => tier.display(),
        }
    }
}

/// Role classification of a playable hero, plus the "all roles" filter
/// sentinel the upstream encodes as role code 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    All,
    Damage,
    Tank,
    Support,
}

impl Role {
    /// Role from the upstream `hero_type` code. Unknown codes map to
    /// [`Role::All`], which matches no specific-role filter.
    pub fn from_code(code: i64) -> Role {
        match code {
            1 => Role::Damage,
            2 => Role::Tank,
            3 => Role::Support,
            _ => Role::All,
        }
    }

    /// Localized role label.
    pub fn display(self) -> &'static str {
        match self {
            Role::All => "所有职责",
            Role::Damage => "输出",
            Role::Tank => "重装",
            Role::Support => "支援",
        }
    }
}

/// Numeric metric a leaderboard is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    WinRatio,
    SelectionRatio,
    BanRatio,
    Kda,
}

impl SortKey {
    /// The record field this key orders by.
    pub fn extract(self, record: &HeroRecord) -> f64 {
        match self {
            SortKey::WinRatio => record.win_ratio,
            SortKey::SelectionRatio => record.selection_ratio,
            SortKey::BanRatio => record.ban_ratio,
            SortKey::Kda => record.kda,
        }
    }

    /// Localized metric label.
    pub fn display(self) -> &'static str {
        match self {
            SortKey::WinRatio => "胜率",
            SortKey::SelectionRatio => "出场率",
            SortKey::BanRatio => "禁用率",
            SortKey::Kda => "KDA",
        }
    }
}
