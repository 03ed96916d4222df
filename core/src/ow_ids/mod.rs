//! Static vocabulary tables for the CN-server hero board.
//!
//! Free-text chat tokens map onto canonical codes here. The tables are
//! compile-time `phf` maps: built into the binary, loaded once, never
//! mutated. Matching against them is always an exact per-token lookup, so
//! table iteration order can never influence resolution.

mod heroes;

pub use heroes::{HERO_DISPLAY, HERO_TOKENS, hero_display_name, lookup_hero_token};

use armory_types::{RankFilter, RankTier, Role};
use phf::phf_map;

/// Rank vocabulary: exact (case-sensitive) tokens to rank filters.
///
/// The Champion tier has no token on purpose; the upstream vocabulary never
/// exposed one, so the tier is reachable only through single-hero boards.
pub static RANK_TOKENS: phf::Map<&'static str, RankFilter> = phf_map! {
    "所有" => RankFilter::All,
    "全部" => RankFilter::All,
    "all" => RankFilter::All,
    "青铜" => RankFilter::Tier(RankTier::Bronze),
    "bronze" => RankFilter::Tier(RankTier::Bronze),
    "白银" => RankFilter::Tier(RankTier::Silver),
    "silver" => RankFilter::Tier(RankTier::Silver),
    "黄金" => RankFilter::Tier(RankTier::Gold),
    "gold" => RankFilter::Tier(RankTier::Gold),
    "白金" => RankFilter::Tier(RankTier::Platinum),
    "铂金" => RankFilter::Tier(RankTier::Platinum),
    "platinum" => RankFilter::Tier(RankTier::Platinum),
    "钻石" => RankFilter::Tier(RankTier::Diamond),
    "diamond" => RankFilter::Tier(RankTier::Diamond),
    "大师" => RankFilter::Tier(RankTier::Master),
    "master" => RankFilter::Tier(RankTier::Master),
    "宗师" => RankFilter::Tier(RankTier::Grandmaster),
    "grandmaster" => RankFilter::Tier(RankTier::Grandmaster),
};

/// Role vocabulary: exact tokens to role filters.
pub static ROLE_TOKENS: phf::Map<&'static str, Role> = phf_map! {
    "输出" => Role::Damage,
    "C" => Role::Damage,
    "damage" => Role::Damage,
    "重装" => Role::Tank,
    "T" => Role::Tank,
    "tank" => Role::Tank,
    "坦克" => Role::Tank,
    "支援" => Role::Support,
    "奶" => Role::Support,
    "辅助" => Role::Support,
    "support" => Role::Support,
    "所有" => Role::All,
    "all" => Role::All,
};
