//! Board presentation: table specs, titles, and user-facing messages.
//!
//! Everything here is pure shaping — records in, a [`TableSpec`] and the
//! status/warning strings the host forwards to the chat channel out.

use armory_types::formatting::{format_kda, format_pct};
use armory_types::{GameMode, HeroRecord, RankFilter, RankTier, Role, TableRow, TableSpec};

use crate::ow_ids;
use crate::query::ResolvedQuery;

/// Placeholder for metric cells without data.
pub const NO_DATA: &str = "-";

/// Warning when single-hero mode finds no data in any tier.
pub const EMPTY_HERO_WARNING: &str = "⚠️ 未找到数据，该英雄可能被Ban或暂无数据。";

/// Title of a leaderboard board.
///
/// Quick mode names the mode and only mentions rank/role filters that
/// narrow the board; ranked mode always spells out both.
pub fn leaderboard_title(season: u32, query: &ResolvedQuery) -> String {
    let mut parts = vec![format!("守望先锋国服 S{season}")];
    match query.mode {
        GameMode::Quick => {
            parts.push(GameMode::Quick.display().to_string());
            if let RankFilter::Tier(_) = query.rank {
                parts.push(query.rank.display().to_string());
            }
            if query.role != Role::All {
                parts.push(query.role.display().to_string());
            }
        }
        GameMode::Ranked => {
            parts.push(query.rank.display().to_string());
            parts.push(query.role.display().to_string());
        }
    }
    parts.push(query.sort.display().to_string());
    parts.join(" ")
}

/// Title of a single-hero board.
pub fn hero_title(season: u32, display: &str) -> String {
    format!("守望先锋国服 S{season} {display} 数据趋势")
}

/// Status line shown while a leaderboard board is being generated.
pub fn generating_message(title: &str) -> String {
    format!("🔍 正在生成 {title}...")
}

/// Status line shown while a single-hero board is being generated.
pub fn generating_hero_message(display: &str) -> String {
    format!("🔍 正在生成 {display} 数据图表...")
}

/// Warning when a leaderboard fetch yields nothing.
pub fn empty_leaderboard_warning(rank: RankFilter) -> String {
    format!("⚠️ {} 暂无数据。", rank.display())
}

/// Build the table spec for a ranked-or-quick leaderboard.
///
/// `records` must already be filtered, sorted, and truncated; rank numbers
/// are assigned here, 1-based in final order. Quick play has no bans, so
/// the ban column is dropped there.
pub fn leaderboard_spec(
    title: String,
    query: &ResolvedQuery,
    records: &[HeroRecord],
) -> TableSpec {
    let (headers, col_widths): (&[&str], Vec<u32>) = match query.mode {
        GameMode::Quick => (
            &["", "英雄", "胜率", "出场", "KDA"],
            vec![60, 240, 130, 110, 80],
        ),
        GameMode::Ranked => (
            &["", "英雄", "胜率", "出场", "禁用", "KDA"],
            vec![60, 240, 130, 110, 110, 80],
        ),
    };

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut cells = vec![
                (index + 1).to_string(),
                ow_ids::hero_display_name(&record.hero_id).to_string(),
                format_pct(record.win_ratio),
                format_pct(record.selection_ratio),
            ];
            if query.mode == GameMode::Ranked {
                cells.push(format_pct(record.ban_ratio));
            }
            cells.push(format_kda(record.kda));
            TableRow::with_icon(cells, record.hero_id.clone())
        })
        .collect();

    TableSpec {
        title,
        headers: headers.iter().map(|h| h.to_string()).collect(),
        col_widths,
        rows,
    }
}

/// Build the table spec for one hero across every rank tier.
///
/// Always one row per tier in ascending order; tiers without the hero's
/// data show [`NO_DATA`] in every metric cell.
pub fn hero_spec(
    title: String,
    hero_id: &str,
    display: &str,
    tiers: &[(RankTier, Option<HeroRecord>)],
) -> TableSpec {
    let headers = ["段位", "英雄", "胜率", "出场", "禁用", "KDA"];

    let rows = tiers
        .iter()
        .map(|(tier, record)| {
            let cells = match record {
                Some(r) => vec![
                    tier.display().to_string(),
                    display.to_string(),
                    format_pct(r.win_ratio),
                    format_pct(r.selection_ratio),
                    format_pct(r.ban_ratio),
                    format_kda(r.kda),
                ],
                None => vec![
                    tier.display().to_string(),
                    display.to_string(),
                    NO_DATA.to_string(),
                    NO_DATA.to_string(),
                    NO_DATA.to_string(),
                    NO_DATA.to_string(),
                ],
            };
            TableRow::with_icon(cells, hero_id)
        })
        .collect();

    TableSpec {
        title,
        headers: headers.iter().map(|h| h.to_string()).collect(),
        col_widths: vec![100, 220, 120, 100, 100, 80],
        rows,
    }
}
