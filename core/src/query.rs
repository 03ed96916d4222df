//! Free-text query resolution.
//!
//! Token precedence is fixed and deterministic:
//!
//! 1. Hero scan: tokens in order, exact lookup against the hero vocabulary
//!    (either language form); the first hit short-circuits into single-hero
//!    mode and the remaining tokens are never inspected.
//! 2. Fuzzy classification: tokens in order, each token classified into at
//!    most one bucket by the first matching rule — quick-mode substrings,
//!    ranked-mode substrings, exact rank token, exact role token, then the
//!    sort-key substrings.
//!
//! Unrecognized tokens are silently ignored; the defaults always produce a
//! well-formed query.

use armory_types::{GameMode, RankFilter, Role, SortKey};

use crate::ow_ids;

/// Filters for a leaderboard request, built once per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub mode: GameMode,
    pub rank: RankFilter,
    pub role: Role,
    pub sort: SortKey,
}

/// Outcome of resolving user tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// One hero's record across every rank tier.
    Hero { id: String, display: String },
    /// A filtered, sorted leaderboard.
    Leaderboard(ResolvedQuery),
}

const QUICK_HINTS: [&str; 4] = ["快速", "休闲", "匹配", "娱乐"];
const RANKED_HINTS: [&str; 4] = ["竞技", "排位", "天梯", "上分"];
const SELECTION_HINTS: [&str; 3] = ["出场", "选取", "热度"];

/// Resolve free-text tokens into a query.
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Query {
    for token in tokens {
        if let Some(id) = ow_ids::lookup_hero_token(token.as_ref()) {
            return Query::Hero {
                id: id.to_string(),
                display: ow_ids::hero_display_name(id).to_string(),
            };
        }
    }

    let mut query = ResolvedQuery::default();
    for token in tokens {
        let token = token.as_ref();
        let lower = token.to_ascii_lowercase();

        if QUICK_HINTS.iter().any(|hint| token.contains(hint)) {
            query.mode = GameMode::Quick;
        } else if RANKED_HINTS.iter().any(|hint| token.contains(hint)) {
            query.mode = GameMode::Ranked;
        } else if let Some(&rank) = ow_ids::RANK_TOKENS.get(token) {
            query.rank = rank;
        } else if let Some(&role) = ow_ids::ROLE_TOKENS.get(token) {
            query.role = role;
        } else if SELECTION_HINTS.iter().any(|hint| token.contains(hint)) {
            query.sort = SortKey::SelectionRatio;
        } else if token.contains('胜') {
            query.sort = SortKey::WinRatio;
        } else if token.contains('禁') || lower.contains("ban") {
            query.sort = SortKey::BanRatio;
        } else if lower.contains("kda") {
            query.sort = SortKey::Kda;
        }
        // anything else: ignored, never an error
    }
    Query::Leaderboard(query)
}

#[cfg(test)]
mod tests {
    use armory_types::RankTier;

    use super::*;

    fn leaderboard(tokens: &[&str]) -> ResolvedQuery {
        match resolve(tokens) {
            Query::Leaderboard(query) => query,
            other => panic!("expected leaderboard query, got {other:?}"),
        }
    }

    #[test]
    fn empty_tokens_use_defaults() {
        let query = leaderboard(&[]);
        assert_eq!(query.mode, GameMode::Ranked);
        assert_eq!(query.rank, RankFilter::All);
        assert_eq!(query.role, Role::All);
        assert_eq!(query.sort, SortKey::WinRatio);
    }

    #[test]
    fn rank_role_sort_tokens_combine() {
        let query = leaderboard(&["钻石", "支援", "出场"]);
        assert_eq!(query.mode, GameMode::Ranked);
        assert_eq!(query.rank, RankFilter::Tier(RankTier::Diamond));
        assert_eq!(query.role, Role::Support);
        assert_eq!(query.sort, SortKey::SelectionRatio);
    }

    #[test]
    fn hero_token_short_circuits() {
        assert_eq!(
            resolve(&["源氏"]),
            Query::Hero {
                id: "genji".to_string(),
                display: "源氏".to_string(),
            }
        );
        // Filters after a hero token never apply
        assert_eq!(
            resolve(&["钻石", "genji", "出场"]),
            Query::Hero {
                id: "genji".to_string(),
                display: "源氏".to_string(),
            }
        );
    }

    #[test]
    fn mode_hints_are_substrings() {
        assert_eq!(leaderboard(&["快速模式"]).mode, GameMode::Quick);
        assert_eq!(leaderboard(&["娱乐"]).mode, GameMode::Quick);
        assert_eq!(leaderboard(&["天梯"]).mode, GameMode::Ranked);
    }

    #[test]
    fn sort_hints() {
        assert_eq!(leaderboard(&["胜率"]).sort, SortKey::WinRatio);
        assert_eq!(leaderboard(&["热度"]).sort, SortKey::SelectionRatio);
        assert_eq!(leaderboard(&["禁用"]).sort, SortKey::BanRatio);
        assert_eq!(leaderboard(&["BAN率"]).sort, SortKey::BanRatio);
        assert_eq!(leaderboard(&["KDA"]).sort, SortKey::Kda);
        assert_eq!(leaderboard(&["kda"]).sort, SortKey::Kda);
    }

    #[test]
    fn exact_vocabulary_wins_over_sort_substrings() {
        // "胜" appears in no rank token, but a rank token containing a sort
        // substring must classify as the rank, checked first.
        let query = leaderboard(&["所有", "胜率"]);
        assert_eq!(query.rank, RankFilter::All);
        assert_eq!(query.sort, SortKey::WinRatio);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let query = leaderboard(&["什么", "unknown", "钻石"]);
        assert_eq!(query.rank, RankFilter::Tier(RankTier::Diamond));
        assert_eq!(query.sort, SortKey::WinRatio);
    }
}
