//! Upstream hero statistics records.

use serde::{Deserialize, Deserializer};

use crate::game::Role;

/// One hero's statistics within a single rank tier, as returned by the
/// upstream leaderboard endpoint.
///
/// Records are rebuilt from every fetch and never mutated in place. Missing
/// numeric fields decode as zero; the `hero_type` role classifier arrives as
/// either a JSON integer or a string code and is converted to [`Role`] here,
/// at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroRecord {
    /// Canonical lowercase hero id; normalized on decode so tier sweeps and
    /// icon lookups never depend on upstream casing.
    #[serde(default, deserialize_with = "lowercase_id")]
    pub hero_id: String,
    #[serde(default)]
    pub win_ratio: f64,
    #[serde(default)]
    pub selection_ratio: f64,
    #[serde(default)]
    pub ban_ratio: f64,
    #[serde(default)]
    pub kda: f64,
    #[serde(rename = "hero_type", default, deserialize_with = "role_from_code")]
    pub role: Role,
}

fn lowercase_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.to_lowercase())
}

fn role_from_code<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Int(i64),
        Text(String),
    }

    let code = match Code::deserialize(deserializer)? {
        Code::Int(n) => n,
        // String codes that fail to parse behave like unknown codes
        Code::Text(s) => s.trim().parse::<i64>().unwrap_or(-1),
    };
    Ok(Role::from_code(code))
}
