//! Board generation pipeline: resolve, fetch, shape, render, write.

use std::path::Path;
use std::time::Duration;

use armory_core::{ArmoryConfig, HttpFetcher, Query, StatsService, board, rank_leaderboard, resolve};
use armory_render::{IconCache, render_table};

/// Run one board request end to end.
///
/// No-data outcomes are not errors: they print the specific warning the
/// chat user would see and return `Ok`. Only setup failures (config, HTTP
/// client, output file) surface as `Err`.
pub async fn run(tokens: &[String], config_path: &Path, out: &Path) -> Result<(), String> {
    let config = ArmoryConfig::load(config_path).map_err(|e| e.to_string())?;
    let fetcher = HttpFetcher::new(&config).map_err(|e| e.to_string())?;
    let service = StatsService::new(
        fetcher,
        config.season,
        Duration::from_secs(config.cache_ttl_secs),
    );
    let mut icons = IconCache::new(&config.icon_dir);

    match resolve(tokens) {
        Query::Hero { id, display } => {
            let title = board::hero_title(config.season, &display);
            println!("{}", board::generating_hero_message(&display));

            let sweep = service.hero_across_tiers(&id).await;
            if !sweep.any_data {
                println!("{}", board::EMPTY_HERO_WARNING);
                return Ok(());
            }

            // A hero missing from populated tiers still gets its board,
            // with placeholder rows
            let spec = board::hero_spec(title, &id, &display, &sweep.rows);
            write_board(&spec, &mut icons, &config, out)
        }
        Query::Leaderboard(query) => {
            let title = board::leaderboard_title(config.season, &query);
            println!("{}", board::generating_message(&title));

            let records = service.get_or_fetch(query.mode, query.rank).await;
            let ranked = rank_leaderboard(records, &query);
            if ranked.is_empty() {
                // Covers both an empty fetch and a role filter that
                // removed every record
                println!("{}", board::empty_leaderboard_warning(query.rank));
                return Ok(());
            }

            let spec = board::leaderboard_spec(title, &query, &ranked);
            write_board(&spec, &mut icons, &config, out)
        }
    }
}

fn write_board(
    spec: &armory_types::TableSpec,
    icons: &mut IconCache,
    config: &ArmoryConfig,
    out: &Path,
) -> Result<(), String> {
    let image = render_table(spec, icons, &config.font_path).map_err(|e| e.to_string())?;
    std::fs::write(out, &image).map_err(|e| format!("failed to write {}: {e}", out.display()))?;
    println!("{}", out.display());
    Ok(())
}
