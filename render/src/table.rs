//! Fixed-layout board rasterization.
//!
//! Layout mirrors the board design: a title band, a header band, and
//! 50-pixel body rows with alternating shading. The canvas size is fully
//! determined by the spec's column widths and row count.

use std::path::Path;

use armory_types::TableSpec;
use armory_types::formatting::parse_pct;
use tiny_skia::Color;
use tracing::debug;

use crate::colors;
use crate::icons::IconCache;
use crate::renderer::{RenderError, Renderer};

// Layout bands, in pixels.
const ROW_HEIGHT: u32 = 50;
const HEADER_HEIGHT: u32 = 60;
const TITLE_HEIGHT: u32 = 70;
const PADDING: u32 = 20;

// Font sizes per band.
const TITLE_FONT: f32 = 32.0;
const TEXT_FONT: f32 = 22.0;
const NAME_FONT: f32 = 20.0;
const CAPTION_FONT: f32 = 18.0;

// Offsets within a body row.
const ICON_TOP_OFFSET: i32 = 5;
const NAME_LEFT_OFFSET: f32 = 50.0;
const TEXT_TOP_OFFSET: f32 = 12.0;

// Win-rate color thresholds, in percent.
const WIN_GOOD_ABOVE: f64 = 52.0;
const WIN_BAD_BELOW: f64 = 48.0;

const CAPTION: &str = "Data: blizzard.cn";

/// Canvas width for a spec: column widths plus side padding.
pub fn canvas_width(spec: &TableSpec) -> u32 {
    spec.col_widths.iter().sum::<u32>() + PADDING * 2
}

/// Canvas height for a spec: title and header bands, body rows, bottom
/// padding.
pub fn canvas_height(spec: &TableSpec) -> u32 {
    TITLE_HEIGHT + HEADER_HEIGHT + spec.rows.len() as u32 * ROW_HEIGHT + PADDING
}

/// Rasterize a table spec into in-memory PNG bytes.
pub fn render_table(
    spec: &TableSpec,
    icons: &mut IconCache,
    font_path: &Path,
) -> Result<Vec<u8>, RenderError> {
    spec.validate().map_err(RenderError::Spec)?;

    let total_width = canvas_width(spec);
    let total_height = canvas_height(spec);
    let mut canvas = Renderer::new(total_width, total_height, colors::background(), font_path)?;

    // Title
    canvas.draw_text(&spec.title, PADDING as f32, 15.0, TITLE_FONT, colors::accent());

    // Header band
    canvas.fill_rect(
        0.0,
        TITLE_HEIGHT as f32,
        total_width as f32,
        HEADER_HEIGHT as f32,
        colors::header_band(),
    );
    let mut x = PADDING as f32;
    for (header, width) in spec.headers.iter().zip(&spec.col_widths) {
        canvas.draw_text(
            header,
            x,
            TITLE_HEIGHT as f32 + 15.0,
            TEXT_FONT,
            colors::header_text(),
        );
        x += *width as f32;
    }

    // Body rows
    let mut y = (TITLE_HEIGHT + HEADER_HEIGHT) as f32;
    for (index, row) in spec.rows.iter().enumerate() {
        if index % 2 == 0 {
            canvas.fill_rect(0.0, y, total_width as f32, ROW_HEIGHT as f32, colors::row_alt());
        }

        let mut x = PADDING as f32;

        // Rank / index column
        canvas.draw_text(&row.cells[0], x, y + TEXT_TOP_OFFSET, TEXT_FONT, colors::text());
        x += spec.col_widths[0] as f32;

        // Icon + name column
        match &row.icon_id {
            Some(hero_id) => {
                let icon = icons.get(hero_id);
                canvas.draw_image(
                    &icon.rgba,
                    icon.width,
                    icon.height,
                    x as i32,
                    y as i32 + ICON_TOP_OFFSET,
                );
                canvas.draw_text(
                    &row.cells[1],
                    x + NAME_LEFT_OFFSET,
                    y + TEXT_TOP_OFFSET,
                    NAME_FONT,
                    colors::text(),
                );
            }
            None => {
                canvas.draw_text(&row.cells[1], x, y + TEXT_TOP_OFFSET, NAME_FONT, colors::text())
            }
        }
        x += spec.col_widths[1] as f32;

        // Metric columns; only the first is win rate by column order, and
        // only it is color-coded
        for (offset, cell) in row.cells[2..].iter().enumerate() {
            let color = if offset == 0 {
                win_rate_color(cell)
            } else {
                colors::text()
            };
            canvas.draw_text(cell, x, y + TEXT_TOP_OFFSET, TEXT_FONT, color);
            x += spec.col_widths[offset + 2] as f32;
        }

        y += ROW_HEIGHT as f32;
    }

    // Attribution caption
    canvas.draw_text(
        CAPTION,
        total_width as f32 - 200.0,
        total_height as f32 - 25.0,
        CAPTION_FONT,
        colors::caption(),
    );

    debug!(
        width = total_width,
        height = total_height,
        rows = spec.rows.len(),
        "board rendered"
    );
    canvas.encode_png()
}

/// Color for the win-rate column based on its formatted percent value.
/// Placeholder cells and non-percent values keep the default color.
fn win_rate_color(cell: &str) -> Color {
    match parse_pct(cell) {
        Some(value) if value > WIN_GOOD_ABOVE => colors::win_good(),
        Some(value) if value < WIN_BAD_BELOW => colors::win_bad(),
        _ => colors::text(),
    }
}

#[cfg(test)]
mod tests {
    use armory_types::TableRow;

    use super::*;

    fn spec(rows: usize) -> TableSpec {
        TableSpec {
            title: "守望先锋国服 S20".to_string(),
            headers: vec!["", "英雄", "胜率", "KDA"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            col_widths: vec![60, 240, 130, 80],
            rows: (0..rows)
                .map(|i| {
                    TableRow::with_icon(
                        vec![(i + 1).to_string(), "源氏".to_string(), "53.2%".to_string(), "3.10".to_string()],
                        "genji",
                    )
                })
                .collect(),
        }
    }

    /// Width and height from a PNG IHDR chunk.
    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        let w = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let h = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (w, h)
    }

    #[test]
    fn canvas_dimensions_follow_layout_constants() {
        let spec = spec(20);
        assert_eq!(canvas_width(&spec), 60 + 240 + 130 + 80 + 40);
        assert_eq!(canvas_height(&spec), 70 + 60 + 20 * 50 + 20);
    }

    #[test]
    fn renders_to_png_with_expected_size() {
        let spec = spec(3);
        let mut icons = IconCache::new("/nonexistent/icons");
        let bytes = render_table(&spec, &mut icons, Path::new("/nonexistent/font.otf")).unwrap();

        let (w, h) = png_dimensions(&bytes);
        assert_eq!(w, canvas_width(&spec));
        assert_eq!(h, canvas_height(&spec));
    }

    #[test]
    fn invalid_spec_is_rejected_before_drawing() {
        let mut bad = spec(1);
        bad.rows[0].cells.pop();
        let mut icons = IconCache::new("/nonexistent/icons");
        let result = render_table(&bad, &mut icons, Path::new("/nonexistent/font.otf"));
        assert!(matches!(result, Err(RenderError::Spec(_))));
    }

    #[test]
    fn win_rate_thresholds() {
        assert_eq!(win_rate_color("53.2%"), colors::win_good());
        assert_eq!(win_rate_color("47.9%"), colors::win_bad());
        assert_eq!(win_rate_color("50.0%"), colors::text());
        // Boundary values stay default
        assert_eq!(win_rate_color("52.0%"), colors::text());
        assert_eq!(win_rate_color("48.0%"), colors::text());
        // Placeholder and non-percent cells stay default
        assert_eq!(win_rate_color("-"), colors::text());
        assert_eq!(win_rate_color("3.10"), colors::text());
    }
}
