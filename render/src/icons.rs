//! Hero icon loading and memoization.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

/// Icons are normalized to this square edge size.
pub const ICON_SIZE: u32 = 40;

/// A decoded RGBA icon at [`ICON_SIZE`].
#[derive(Debug, Clone)]
pub struct HeroIcon {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl HeroIcon {
    /// Fully transparent placeholder, so layout never breaks on a missing
    /// asset.
    fn transparent() -> Self {
        Self {
            width: ICON_SIZE,
            height: ICON_SIZE,
            rgba: vec![0; (ICON_SIZE * ICON_SIZE * 4) as usize],
        }
    }
}

/// Memoizing loader for per-hero icons.
///
/// Growth is bounded by the finite hero roster, so entries are never
/// evicted. Load failures return an uncached placeholder, so a later run
/// picks up a fixed asset without restarting.
pub struct IconCache {
    icon_dir: PathBuf,
    icons: HashMap<String, Arc<HeroIcon>>,
}

impl IconCache {
    pub fn new(icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
            icons: HashMap::new(),
        }
    }

    /// The icon for `hero_id`, or a fully transparent placeholder.
    pub fn get(&mut self, hero_id: &str) -> Arc<HeroIcon> {
        if let Some(icon) = self.icons.get(hero_id) {
            return Arc::clone(icon);
        }

        let path = self.icon_dir.join(format!("{hero_id}.png"));
        match load_icon(&path) {
            Ok(icon) => {
                let icon = Arc::new(icon);
                self.icons.insert(hero_id.to_string(), Arc::clone(&icon));
                icon
            }
            Err(error) => {
                warn!(hero_id, path = %path.display(), %error, "icon load failed, using placeholder");
                Arc::new(HeroIcon::transparent())
            }
        }
    }

    /// Number of memoized icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

fn load_icon(path: &Path) -> Result<HeroIcon, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(|e| e.to_string())?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(|e| e.to_string())?;
    if info.width == 0 || info.height == 0 {
        return Err("zero-sized image".to_string());
    }
    buf.truncate(info.buffer_size());

    let rgba = expand_to_rgba(&buf, info.color_type)?;
    Ok(resize_nearest(&rgba, info.width, info.height))
}

/// Expand the decoder's normalized 8-bit output to RGBA.
fn expand_to_rgba(data: &[u8], color_type: png::ColorType) -> Result<Vec<u8>, String> {
    match color_type {
        png::ColorType::Rgba => Ok(data.to_vec()),
        png::ColorType::Rgb => Ok(data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect()),
        png::ColorType::Grayscale => Ok(data.iter().flat_map(|&g| [g, g, g, 255]).collect()),
        png::ColorType::GrayscaleAlpha => Ok(data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect()),
        other => Err(format!("unsupported color type {other:?}")),
    }
}

/// Nearest-neighbour resample to the fixed icon size.
fn resize_nearest(src: &[u8], src_w: u32, src_h: u32) -> HeroIcon {
    let mut rgba = vec![0u8; (ICON_SIZE * ICON_SIZE * 4) as usize];
    let scale_x = src_w as f32 / ICON_SIZE as f32;
    let scale_y = src_h as f32 / ICON_SIZE as f32;

    for dy in 0..ICON_SIZE {
        for dx in 0..ICON_SIZE {
            let sx = ((dx as f32 * scale_x) as u32).min(src_w - 1);
            let sy = ((dy as f32 * scale_y) as u32).min(src_h - 1);
            let s = ((sy * src_w + sx) * 4) as usize;
            let d = ((dy * ICON_SIZE + dx) * 4) as usize;
            rgba[d..d + 4].copy_from_slice(&src[s..s + 4]);
        }
    }

    HeroIcon {
        width: ICON_SIZE,
        height: ICON_SIZE,
        rgba,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_icon_yields_uncached_placeholder() {
        let mut cache = IconCache::new("/nonexistent/icons");
        let icon = cache.get("genji");

        assert_eq!(icon.width, ICON_SIZE);
        assert_eq!(icon.height, ICON_SIZE);
        assert!(icon.rgba.iter().all(|&b| b == 0));
        // Failures are not memoized
        assert!(cache.is_empty());
    }

    #[test]
    fn resize_upscales_small_images() {
        // 2x2 checkerboard: white, black / black, white
        let src = [
            255, 255, 255, 255, 0, 0, 0, 255, //
            0, 0, 0, 255, 255, 255, 255, 255,
        ];
        let icon = resize_nearest(&src, 2, 2);
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        // Top-left quadrant samples the white source pixel
        assert_eq!(icon.rgba[0], 255);
        // Top-right quadrant samples the black source pixel
        let top_right = ((ICON_SIZE - 1) * 4) as usize;
        assert_eq!(icon.rgba[top_right], 0);
        assert_eq!(icon.rgba[top_right + 3], 255);
    }

    #[test]
    fn expand_handles_common_color_types() {
        assert_eq!(
            expand_to_rgba(&[10, 20, 30], png::ColorType::Rgb).unwrap(),
            vec![10, 20, 30, 255]
        );
        assert_eq!(
            expand_to_rgba(&[128], png::ColorType::Grayscale).unwrap(),
            vec![128, 128, 128, 255]
        );
        assert_eq!(
            expand_to_rgba(&[128, 64], png::ColorType::GrayscaleAlpha).unwrap(),
            vec![128, 128, 128, 64]
        );
        assert!(expand_to_rgba(&[0], png::ColorType::Indexed).is_err());
    }
}
