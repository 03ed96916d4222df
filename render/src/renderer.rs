//! Drawing primitives: a pixmap plus font machinery.
//!
//! Everything the table rasterizer draws goes through here — solid fills,
//! alpha-blended text runs shaped by cosmic-text, RGBA icon compositing,
//! and PNG encoding. Text coordinates address the top-left corner of the
//! text box, matching the band arithmetic in the table layer.

use std::fmt;
use std::path::Path;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};
use tiny_skia::{Color, Paint, Pixmap, PremultipliedColorU8, Rect, Transform};
use tracing::warn;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

#[derive(Debug)]
pub enum RenderError {
    /// Canvas dimensions computed to zero or exceeded pixmap limits.
    Canvas { width: u32, height: u32 },
    /// Table spec failed validation.
    Spec(String),
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Canvas { width, height } => {
                write!(f, "cannot allocate a {width}x{height} canvas")
            }
            RenderError::Spec(reason) => write!(f, "invalid table spec: {reason}"),
            RenderError::Encode(reason) => write!(f, "PNG encoding failed: {reason}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// An offscreen canvas with text, fill, and image compositing primitives.
pub struct Renderer {
    pixmap: Pixmap,
    font_system: FontSystem,
    swash_cache: SwashCache,
    /// Family name of the configured board font; `None` falls back to
    /// whatever the system font database matches.
    family: Option<String>,
}

impl Renderer {
    /// Create a canvas filled with `background`.
    ///
    /// `font_path` is loaded into a fresh font database when readable; any
    /// failure degrades to system fonts so a missing font never fails the
    /// render.
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        font_path: &Path,
    ) -> Result<Self, RenderError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
        pixmap.fill(background);

        let mut db = fontdb::Database::new();
        let family = match db.load_font_file(font_path) {
            Ok(()) => db
                .faces()
                .next()
                .and_then(|face| face.families.first().map(|(name, _)| name.clone())),
            Err(error) => {
                warn!(
                    path = %font_path.display(),
                    %error,
                    "board font unavailable, falling back to system fonts"
                );
                None
            }
        };
        if family.is_none() {
            db.load_system_fonts();
        }
        let font_system = FontSystem::new_with_locale_and_db("zh-CN".to_string(), db);

        Ok(Self {
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            family,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill an axis-aligned rectangle with a solid color.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Draw a single line of text with its top-left corner at (x, y).
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        if text.is_empty() {
            return;
        }

        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);

        let attrs = match self.family.as_deref() {
            Some(name) => Attrs::new().family(Family::Name(name)),
            None => Attrs::new(),
        };
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let rgba = color.to_color_u8();
        let text_color =
            cosmic_text::Color::rgba(rgba.red(), rgba.green(), rgba.blue(), rgba.alpha());

        let pixmap = &mut self.pixmap;
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |gx, gy, gw, gh, glyph_color| {
                let alpha = glyph_color.a();
                if alpha == 0 {
                    return;
                }
                for dy in 0..gh as i32 {
                    for dx in 0..gw as i32 {
                        blend_pixel(
                            pixmap,
                            x as i32 + gx + dx,
                            y as i32 + gy + dy,
                            glyph_color.r(),
                            glyph_color.g(),
                            glyph_color.b(),
                            alpha,
                        );
                    }
                }
            },
        );
    }

    /// Composite an RGBA image at (dest_x, dest_y), 1:1, alpha-blended.
    pub fn draw_image(&mut self, rgba: &[u8], width: u32, height: u32, dest_x: i32, dest_y: i32) {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        for sy in 0..height {
            for sx in 0..width {
                let idx = ((sy * width + sx) * 4) as usize;
                blend_pixel(
                    &mut self.pixmap,
                    dest_x + sx as i32,
                    dest_y + sy as i32,
                    rgba[idx],
                    rgba[idx + 1],
                    rgba[idx + 2],
                    rgba[idx + 3],
                );
            }
        }
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|error| RenderError::Encode(error.to_string()))
    }
}

/// Source-over blend of one straight-alpha pixel onto the premultiplied
/// pixmap. Out-of-bounds coordinates are skipped, so glyphs and icons may
/// safely overhang the canvas edge.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
    if a == 0 || x < 0 || y < 0 || x >= pixmap.width() as i32 || y >= pixmap.height() as i32 {
        return;
    }
    let index = (y as u32 * pixmap.width() + x as u32) as usize;
    let dst = pixmap.pixels()[index];

    let sa = a as u32;
    let inv = 255 - sa;
    let nr = (r as u32 * sa / 255) + dst.red() as u32 * inv / 255;
    let ng = (g as u32 * sa / 255) + dst.green() as u32 * inv / 255;
    let nb = (b as u32 * sa / 255) + dst.blue() as u32 * inv / 255;
    let na = sa + dst.alpha() as u32 * inv / 255;

    let na = na.min(255) as u8;
    if let Some(pixel) = PremultipliedColorU8::from_rgba(
        (nr as u8).min(na),
        (ng as u8).min(na),
        (nb as u8).min(na),
        na,
    ) {
        pixmap.pixels_mut()[index] = pixel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(width: u32, height: u32) -> Renderer {
        // Nonexistent font path: exercises the system-font fallback
        Renderer::new(
            width,
            height,
            Color::from_rgba8(30, 33, 36, 255),
            Path::new("/nonexistent/font.otf"),
        )
        .unwrap()
    }

    #[test]
    fn zero_canvas_is_an_error() {
        let result = Renderer::new(
            0,
            10,
            Color::from_rgba8(0, 0, 0, 255),
            Path::new("/nonexistent/font.otf"),
        );
        assert!(matches!(
            result,
            Err(RenderError::Canvas {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn fill_rect_writes_the_region() {
        let mut canvas = renderer(10, 10);
        canvas.fill_rect(2.0, 2.0, 4.0, 4.0, Color::from_rgba8(255, 0, 0, 255));

        let pixel = canvas.pixmap.pixels()[3 * 10 + 3];
        assert_eq!(pixel.red(), 255);
        assert_eq!(pixel.green(), 0);

        // Outside the rect keeps the background
        let outside = canvas.pixmap.pixels()[0];
        assert_eq!(outside.red(), 30);
    }

    #[test]
    fn draw_image_blends_and_clips() {
        let mut canvas = renderer(4, 4);
        // 2x2 image: opaque white, transparent, half-red, opaque green
        let rgba = [
            255, 255, 255, 255, //
            0, 0, 0, 0, //
            255, 0, 0, 128, //
            0, 255, 0, 255,
        ];
        canvas.draw_image(&rgba, 2, 2, 3, 3); // only the top-left pixel lands

        let pixel = canvas.pixmap.pixels()[3 * 4 + 3];
        assert_eq!(pixel.red(), 255);

        // Fully off-canvas placement must be a no-op
        canvas.draw_image(&rgba, 2, 2, 10, 10);
    }

    #[test]
    fn transparent_source_leaves_destination() {
        let mut canvas = renderer(2, 2);
        let before = canvas.pixmap.pixels()[0];
        canvas.draw_image(&[0, 0, 0, 0], 1, 1, 0, 0);
        assert_eq!(canvas.pixmap.pixels()[0], before);
    }

    #[test]
    fn encode_png_produces_signature() {
        let canvas = renderer(8, 8);
        let bytes = canvas.encode_png().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn draw_text_without_fonts_does_not_panic() {
        let mut canvas = renderer(100, 40);
        canvas.draw_text("53.2%", 5.0, 5.0, 22.0, Color::from_rgba8(255, 255, 255, 255));
    }
}
