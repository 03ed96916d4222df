//! Board color palette.

use tiny_skia::Color;

/// Canvas background.
pub fn background() -> Color {
    Color::from_rgba8(30, 33, 36, 255)
}

/// Header band fill.
pub fn header_band() -> Color {
    Color::from_rgba8(40, 43, 48, 255)
}

/// Shading of every even-indexed body row.
pub fn row_alt() -> Color {
    Color::from_rgba8(35, 38, 41, 255)
}

/// Default cell text.
pub fn text() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

/// Header label text.
pub fn header_text() -> Color {
    Color::from_rgba8(200, 200, 200, 255)
}

/// Title accent.
pub fn accent() -> Color {
    Color::from_rgba8(236, 121, 5, 255)
}

/// Win rate above the "good" threshold.
pub fn win_good() -> Color {
    Color::from_rgba8(100, 255, 100, 255)
}

/// Win rate below the "bad" threshold.
pub fn win_bad() -> Color {
    Color::from_rgba8(255, 100, 100, 255)
}

/// Attribution caption.
pub fn caption() -> Color {
    Color::from_rgba8(100, 100, 100, 255)
}
