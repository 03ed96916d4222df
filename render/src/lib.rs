//! Offscreen board rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     table                           │
//! │        fixed-layout board rasterization             │
//! ├─────────────────────────────────────────────────────┤
//! │                     icons                           │
//! │        memoized 40×40 hero icon loading             │
//! ├─────────────────────────────────────────────────────┤
//! │                    renderer                         │
//! │             tiny-skia + cosmic-text                 │
//! │               (drawing primitives)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Output is always an in-memory PNG byte buffer; nothing touches disk.

pub mod colors;
pub mod icons;
pub mod renderer;
pub mod table;

// Re-export commonly used types
pub use icons::{HeroIcon, ICON_SIZE, IconCache};
pub use renderer::{RenderError, Renderer};
pub use table::render_table;

// Re-export tiny_skia Color for external use
pub use tiny_skia::Color;
