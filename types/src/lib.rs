//! Shared data types for the armory hero statistics board.
//!
//! Everything that crosses a crate boundary lives here: the axis enums a
//! resolved query is made of, the upstream hero record, the table spec the
//! renderer consumes, and the number formatting used on boards.

pub mod formatting;
mod game;
mod record;
mod table;

pub use game::{GameMode, RankFilter, RankTier, Role, SortKey};
pub use record::HeroRecord;
pub use table::{TableRow, TableSpec};
