//! Query modules for the zodiac almanac.
//!
//! Each module provides a query struct that borrows from the
//! [`Catalog`](crate::catalog::Catalog) and exposes lookups or generators
//! over its read-only tables.

pub mod compatibility;
pub mod fortunes;
pub mod signs;
pub mod sticks;

pub use compatibility::CompatibilityQuery;
pub use fortunes::{period_label, FortuneQuery};
pub use signs::SignQuery;
pub use sticks::StickQuery;
