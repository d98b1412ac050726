//! Terminal presentation: colors, icons, and the blocks commands print.

pub mod blocks;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
