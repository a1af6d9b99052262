//! Word lists for the daily puzzle
//!
//! Provides embedded word lists compiled into the binary, a file loader for
//! custom lists, and the catalog the game looks words up in.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{Catalog, CatalogError};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};
