//! Algorithms layered on top of the history graph's one-step queries.

pub mod lineage;

pub use lineage::{LineageBuilder, ancestors, descendants, last_images};
