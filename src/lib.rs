//! Pairwise Levenshtein distance maps over genome positions.
//!
//! The window compared at each pair of positions shrinks as the positions
//! get closer, so nearby loci are compared at fine resolution and distant
//! ones coarsely. See `libs::tier` for the resolution table.

pub mod libs;

pub use crate::libs::io::{reader, writer};
