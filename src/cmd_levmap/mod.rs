//! Subcommand modules for the `levmap` binary.

pub mod map;
