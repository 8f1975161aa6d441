//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated dictionary from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Bundled pool of base words, one per line
pub const START_WORDS: &str = include_str!("../../data/start.txt");
