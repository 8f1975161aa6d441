//! Word lists for Word Scramble
//!
//! Provides the embedded base-word pool and dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS};
