//! Core domain types for Word Scramble
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear set-theoretic properties.

mod letters;
mod rejection;
mod word;

pub use letters::{LetterCounts, is_possible};
pub use rejection::{Rejection, ValidationError};
pub use word::{BaseWord, WordError, capitalize};
