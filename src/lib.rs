//! Word Scramble
//!
//! A word game: spell as many words as you can from the letters of a randomly
//! chosen base word. Each word must use the base word's letters no more often
//! than they appear, must not repeat an earlier answer, and must be a real word
//! of at least three letters.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_scramble::core::Rejection;
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{GameSession, Submission, WordPool};
//!
//! let mut session = GameSession::new(
//!     WordPool::embedded(),
//!     WordListDictionary::embedded(),
//!     StdRng::seed_from_u64(42),
//! );
//!
//! let base = session.start_round().clone();
//! println!("Spell words from: {base}");
//!
//! let outcome = session.submit(base.text()).unwrap();
//! assert!(outcome.is_accepted());
//! assert_eq!(
//!     session.submit(base.text()).unwrap(),
//!     Submission::Rejected(Rejection::AlreadyUsed)
//! );
//! ```

// Core domain types
pub mod core;

// Spell checking
pub mod dictionary;

// Pool, validator and session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
