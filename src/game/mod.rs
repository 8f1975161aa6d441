//! Word Scramble game logic
//!
//! The base-word pool, the submission validator and the session that ties
//! them to a round.

mod config;
pub mod pool;
mod session;
pub mod validator;

pub use config::GameConfig;
pub use pool::{FALLBACK_WORD, PoolSource, WordPool, load_pool};
pub use session::{GameSession, LetterUsage, Submission};
pub use validator::{is_original, is_real, validate};
