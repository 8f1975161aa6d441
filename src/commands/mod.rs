//! Command implementations

pub mod check;
pub mod hints;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, CheckStep, check_words};
pub use hints::{HintsResult, find_hints, hints_for};
pub use simple::run_simple;
pub use survey::{SurveyEntry, SurveyResult, run_survey};
