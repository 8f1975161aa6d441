//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, TuiSession, run_tui};
