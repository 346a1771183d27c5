//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, EdgeTrigger, Focus, Statistics, run_tui};
