//! UI primitives for the stock CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, color styles, symbols
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, short ids)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, receipt, simple_table,
    table, Column,
};

pub use format::{or_dash, short_id, single_line, truncate};
