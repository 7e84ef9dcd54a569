//! Input and parsing helper functions for the CLI.
//!
//! - Number, id, and format parsing (`parsing`)
//! - Confirmation prompts (`input`)

mod input;
mod parsing;

pub use input::confirm_destructive;
pub use parsing::{
    parse_output_format, parse_price, parse_quantity, resolve_entry_id, OutputFormat,
};
