//! Output formatting for the CLI.
//!
//! `ConsoleObserver` is subscribed to the stock book by mutating commands and
//! renders what happened; listings use the row builders in `text` directly.

mod json;
mod observer;
mod text;

pub use json::{print_json, summary_json};
pub use observer::ConsoleObserver;
pub use text::{
    inventory_rows, order_rows, totals_lines, INVENTORY_COLUMNS, ORDER_COLUMNS,
};
