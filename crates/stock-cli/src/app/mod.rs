//! Application-level utilities for the stock CLI.
//!
//! - Path resolution for the config file and the store
//! - The per-invocation `AppContext`
//! - Timezone-aware timestamps

mod clock;
mod context;
mod resolver;

pub use clock::parse_timezone;
pub use context::AppContext;
pub use resolver::resolve_config_path;
