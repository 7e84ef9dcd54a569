//! Output mode routing logic.

use crate::helpers::OutputFormat;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document per command, nothing else on stdout
    Json,
    /// Tab-separated rows and `key=value` receipts, stable for scripts
    #[default]
    Plain,
    /// Tables, badges and color (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins over everything. `--format plain` and `TERM=dumb` force
    /// plain. Otherwise a TTY gets pretty output and anything else plain;
    /// `--format table` only asks for the default.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format == Some(OutputFormat::Plain) || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_forces() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        assert_eq!(OutputMode::resolve(false, None, true, true), OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), true, false),
            OutputMode::Pretty
        );
    }

    #[test]
    fn test_pipe_gets_plain() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), false, false),
            OutputMode::Plain
        );
    }
}
