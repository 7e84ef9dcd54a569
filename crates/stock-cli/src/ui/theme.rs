//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Separator between the title and the command in headers.
pub const TITLE_SEPARATOR: SymbolPair = SymbolPair::new("-", "\u{00B7}");

/// Horizontal rule used by dividers.
pub const RULE: SymbolPair = SymbolPair::new("-", "\u{2500}");

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Warn => "[\u{26A0}]", // [⚠]
            Self::Err => "[\u{2717}]",  // [✗]
            Self::Info => "[\u{2139}]", // [ℹ]
        }
    }

    /// Color used when rendering the badge.
    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Warn => styles::warning(),
            Self::Err => styles::error(),
            Self::Info => styles::info(),
        }
    }
}

/// Named styles shared by the renderers.
pub mod styles {
    use owo_colors::Style;

    /// Bright/bold text (for titles and values)
    pub fn bold() -> Style {
        Style::new().bold()
    }

    /// Dim text (for labels, metadata)
    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` to `text` when color output is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Warn.text(), "[WARN]");
        assert_eq!(Badge::Err.text(), "[ERR]");
        assert_eq!(Badge::Info.text(), "[INFO]");
    }

    #[test]
    fn test_badge_display_ascii() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_badge_display_unicode() {
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
    }

    #[test]
    fn test_symbol_pair() {
        assert_eq!(TITLE_SEPARATOR.get(false), "-");
        assert_eq!(TITLE_SEPARATOR.get(true), "\u{00B7}");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("Stock", styles::bold(), false), "Stock");
    }

    #[test]
    fn test_styled_with_color_adds_escapes() {
        let out = styled("Stock", styles::bold(), true);
        assert!(out.contains("Stock"));
        assert!(out.contains("\x1b["));
    }
}
