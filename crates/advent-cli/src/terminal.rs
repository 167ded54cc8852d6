//! Terminal styling and color detection.

use std::io::IsTerminal;

/// ANSI escape codes used by the CLI.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for PASS badges.
    pub const TAG_PASS: &str = "\x1b[1;7;32m";
    /// Bold reverse red for FAIL badges.
    pub const TAG_FAIL: &str = "\x1b[1;7;31m";
    /// Bright bold white for puzzle identifiers.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for descriptions and timings.
    pub const GRAY: &str = "\x1b[90m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_pass: &'static str,
    pub tag_fail: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_pass: colors::TAG_PASS,
            tag_fail: colors::TAG_FAIL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_pass: "",
            tag_fail: "",
            white_bold: "",
            gray: "",
            green: "",
            red: "",
        }
    }

    /// `colored()` when stdout supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if stdout should receive ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`, and never
/// colors output that is not a terminal.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_is_empty() {
        let palette = ColorPalette::plain();
        assert!(palette.reset.is_empty());
        assert!(palette.tag_fail.is_empty());
    }

    #[test]
    fn colored_palette_uses_ansi() {
        let palette = ColorPalette::colored();
        assert_eq!(palette.tag_pass, colors::TAG_PASS);
        assert!(palette.red.starts_with("\x1b["));
    }
}
