use std::env;
use std::fmt;
use std::str::FromStr;

use owo_colors::OwoColorize;

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Automatically detect whether to use colors
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if s.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else {
            anyhow::bail!("Invalid color mode: {s}. Expected one of: always, auto, never")
        }
    }
}

impl ColorMode {
    /// Resolve color mode from CLI flag and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. CLI flag (`--color=always|auto|never`)
    /// 2. `NO_COLOR` environment variable
    /// 3. `TERM=dumb` environment variable
    /// 4. Default (Auto)
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }

        if env::var("NO_COLOR").is_ok() {
            return Self::Never;
        }

        if let Ok(term) = env::var("TERM") {
            if term == "dumb" {
                return Self::Never;
            }
        }

        Self::Auto
    }

    /// Check if colors should be enabled based on the mode and TTY detection
    ///
    /// This checks stderr because that's where status output is sent.
    ///
    /// Uses `supports-color` crate's cached capability detection to respect platform nuances (ANSI support, etc.)
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }

    /// Colorize a full output line in green
    #[must_use]
    pub fn green(self, text: &str) -> String {
        if self.should_colorize() {
            // Green: \x1b[32m
            format!("\x1b[32m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

/// Message style for different types of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// Success message (green ✓)
    Success,
    /// Info/progress message (cyan ℹ)
    Info,
    /// Warning message (yellow ⚠)
    #[allow(dead_code)]
    Warn,
    /// Error message (red ✗)
    Error,
}

impl MessageStyle {
    /// Get the symbol for this message style
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warn => "⚠",
            Self::Error => "✗",
        }
    }

    /// Format a message with this style
    #[allow(clippy::missing_const_for_fn)]
    pub fn format<D: fmt::Display>(self, mode: ColorMode, message: D) -> FormattedMessage<D> {
        FormattedMessage {
            style: self,
            mode,
            message,
        }
    }
}

/// A formatted message with color and symbol
pub struct FormattedMessage<D> {
    style: MessageStyle,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for FormattedMessage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.style.symbol();
        if self.mode.should_colorize() {
            match self.style {
                MessageStyle::Success => {
                    write!(f, "{} {}", symbol.bright_green().bold(), self.message)
                }
                MessageStyle::Info => write!(f, "{} {}", symbol.bright_cyan(), self.message),
                MessageStyle::Warn => write!(f, "{} {}", symbol.bright_yellow(), self.message),
                MessageStyle::Error => write!(f, "{} {}", symbol.bright_red().bold(), self.message),
            }
        } else {
            write!(f, "{} {}", symbol, self.message)
        }
    }
}

/// Format a success message (green ✓)
pub fn success<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Success.format(mode, message)
}

/// Format an info/progress message (cyan ℹ)
pub fn info<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Info.format(mode, message)
}

/// Format a warning message (yellow ⚠)
#[allow(dead_code)]
pub fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Warn.format(mode, message)
}

/// Format an error message (red ✗)
pub fn error<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Error.format(mode, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_cli_always() {
        let mode = ColorMode::resolve(Some(ColorMode::Always));
        assert_eq!(mode, ColorMode::Always);
    }

    #[test]
    fn test_resolve_from_cli_never() {
        let mode = ColorMode::resolve(Some(ColorMode::Never));
        assert_eq!(mode, ColorMode::Never);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("ALWAYS".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("Auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("NeVeR".parse::<ColorMode>().unwrap(), ColorMode::Never);
    }

    #[test]
    fn test_from_str_invalid() {
        let result = "invalid".parse::<ColorMode>();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid color mode"));
    }

    #[test]
    fn test_resolve_no_color_env() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            let mode = ColorMode::resolve(None);
            assert_eq!(mode, ColorMode::Never);
        });
    }

    #[test]
    fn test_resolve_term_dumb() {
        temp_env::with_vars([("TERM", Some("dumb")), ("NO_COLOR", None::<&str>)], || {
            let mode = ColorMode::resolve(None);
            assert_eq!(mode, ColorMode::Never);
        });
    }

    #[test]
    fn test_resolve_cli_overrides_no_color() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            let mode = ColorMode::resolve(Some(ColorMode::Always));
            assert_eq!(mode, ColorMode::Always);
        });
    }

    #[test]
    fn test_resolve_default_auto() {
        temp_env::with_vars([("NO_COLOR", None::<&str>), ("TERM", None::<&str>)], || {
            let mode = ColorMode::resolve(None);
            assert_eq!(mode, ColorMode::Auto);
        });
    }

    #[test]
    fn test_should_colorize_always() {
        assert!(ColorMode::Always.should_colorize());
    }

    #[test]
    fn test_should_colorize_never() {
        assert!(!ColorMode::Never.should_colorize());
    }

    #[test]
    fn test_green_always() {
        let colored = ColorMode::Always.green("RAMA: feature/x");
        assert!(colored.starts_with("\x1b[32m"));
        assert!(colored.ends_with("\x1b[0m"));
        assert!(colored.contains("RAMA: feature/x"));
    }

    #[test]
    fn test_green_never() {
        let colored = ColorMode::Never.green("RAMA: feature/x");
        assert!(!colored.contains('\x1b'));
        assert_eq!(colored, "RAMA: feature/x");
    }

    #[test]
    fn test_success_message_never() {
        let msg = success(ColorMode::Never, "Commit created successfully");
        let output = msg.to_string();
        assert!(!output.contains('\x1b'));
        assert_eq!(output, "✓ Commit created successfully");
    }

    #[test]
    fn test_success_message_always() {
        let msg = success(ColorMode::Always, "Commit created successfully");
        let output = msg.to_string();
        assert!(output.contains('\x1b'));
        assert!(output.contains("Commit created successfully"));
    }

    #[test]
    fn test_info_message_never() {
        let msg = info(ColorMode::Never, "Creating branch: feature/x");
        let output = msg.to_string();
        assert!(!output.contains('\x1b'));
        assert_eq!(output, "ℹ Creating branch: feature/x");
    }

    #[test]
    fn test_error_message_never() {
        let msg = error(ColorMode::Never, "Git command failed");
        let output = msg.to_string();
        assert!(!output.contains('\x1b'));
        assert_eq!(output, "✗ Git command failed");
    }
}
