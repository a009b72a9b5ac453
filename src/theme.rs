//! Theme configuration for CLI output
//!
//! ANSI escape codes and themed text wrappers. Colour is switched off when
//! `NO_COLOR` is set or the stream is not a terminal, and forced on by
//! `FORCE_COLOR` (unless it is `0`).

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes for CLI output
pub mod ansi {
    /// Gray color (ANSI 37) - used for most text
    pub const GRAY: &str = "\x1b[37m";
    /// Light green (ANSI 92) - used for accent/headers
    pub const GREEN: &str = "\x1b[92m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Yellow (ANSI 33) - used for warnings
    pub const YELLOW: &str = "\x1b[33m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Decide whether to emit colour for a stream.
///
/// `NO_COLOR` (any non-empty value) wins over `FORCE_COLOR`; otherwise
/// colour follows whether the stream is a terminal.
pub fn color_enabled(no_color: Option<&str>, force_color: Option<&str>, is_tty: bool) -> bool {
    if no_color.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if let Some(force) = force_color {
        if !force.is_empty() && force != "0" {
            return true;
        }
    }
    is_tty
}

fn color_enabled_for(stream: atty::Stream) -> bool {
    let no_color = std::env::var("NO_COLOR").ok();
    let force_color = std::env::var("FORCE_COLOR").ok();
    color_enabled(no_color.as_deref(), force_color.as_deref(), atty::is(stream))
}

/// Colour decision for stdout.
pub fn color_enabled_for_stdout() -> bool {
    color_enabled_for(atty::Stream::Stdout)
}

/// Colour decision for stderr (log output).
pub fn color_enabled_for_stderr() -> bool {
    color_enabled_for(atty::Stream::Stderr)
}

/// Theme for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: &'static str,
    /// Secondary/dimmed text color
    pub text_secondary: &'static str,
    /// Accent color for highlights and headers
    pub accent: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    /// When false every wrapper returns the text unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: ansi::GRAY,
            text_secondary: ansi::DARK_GRAY,
            accent: ansi::GREEN,
            warning: ansi::YELLOW,
            error: ansi::RED,
            success: ansi::GREEN,
            enabled: true,
        }
    }
}

impl Theme {
    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Theme for stdout, with colour decided from the environment.
pub fn current_theme() -> Theme {
    if color_enabled_for_stdout() {
        Theme::default()
    } else {
        Theme::plain()
    }
}
