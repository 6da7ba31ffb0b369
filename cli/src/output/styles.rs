//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Debug notes (yellow)
    pub warning: Style,
    /// Methods left disabled (red)
    pub error: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.warning = Style::new().yellow();
        self.error = Style::new().bright_red();
    }
}
