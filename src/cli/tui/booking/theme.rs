use ratatui::style::{Color, Modifier, Style};

use crate::booking::Package;

/// Consistent theme for the TUI
pub struct Theme {
    pub brand: Style,
    pub focused: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
    pub label: Style,
    pub modal_border: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label: Style::default()
                .fg(Color::White),
            modal_border: Style::default()
                .fg(Color::Cyan),
            help_bar: Style::default()
                .bg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Accent color for a package card
    pub fn package_color(&self, package: Package) -> Color {
        match package {
            Package::Mini => Color::LightBlue,
            Package::Classic => Color::Green,
            Package::Mega => Color::Magenta,
            Package::Royal => Color::Yellow,
        }
    }

    /// Marker for a step in the progress indicator
    pub fn step_marker(index: usize, current: usize) -> &'static str {
        if index < current {
            "✓"
        } else if index == current {
            "●"
        } else {
            "○"
        }
    }
}
