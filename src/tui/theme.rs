//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

use crate::types::{TicketPriority, TicketStatus};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_open: Color,
    pub status_closed: Color,

    // Priority colors
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Yellow,
            status_closed: Color::Green,

            priority_high: Color::Red,
            priority_medium: Color::Yellow,
            priority_low: Color::Blue,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::Closed => self.status_closed,
        }
    }

    /// Get the color for a ticket priority
    pub fn priority_color(&self, priority: TicketPriority) -> Color {
        match priority {
            TicketPriority::High => self.priority_high,
            TicketPriority::Medium => self.priority_medium,
            TicketPriority::Low => self.priority_low,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
