//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for focused elements
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocus_border: Color,
    /// Breadcrumb link color
    pub link: Color,
    /// Heading color
    pub heading: Color,
    /// Validation and load error color
    pub error: Color,
    /// Star rating color
    pub rating: Color,
    /// Secondary text color
    pub muted: Color,
}

impl Theme {
    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.focus_border } else { self.unfocus_border };
        Style::default().fg(color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            unfocus_border: Color::DarkGray,
            link: Color::Blue,
            heading: Color::White,
            error: Color::Red,
            rating: Color::Yellow,
            muted: Color::DarkGray,
        }
    }
}
