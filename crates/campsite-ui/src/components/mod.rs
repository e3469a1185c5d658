//! Screen components

mod comment_form;
mod detail;

pub use comment_form::render_comment_form;
pub use detail::render_detail;

use ratatui::{prelude::*, widgets::*};

use crate::app::{AppMode, AppState};
use crate::layout::{centered_rect, ScreenLayout};
use crate::theme::Theme;

/// Draw the whole screen for `state`
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let layout = ScreenLayout::split(frame.area());

    let detail = state.detail_state();
    render_detail(
        frame,
        layout.body,
        &detail,
        state.revealed,
        state.scroll,
        state.ticks,
        theme,
    );
    render_status_bar(frame, layout.status, state);

    if state.form.is_open() {
        render_comment_form(frame, layout.body, &state.form, state.focus, theme);
    }
    if state.mode == AppMode::Help {
        render_help(frame, frame.area(), theme);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode = if state.form.is_open() {
        "COMMENT"
    } else {
        match state.mode {
            AppMode::Normal => "NORMAL",
            AppMode::Help => "HELP",
        }
    };

    let text = state.message.clone().unwrap_or_else(|| {
        let count = state.comments().map(|c| c.len()).unwrap_or(0);
        format!(
            " {} | campsite {} | {} comments | ? help ",
            mode, state.campsite_id, count
        )
    });

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let section = Style::default().fg(theme.rating);
    let text = vec![
        Line::from(Span::styled(
            "campsite-info - Campsite Details",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Detail", section)),
        Line::from("  j/k         Scroll comments"),
        Line::from("  c / Enter   Submit a comment"),
        Line::from("  d           Back to the directory"),
        Line::from("  r           Reload data"),
        Line::from(""),
        Line::from(Span::styled("Comment form", section)),
        Line::from("  Tab/S-Tab   Next/Previous field"),
        Line::from("  ←/→ or 1-5  Choose rating"),
        Line::from("  Enter       Submit"),
        Line::from("  Esc         Cancel"),
        Line::from(""),
        Line::from(Span::styled("Other", section)),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", theme.muted_style())),
    ];

    let help_area = centered_rect(50, 80, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        ),
        help_area,
    );
}
