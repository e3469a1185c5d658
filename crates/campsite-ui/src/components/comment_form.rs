//! Comment form modal

use campsite_core::comment::{CommentForm, Field};
use ratatui::{prelude::*, widgets::*};

use crate::layout::centered_rect;
use crate::theme::Theme;

/// Draw the modal over `area`; `focus` is the field receiving keys
pub fn render_comment_form(frame: &mut Frame, area: Rect, form: &CommentForm, focus: Field, theme: &Theme) {
    let modal = centered_rect(70, 80, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title("Submit Comment")
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let draft = form.draft();
    let rating = if draft.rating.is_selected() {
        format!("{} {}", draft.rating, draft.rating.stars())
    } else {
        "Select...".to_string()
    };

    render_field(frame, rows[0], rows[1], form, Field::Rating, &rating, focus, theme);
    render_field(frame, rows[2], rows[3], form, Field::Author, &draft.author, focus, theme);
    render_field(frame, rows[4], rows[5], form, Field::Text, &draft.text, focus, theme);

    frame.render_widget(
        Paragraph::new("Tab: next field | ←/→: rating | Enter: submit | Esc: cancel")
            .style(theme.muted_style()),
        rows[6],
    );

    if focus != Field::Rating {
        let (input, value) = if focus == Field::Author {
            (rows[2], draft.author.as_str())
        } else {
            (rows[4], draft.text.as_str())
        };
        let width = value.chars().count() as u16;
        let x = input
            .x
            .saturating_add(1 + width)
            .min(input.right().saturating_sub(2));
        frame.set_cursor_position((x, input.y + 1));
    }
}

#[allow(clippy::too_many_arguments)]
fn render_field(
    frame: &mut Frame,
    input: Rect,
    error_line: Rect,
    form: &CommentForm,
    field: Field,
    value: &str,
    focus: Field,
    theme: &Theme,
) {
    let errors = form.visible_errors(field);
    let border = if !errors.is_empty() {
        theme.error_style()
    } else {
        theme.border_style(focus == field)
    };

    frame.render_widget(
        Paragraph::new(value.to_string())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(field.label())
                    .borders(Borders::ALL)
                    .border_style(border),
            ),
        input,
    );

    if !errors.is_empty() {
        frame.render_widget(
            Paragraph::new(errors.join(", ")).style(theme.error_style()),
            error_line,
        );
    }
}
