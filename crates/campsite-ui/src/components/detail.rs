//! Detail screen rendering

use campsite_core::view::{Breadcrumb, CampsiteCard, CommentLine, DetailContent, DetailState};
use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Draw whichever detail state was selected
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    state: &DetailState,
    revealed: usize,
    scroll: u16,
    ticks: u64,
    theme: &Theme,
) {
    match state {
        DetailState::Loading => render_loading(frame, area, ticks, theme),
        DetailState::Error(message) => render_error(frame, area, message, theme),
        DetailState::Content(content) => render_content(frame, area, content, revealed, scroll, theme),
        DetailState::Empty => frame.render_widget(Block::default(), area),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, ticks: u64, theme: &Theme) {
    let spinner = SPINNER[(ticks % SPINNER.len() as u64) as usize];
    let text = Paragraph::new(format!("{} Loading...", spinner))
        .style(theme.muted_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false)));
    frame.render_widget(text, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = Paragraph::new(message.to_string())
        .style(theme.error_style())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .border_style(theme.error_style()),
        );
    frame.render_widget(text, area);
}

fn render_content(
    frame: &mut Frame,
    area: Rect,
    content: &DetailContent,
    revealed: usize,
    scroll: u16,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(breadcrumb_line(&content.breadcrumb, theme)), rows[0]);
    frame.render_widget(
        Paragraph::new(content.heading.as_str()).style(theme.heading_style()),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new("─".repeat(rows[2].width as usize)).style(theme.muted_style()),
        rows[2],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[3]);

    render_card(frame, columns[0], &content.card, theme);
    render_comments(frame, columns[1], content.comments.as_deref(), revealed, scroll, theme);
}

fn breadcrumb_line<'a>(breadcrumb: &'a Breadcrumb, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, item) in breadcrumb.items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" / ", theme.muted_style()));
        }
        let style = if item.active {
            Style::default()
        } else {
            Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED)
        };
        spans.push(Span::styled(item.label.as_str(), style));
    }
    Line::from(spans)
}

fn render_card(frame: &mut Frame, area: Rect, card: &CampsiteCard, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            format!("[image: {}]", card.image_alt),
            theme.muted_style(),
        )),
        Line::from(Span::styled(card.image_url.as_str(), theme.muted_style())),
        Line::from(""),
        Line::from(card.description.as_str()),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false))),
        area,
    );
}

fn render_comments(
    frame: &mut Frame,
    area: Rect,
    comments: Option<&[CommentLine]>,
    revealed: usize,
    scroll: u16,
    theme: &Theme,
) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(comments) = comments {
        for comment in comments.iter().take(revealed) {
            lines.push(Line::from(comment.text.as_str()));
            lines.push(Line::from(vec![
                Span::styled(comment.rating.stars(), Style::default().fg(theme.rating)),
                Span::raw(" "),
                Span::styled(comment.byline.as_str(), theme.muted_style()),
            ]));
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(Span::styled(
        "[c] Submit Comment",
        Style::default().fg(theme.focus_border),
    )));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    if comments.is_some() {
        block = block.title("Comments");
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}
