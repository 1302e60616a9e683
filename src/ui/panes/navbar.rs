//! Settings bar: algorithm, size and speed

use crate::config::Settings;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navbar.
///
/// Algorithm and size are dimmed while `locked`; speed never is, since it can
/// change mid-run.
pub fn render_navbar(frame: &mut Frame, area: Rect, settings: &Settings, locked: bool) {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let lockable_style = if locked {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    };
    let speed_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);

    let spans = vec![
        Span::styled(" Algorithm ", label_style),
        Span::styled(
            format!("{}. {}", settings.algorithm.number(), settings.algorithm.name()),
            lockable_style,
        ),
        Span::styled("  │  ", label_style),
        Span::styled("Size ", label_style),
        Span::styled(settings.size.to_string(), lockable_style),
        Span::styled("  │  ", label_style),
        Span::styled("Speed ", label_style),
        Span::styled(settings.speed.to_string(), speed_style),
    ];

    let title = if locked {
        Span::styled(
            " SORTTY (locked) ",
            Style::default()
                .fg(Color::Black)
                .bg(DEFAULT_THEME.border_focused),
        )
    } else {
        Span::styled(" SORTTY ", Style::default().fg(DEFAULT_THEME.fg))
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
