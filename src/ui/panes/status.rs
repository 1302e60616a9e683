//! Status bar rendering with keybindings and state indicators

use crate::controller::RunState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub state: RunState,
    /// Applied and total moves while running
    pub progress: Option<(usize, usize)>,
    /// Every element is settled
    pub is_done: bool,
    pub is_error: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: state badge, progress and message
    let (badge, badge_bg) = match data.state {
        RunState::Running => (" ▶ RUNNING ", DEFAULT_THEME.secondary),
        RunState::Idle if data.is_error => (" ERROR ", DEFAULT_THEME.error),
        RunState::Idle if data.is_done => (" DONE ", DEFAULT_THEME.success),
        RunState::Idle => (" IDLE ", DEFAULT_THEME.primary),
    };

    let mut left_spans = vec![Span::styled(
        badge,
        Style::default()
            .bg(badge_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some((applied, total)) = data.progress {
        left_spans.push(Span::styled(
            format!(" Move {}/{} ", applied, total),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ));
    }

    left_spans.push(Span::styled(
        " | ",
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(DEFAULT_THEME.comment),
    ));
    left_spans.push(Span::styled(
        format!(" {} ", data.message),
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(if data.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↵ ", key_style),
        Span::styled(" start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" random ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" a/1-5 ", key_style),
        Span::styled(" algorithm ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" size ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" </> ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
