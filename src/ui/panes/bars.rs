//! Bar chart of the displayed elements
//!
//! One bar per element while they fit.  When the pane has fewer columns than
//! elements, neighbouring elements share a column: it shows the tallest key of
//! its group in the colour of the group's most urgent class, so an element
//! being compared or written is never off screen.

use crate::generator::MAX_KEY;
use crate::model::{ClassType, Element};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

/// Color for an element's class
pub fn class_color(class: ClassType) -> Color {
    match class {
        ClassType::Normal => DEFAULT_THEME.bar_normal,
        ClassType::Current => DEFAULT_THEME.bar_current,
        ClassType::Done => DEFAULT_THEME.bar_done,
    }
}

/// Which class wins when elements share a column
fn class_rank(class: ClassType) -> u8 {
    match class {
        ClassType::Normal => 0,
        ClassType::Done => 1,
        ClassType::Current => 2,
    }
}

/// Width and gap that fit `count` bars into `width` columns.
/// `count` must not exceed `width`; see [`bucket_elements`].
pub fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let per_bar = (width as usize / count).max(1);
    if per_bar >= 3 {
        ((per_bar - 1) as u16, 1)
    } else {
        (per_bar as u16, 0)
    }
}

/// Fold `elements` into at most `columns` bars.
///
/// Column `c` covers indices `c * len / columns .. (c + 1) * len / columns`,
/// so every element lands in exactly one column and no column is empty.
pub fn bucket_elements(elements: &[Element], columns: usize) -> Vec<Element> {
    if columns == 0 || elements.len() <= columns {
        return elements.to_vec();
    }
    let len = elements.len();
    (0..columns)
        .map(|c| {
            let group = &elements[c * len / columns..(c + 1) * len / columns];
            group.iter().fold(Element::new(0), |acc, e| Element {
                key: acc.key.max(e.key),
                class: if class_rank(e.class) > class_rank(acc.class) {
                    e.class
                } else {
                    acc.class
                },
            })
        })
        .collect()
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, elements: &[Element], is_running: bool) {
    let border_style = if is_running {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Sequence ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if elements.is_empty() {
        let paragraph = Paragraph::new("(empty sequence)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2); // borders
    let columns = bucket_elements(elements, inner_width as usize);
    let (bar_width, bar_gap) = bar_layout(inner_width, columns.len());

    let bars: Vec<Bar> = columns
        .iter()
        .map(|e| {
            Bar::default()
                .value(e.key as u64)
                .text_value(String::new())
                .style(Style::default().fg(class_color(e.class)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(MAX_KEY as u64)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(elements: &[Element], width: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, 20)).unwrap();
        terminal
            .draw(|f| render_bars_pane(f, f.area(), elements, false))
            .unwrap();
        terminal
    }

    /// Cells in `row` drawn in `color`
    fn cells_in(terminal: &Terminal<TestBackend>, row: u16, color: Color) -> usize {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| &buffer.content[buffer.index_of(x, row)])
            .filter(|cell| cell.fg == color && cell.symbol() != " ")
            .count()
    }

    fn done(len: usize) -> Vec<Element> {
        (0..len)
            .map(|_| Element {
                key: MAX_KEY,
                class: ClassType::Done,
            })
            .collect()
    }

    #[test]
    fn test_bar_layout() {
        assert_eq!(bar_layout(100, 10), (9, 1));
        assert_eq!(bar_layout(100, 50), (2, 0));
        assert_eq!(bar_layout(78, 78), (1, 0));
        assert_eq!(bar_layout(40, 0), (1, 0));
    }

    #[test]
    fn test_bucket_covers_every_element() {
        let elements: Vec<Element> = (1..=100).map(Element::new).collect();
        let columns = bucket_elements(&elements, 78);
        assert_eq!(columns.len(), 78);
        assert_eq!(columns.last().map(|e| e.key), Some(100));
        assert_eq!(bucket_elements(&elements, 100).len(), 100);
        assert_eq!(bucket_elements(&elements[..10], 78).len(), 10);
    }

    #[test]
    fn test_bucket_prefers_current_over_done() {
        let mut elements = done(4);
        elements[1].class = ClassType::Current;
        elements[2].class = ClassType::Normal;
        let columns = bucket_elements(&elements, 2);
        assert_eq!(columns[0].class, ClassType::Current);
        assert_eq!(columns[1].class, ClassType::Done);
    }

    #[test]
    fn test_every_column_drawn_when_narrower_than_sequence() {
        let terminal = draw(&done(100), 80);
        assert_eq!(cells_in(&terminal, 10, DEFAULT_THEME.bar_done), 78);
    }

    #[test]
    fn test_current_element_visible_at_right_edge() {
        let mut elements = done(100);
        elements[99].class = ClassType::Current;
        let terminal = draw(&elements, 80);
        assert_eq!(cells_in(&terminal, 10, DEFAULT_THEME.bar_current), 1);
        assert_eq!(cells_in(&terminal, 10, DEFAULT_THEME.bar_done), 77);
    }

    #[test]
    fn test_wide_pane_draws_one_bar_per_element() {
        let terminal = draw(&done(10), 102);
        // bars are 9 wide with a 1 column gap
        assert_eq!(cells_in(&terminal, 10, DEFAULT_THEME.bar_done), 90);
    }
}
