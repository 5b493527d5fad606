//! 输入框：当前 draft，空时显示占位文字

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;
use crate::view::INPUT_PLACEHOLDER;

pub const INPUT_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, draft: &str, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight));

    let mut spans = vec![Span::styled(
        " ❯ ",
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    )];
    if draft.is_empty() {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
        spans.push(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(draft, Style::default().fg(colors.text)));
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
