use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部栏：剩余数量 + 快捷键提示
pub fn render(frame: &mut Frame, area: Rect, items_left: &str, has_items: bool, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count_width = items_left.chars().count() as u16 + 2;
    let [count_area, shortcuts_area] =
        Layout::horizontal([Constraint::Length(count_width), Constraint::Fill(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", items_left),
            Style::default().fg(colors.muted),
        )),
        count_area,
    );

    let shortcuts = get_shortcuts(has_items);
    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Right),
        shortcuts_area,
    );
}

fn get_shortcuts(has_items: bool) -> Vec<(&'static str, &'static str)> {
    if has_items {
        vec![
            ("Enter", "add"),
            ("↑↓", "select"),
            ("Del", "delete"),
            ("^T", "done"),
            ("^R", "refresh"),
            ("Esc", "quit"),
        ]
    } else {
        vec![("Enter", "add"), ("^R", "refresh"), ("Esc", "quit")]
    }
}
