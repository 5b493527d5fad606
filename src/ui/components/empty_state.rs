use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染空状态（占位文字 + 提示）
pub fn render(frame: &mut Frame, area: Rect, placeholder: &str, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(placeholder, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Type a task and press ", Style::default().fg(colors.text)),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    // 垂直居中
    let text_height = lines.len() as u16;
    let y_offset = inner_area.height.saturating_sub(text_height) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: text_height.min(inner_area.height),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_area,
    );
}
