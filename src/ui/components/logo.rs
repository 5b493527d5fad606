use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// ASCII Art Logo - 6 行高
const LOGO: &[&str] = &[
    "████████╗ ██████╗ ██████╗  ██████╗ ███████╗",
    "╚══██╔══╝██╔═══██╗██╔══██╗██╔═══██╗██╔════╝",
    "   ██║   ██║   ██║██║  ██║██║   ██║███████╗",
    "   ██║   ██║   ██║██║  ██║██║   ██║╚════██║",
    "   ██║   ╚██████╔╝██████╔╝╚██████╔╝███████║",
    "   ╚═╝    ╚═════╝ ╚═════╝  ╚═════╝ ╚══════╝",
];

/// Logo 的高度（行数）
pub const LOGO_HEIGHT: u16 = 6;

/// 渲染居中的 Logo；宽度不够时退化为一行标题
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let logo_width = LOGO[0].chars().count() as u16;

    let lines: Vec<Line> = if area.width >= logo_width && area.height >= LOGO_HEIGHT {
        LOGO.iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.title))))
            .collect()
    } else {
        vec![Line::from(Span::styled(
            crate::view::TITLE,
            Style::default()
                .fg(colors.title)
                .add_modifier(Modifier::BOLD),
        ))]
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
