//! 主页面：Logo、输入框、任务列表、底部栏

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::api::TodoApi;
use crate::app::App;
use crate::theme::ThemeColors;

use super::components::{empty_state, footer, header, input_box, task_list};

const LOADING_MESSAGE: &str = "Syncing with server…";
const SPINNER: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// 渲染主页面
pub fn render<A: TodoApi>(frame: &mut Frame, app: &mut App<A>) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(input_box::INPUT_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let view = app.client.render();

    header::render(frame, header_area, &app.account, view.tasks.len(), &colors);
    input_box::render(frame, input_area, view.draft, &colors);

    match view.placeholder {
        Some(placeholder) => empty_state::render(frame, list_area, placeholder, &colors),
        None => task_list::render(
            frame,
            list_area,
            view.tasks,
            app.selected,
            &colors,
            &mut app.click_areas,
        ),
    }

    footer::render(
        frame,
        footer_area,
        &view.items_left(),
        !view.tasks.is_empty(),
        &colors,
    );

    if view.loading {
        render_sync_banner(frame, list_area, &colors);
    }
}

/// 加载中的启动画面（由状态回调在阻塞请求前绘制）
pub fn render_loading(frame: &mut Frame, account: &str, colors: &ThemeColors) {
    let area = frame.area();

    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(header::HEADER_HEIGHT), Constraint::Fill(1)])
            .areas(area);
    header::render(frame, header_area, account, 0, colors);

    render_sync_banner(frame, body_area, colors);
}

/// 每 100ms 前进一帧
fn spinner_frame(millis: u128) -> char {
    let frames: Vec<char> = SPINNER.chars().collect();
    frames[(millis / 100) as usize % frames.len()]
}

/// 在 `area` 正中画同步提示框，放不下时不画
fn render_sync_banner(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let text = format!("{} {}", spinner_frame(millis), LOADING_MESSAGE);

    let width = text.chars().count() as u16 + 4;
    if area.width < width || area.height < 3 {
        return;
    }
    let [row] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let [banner] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.text).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.highlight))
                    .style(Style::default().bg(colors.bg)),
            ),
        banner,
    );
}
