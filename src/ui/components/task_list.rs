use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;
use crate::view::checkbox;

const COLUMN_SPACING: u16 = 1;

const WIDTHS: [Constraint; 4] = [
    Constraint::Length(2), // 选择器
    Constraint::Length(3), // 勾选框
    Constraint::Fill(1),   // label
    Constraint::Length(3), // 删除按钮
];

/// 渲染任务列表，并记录行与删除按钮的点击区域
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let (check_style, label_style) = if task.is_done {
                (
                    Style::default().fg(colors.done),
                    Style::default()
                        .fg(colors.muted)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (
                    Style::default().fg(colors.muted),
                    Style::default().fg(colors.text),
                )
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(checkbox(task.is_done)).style(check_style),
                Cell::from(task.label.clone()).style(label_style),
                Cell::from(" ✖").style(Style::default().fg(colors.delete)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);

    let table = Table::new(rows, WIDTHS)
        .column_spacing(COLUMN_SPACING)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    let mut table_state = TableState::default();
    table_state.select(selected_index);
    frame.render_stateful_widget(table, area, &mut table_state);

    record_click_areas(inner, tasks.len(), table_state.offset(), click_areas);
}

/// 可见行 i 位于 inner.y + (i - offset)
fn record_click_areas(inner: Rect, len: usize, offset: usize, click_areas: &mut ClickAreas) {
    click_areas.list_area = Some(inner);

    let visible = (inner.height as usize).min(len.saturating_sub(offset));
    for line in 0..visible {
        let index = offset + line;
        let row = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
        let cells = Layout::horizontal(WIDTHS)
            .spacing(COLUMN_SPACING)
            .split(row);

        click_areas.task_rows.push((row, index));
        click_areas.delete_buttons.push((cells[3], index));
    }
}
