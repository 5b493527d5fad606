use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::api::TodoApi;
use crate::app::App;
use crate::ui::click_areas::contains;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events<A: TodoApi>(app: &mut App<A>) -> io::Result<bool> {
    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            // 只处理按下事件
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

fn handle_key<A: TodoApi>(app: &mut App<A>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // 退出
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),

        // 删除选中任务
        KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('d') if ctrl => app.delete_selected(),

        // 切换完成状态
        KeyCode::Char('t') if ctrl => app.toggle_selected(),

        // 重新拉取
        KeyCode::Char('r') if ctrl => app.refresh(),

        // 导航
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),

        // 输入框
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.client.pop_draft_char(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.client.push_draft_char(c)
        }

        _ => {}
    }
}

fn handle_mouse<A: TodoApi>(app: &mut App<A>, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // 删除按钮优先于整行
            if let Some(index) = app.click_areas.delete_button_at(col, row) {
                app.delete_at(index);
            } else if let Some(index) = app.click_areas.task_row_at(col, row) {
                app.select(index);
            }
        }
        MouseEventKind::ScrollDown => {
            if in_list(app, col, row) {
                app.select_next();
            }
        }
        MouseEventKind::ScrollUp => {
            if in_list(app, col, row) {
                app.select_previous();
            }
        }
        _ => {}
    }
}

fn in_list<A: TodoApi>(app: &App<A>, col: u16, row: u16) -> bool {
    app.click_areas
        .list_area
        .is_some_and(|area| contains(&area, col, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::client::TaskListClient;
    use crate::theme::Theme;
    use ratatui::layout::Rect;
    use std::rc::Rc;

    fn app_with(labels: &[&str]) -> (Rc<MockApi>, App<Rc<MockApi>>) {
        let api = Rc::new(MockApi::with_tasks(labels));
        let mut app = App::new(
            TaskListClient::new(Rc::clone(&api)),
            Theme::Dark,
            String::new(),
        );
        app.start();
        (api, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text<A: TodoApi>(app: &mut App<A>, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_enter_adds_task() {
        let (_api, mut app) = app_with(&[]);
        type_text(&mut app, "Buy milkk");
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.client.draft(), "Buy milk");

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.client.tasks().len(), 1);
        assert_eq!(app.client.tasks()[0].label, "Buy milk");
        assert_eq!(app.client.draft(), "");
    }

    #[test]
    fn test_enter_on_blank_draft_is_noop() {
        let (api, mut app) = app_with(&["a"]);
        type_text(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.client.tasks().len(), 1);
        assert_eq!(app.client.draft(), "   ");
        assert!(!api.calls().contains(&"create"));
    }

    #[test]
    fn test_control_keys_do_not_type() {
        let (_api, mut app) = app_with(&["a", "b"]);
        handle_key(&mut app, ctrl('t'));
        assert!(app.client.tasks()[0].is_done);

        handle_key(&mut app, ctrl('d'));
        assert_eq!(app.client.tasks().len(), 1);
        assert_eq!(app.client.draft(), "");
    }

    #[test]
    fn test_q_is_typed_not_quit() {
        let (_api, mut app) = app_with(&[]);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.client.draft(), "q");

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_click_delete_button() {
        let (_api, mut app) = app_with(&["a", "b"]);
        app.click_areas.task_rows.push((Rect::new(0, 5, 40, 1), 0));
        app.click_areas.task_rows.push((Rect::new(0, 6, 40, 1), 1));
        app.click_areas.delete_buttons.push((Rect::new(37, 6, 3, 1), 1));

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse(&mut app, click(3, 6));
        assert_eq!(app.selected, Some(1));

        handle_mouse(&mut app, click(38, 6));
        assert_eq!(app.client.tasks().len(), 1);
        assert_eq!(app.client.tasks()[0].label, "a");
    }
}
