//! 列表视图投影
//!
//! `TaskListView` is what both front ends draw: the terminal UI feeds it to
//! ratatui widgets, the one-shot commands print `plain_lines()`.

use crate::client::TaskListState;
use crate::model::Task;

/// 集合为空时的占位文字
pub const EMPTY_PLACEHOLDER: &str = "No hay tareas, añadir tareas";
/// 输入框占位文字
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";
pub const TITLE: &str = "todos";

/// 当前状态的只读投影
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListView<'a> {
    pub tasks: &'a [Task],
    pub draft: &'a str,
    pub loading: bool,
    /// 集合为空时为 `Some(EMPTY_PLACEHOLDER)`
    pub placeholder: Option<&'static str>,
    /// 集合中的任务数（含已完成）
    pub remaining: usize,
}

impl<'a> TaskListView<'a> {
    pub fn project(state: &'a TaskListState) -> Self {
        let tasks = state.tasks.as_slice();
        Self {
            tasks,
            draft: &state.draft,
            loading: state.loading,
            placeholder: tasks.is_empty().then_some(EMPTY_PLACEHOLDER),
            remaining: tasks.len(),
        }
    }

    /// "N items left" / "1 item left"
    pub fn items_left(&self) -> String {
        items_left(self.remaining)
    }

    /// 纯文本渲染（命令行输出用）
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.tasks.len() + 2);
        match self.placeholder {
            Some(placeholder) => lines.push(placeholder.to_string()),
            None => {
                for task in self.tasks {
                    lines.push(format!(
                        "{} {}  (#{})",
                        checkbox(task.is_done),
                        task.label,
                        task.id
                    ));
                }
            }
        }
        lines.push(String::new());
        lines.push(self.items_left());
        lines
    }
}

pub fn items_left(n: usize) -> String {
    format!("{} item{} left", n, if n == 1 { "" } else { "s" })
}

pub fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;

    fn task(id: i64, label: &str, is_done: bool) -> Task {
        Task {
            id: TaskId::Int(id),
            label: label.to_string(),
            is_done,
        }
    }

    fn state(tasks: Vec<Task>) -> TaskListState {
        TaskListState {
            tasks,
            ..TaskListState::default()
        }
    }

    #[test]
    fn test_empty_collection() {
        let state = state(vec![]);
        let view = TaskListView::project(&state);
        assert_eq!(view.placeholder, Some(EMPTY_PLACEHOLDER));
        assert_eq!(view.remaining, 0);
        assert_eq!(view.items_left(), "0 items left");
        assert_eq!(view.plain_lines()[0], EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_singular_and_plural() {
        let state1 = state(vec![task(1, "a", false)]);
        assert_eq!(TaskListView::project(&state1).items_left(), "1 item left");

        let state3 = state(vec![task(1, "a", false), task(2, "b", false), task(3, "c", false)]);
        let view = TaskListView::project(&state3);
        assert_eq!(view.placeholder, None);
        assert_eq!(view.items_left(), "3 items left");
    }

    #[test]
    fn test_done_tasks_still_count() {
        let state = state(vec![task(1, "a", true), task(2, "b", false)]);
        let view = TaskListView::project(&state);
        assert_eq!(view.remaining, 2);
        assert_eq!(view.items_left(), "2 items left");
    }

    #[test]
    fn test_plain_lines() {
        let state = state(vec![task(1, "Buy milk", false), task(2, "Walk", true)]);
        let lines = TaskListView::project(&state).plain_lines();
        assert_eq!(lines[0], "[ ] Buy milk  (#1)");
        assert_eq!(lines[1], "[x] Walk  (#2)");
        assert_eq!(lines.last().unwrap(), "2 items left");
    }
}
