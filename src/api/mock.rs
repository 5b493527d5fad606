//! 内存中的 `TodoApi`，供测试使用

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{TodoApi, UserStatus};
use crate::error::{Result, TodoError};
use crate::model::{NewTask, Task, TaskId};

/// 内存中的远端集合
#[derive(Default)]
pub(crate) struct MockApi {
    pub(crate) remote: RefCell<Vec<Task>>,
    pub(crate) next_id: Cell<i64>,
    pub(crate) user_exists: Cell<bool>,
    /// 这些操作返回错误
    pub(crate) failing: RefCell<Vec<&'static str>>,
    pub(crate) calls: RefCell<Vec<&'static str>>,
}

impl MockApi {
    pub(crate) fn with_tasks(labels: &[&str]) -> Self {
        let api = MockApi::default();
        for label in labels {
            let id = api.bump_id();
            api.remote.borrow_mut().push(Task {
                id: TaskId::Int(id),
                label: label.to_string(),
                is_done: false,
            });
        }
        api
    }

    pub(crate) fn bump_id(&self) -> i64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    pub(crate) fn fail(&self, op: &'static str) {
        self.failing.borrow_mut().push(op);
    }

    pub(crate) fn enter(&self, op: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(op);
        if self.failing.borrow().contains(&op) {
            return Err(TodoError::Status {
                code: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl TodoApi for Rc<MockApi> {
    fn ensure_user(&self) -> Result<UserStatus> {
        self.enter("ensure_user")?;
        if self.user_exists.replace(true) {
            Ok(UserStatus::AlreadyExists)
        } else {
            Ok(UserStatus::Created)
        }
    }

    fn fetch_tasks(&self) -> Result<Vec<Task>> {
        self.enter("fetch")?;
        Ok(self.remote.borrow().clone())
    }

    fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.enter("create")?;
        let created = Task {
            id: TaskId::Int(self.bump_id()),
            label: task.label.clone(),
            is_done: task.is_done,
        };
        self.remote.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_task(&self, id: &TaskId, task: &NewTask) -> Result<Task> {
        self.enter("update")?;
        let updated = Task {
            id: id.clone(),
            label: task.label.clone(),
            is_done: task.is_done,
        };
        for slot in self.remote.borrow_mut().iter_mut().filter(|t| &t.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    fn delete_task(&self, id: &TaskId) -> Result<()> {
        self.enter("delete")?;
        self.remote.borrow_mut().retain(|t| &t.id != id);
        Ok(())
    }
}
