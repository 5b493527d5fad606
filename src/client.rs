//! 本地列表状态与远端集合的同步
//!
//! `TaskListClient` owns the task collection, the loading flag and the draft
//! input. State only changes after the server acknowledged a call; every
//! failure (transport, HTTP status, malformed body) is logged and leaves the
//! state exactly as it was.

use tracing::{debug, info, warn};

use crate::api::{TodoApi, UserStatus};
use crate::model::{NewTask, Task, TaskId};
use crate::view::TaskListView;

/// 客户端状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListState {
    /// 服务端顺序
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub draft: String,
}

/// 状态变化回调
pub type Observer = Box<dyn FnMut(&TaskListState)>;

pub struct TaskListClient<A: TodoApi> {
    api: A,
    state: TaskListState,
    observers: Vec<Observer>,
}

impl<A: TodoApi> TaskListClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TaskListState::default(),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.state.tasks.iter().find(|t| &t.id == id)
    }

    /// 注册状态变化回调，按注册顺序调用
    pub fn subscribe(&mut self, observer: impl FnMut(&TaskListState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        let state = &self.state;
        for observer in self.observers.iter_mut() {
            observer(state);
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if self.state.loading != loading {
            self.state.loading = loading;
            self.notify();
        }
    }

    pub fn render(&self) -> TaskListView<'_> {
        TaskListView::project(&self.state)
    }

    // ========== Lifecycle ==========

    /// 确保远端用户存在，然后拉取集合
    ///
    /// The fetch runs even when the user step failed. Returns whether the
    /// collection was loaded.
    pub fn initialize(&mut self) -> bool {
        self.set_loading(true);

        match self.api.ensure_user() {
            Ok(UserStatus::Created) => info!("remote user created"),
            Ok(UserStatus::AlreadyExists) => debug!("remote user already exists"),
            Err(e) => warn!("failed to ensure remote user: {}", e),
        }

        let loaded = self.load();
        self.set_loading(false);
        loaded
    }

    /// 重新拉取集合
    pub fn refresh(&mut self) -> bool {
        self.set_loading(true);
        let loaded = self.load();
        self.set_loading(false);
        loaded
    }

    fn load(&mut self) -> bool {
        match self.api.fetch_tasks() {
            Ok(tasks) => {
                info!("loaded {} tasks", tasks.len());
                self.state.tasks = tasks;
                self.notify();
                true
            }
            Err(e) => {
                warn!("failed to fetch tasks: {}", e);
                false
            }
        }
    }

    // ========== Mutations ==========

    /// 创建任务；空白 label 直接忽略，其余原样发送
    pub fn add_task(&mut self, label: &str) -> bool {
        if label.trim().is_empty() {
            return false;
        }

        match self.api.create_task(&NewTask::pending(label)) {
            Ok(task) => {
                info!("created task {} {:?}", task.id, task.label);
                self.state.tasks.push(task);
                self.state.draft.clear();
                self.notify();
                true
            }
            Err(e) => {
                warn!("failed to create task {:?}: {}", label, e);
                false
            }
        }
    }

    /// Enter：提交当前输入
    pub fn submit_draft(&mut self) -> bool {
        let draft = self.state.draft.clone();
        self.add_task(&draft)
    }

    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        match self.api.delete_task(id) {
            Ok(()) => {
                info!("deleted task {}", id);
                self.state.tasks.retain(|t| &t.id != id);
                self.notify();
                true
            }
            Err(e) => {
                warn!("failed to delete task {}: {}", id, e);
                false
            }
        }
    }

    /// 切换完成状态（PUT），成功后原位替换
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let Some(body) = self.task(id).map(Task::toggled) else {
            debug!("toggle ignored, no task {}", id);
            return false;
        };

        match self.api.update_task(id, &body) {
            Ok(updated) => {
                info!("task {} is_done={}", id, updated.is_done);
                if let Some(slot) = self.state.tasks.iter_mut().find(|t| &t.id == id) {
                    *slot = updated;
                }
                self.notify();
                true
            }
            Err(e) => {
                warn!("failed to update task {}: {}", id, e);
                false
            }
        }
    }

    // ========== Draft ==========

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
        self.notify();
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.state.draft.push(c);
        self.notify();
    }

    pub fn pop_draft_char(&mut self) {
        if self.state.draft.pop().is_some() {
            self.notify();
        }
    }
}
