use crate::api::TodoApi;
use crate::client::TaskListClient;
use crate::model::TaskId;
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// 全局应用状态（终端界面）
pub struct App<A: TodoApi> {
    /// 是否应该退出
    pub should_quit: bool,
    /// 列表状态与远端同步
    pub client: TaskListClient<A>,
    /// Header 显示的账户信息，如 "bob @ playground.4geeks.com"
    pub account: String,
    /// 当前选中的任务下标
    pub selected: Option<usize>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 每帧渲染时记录的可点击区域
    pub click_areas: ClickAreas,
}

impl<A: TodoApi> App<A> {
    pub fn new(client: TaskListClient<A>, theme: Theme, account: String) -> Self {
        Self {
            should_quit: false,
            client,
            account,
            selected: None,
            theme,
            colors: get_theme_colors(theme),
            last_system_dark: detect_system_theme(),
            click_areas: ClickAreas::default(),
        }
    }

    /// 启动：确保用户存在并加载任务
    pub fn start(&mut self) {
        self.client.initialize();
        self.ensure_selection();
    }

    // ========== Selection ==========

    /// 列表变化后修正选中项
    pub fn ensure_selection(&mut self) {
        let len = self.client.tasks().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            None => Some(0),
            Some(i) => Some(i.min(len - 1)),
        };
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.client.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some((current + 1) % len);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.client.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some(if current == 0 { len - 1 } else { current - 1 });
    }

    pub fn select(&mut self, index: usize) {
        if index < self.client.tasks().len() {
            self.selected = Some(index);
        }
    }

    fn task_id_at(&self, index: usize) -> Option<TaskId> {
        self.client.tasks().get(index).map(|t| t.id.clone())
    }

    // ========== Actions ==========

    /// Enter：提交输入框内容，成功后选中新任务
    pub fn submit(&mut self) {
        if self.client.submit_draft() {
            self.selected = self.client.tasks().len().checked_sub(1);
        }
    }

    pub fn delete_at(&mut self, index: usize) {
        let Some(id) = self.task_id_at(index) else {
            return;
        };
        self.client.delete_task(&id);
        self.ensure_selection();
    }

    pub fn delete_selected(&mut self) {
        if let Some(index) = self.selected {
            self.delete_at(index);
        }
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected.and_then(|i| self.task_id_at(i)) else {
            return;
        };
        self.client.toggle_task(&id);
    }

    pub fn refresh(&mut self) {
        self.client.refresh();
        self.ensure_selection();
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
