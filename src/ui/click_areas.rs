use ratatui::layout::Rect;

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 任务行 (区域, 任务下标)
    pub task_rows: Vec<(Rect, usize)>,
    /// 删除按钮 ✖ (区域, 任务下标)
    pub delete_buttons: Vec<(Rect, usize)>,
    /// 列表区域（滚轮检测）
    pub list_area: Option<Rect>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.task_rows.clear();
        self.delete_buttons.clear();
        self.list_area = None;
    }

    /// 点击位置命中的删除按钮
    pub fn delete_button_at(&self, col: u16, row: u16) -> Option<usize> {
        hit(&self.delete_buttons, col, row)
    }

    /// 点击位置命中的任务行
    pub fn task_row_at(&self, col: u16, row: u16) -> Option<usize> {
        hit(&self.task_rows, col, row)
    }
}

fn hit(areas: &[(Rect, usize)], col: u16, row: u16) -> Option<usize> {
    areas
        .iter()
        .find(|(rect, _)| contains(rect, col, row))
        .map(|(_, index)| *index)
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
