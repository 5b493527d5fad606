mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
    Gruvbox,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
            Theme::Gruvbox => "Gruvbox",
        }
    }

    /// 从名称创建主题（用于配置加载），大小写不敏感
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            "dracula" => Theme::Dracula,
            "nord" => Theme::Nord,
            "gruvbox" => Theme::Gruvbox,
            _ => Theme::Auto,
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 选中行背景
    pub bg_secondary: Color,
    /// 标题 "todos"
    pub title: Color,
    /// 高亮色（光标、快捷键等）
    pub highlight: Color,
    pub text: Color,
    /// 次要文字（占位符、计数）
    pub muted: Color,
    pub border: Color,
    /// 已完成任务的勾选框
    pub done: Color,
    /// 删除按钮 ✖
    pub delete: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
        Theme::Gruvbox => gruvbox_colors(),
    }
}
