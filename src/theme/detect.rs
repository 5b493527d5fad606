//! 系统主题检测

use std::process::Command;

/// 返回 `true` 表示深色模式
///
/// macOS 读取 AppleInterfaceStyle；其他系统的终端多为深色背景，直接返回 true。
pub fn detect_system_theme() -> bool {
    if !cfg!(target_os = "macos") {
        return true;
    }

    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}
