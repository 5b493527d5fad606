//! 日志初始化
//!
//! The terminal belongs to the UI, so records go to `~/.todos/todos.log`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;

use crate::storage::{self, config::LogConfig};

/// 解析日志级别，无法识别时回落到 info
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

pub fn log_path() -> PathBuf {
    storage::todos_dir().join("todos.log")
}

/// 安装全局 subscriber；日志文件打不开时不记录日志
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    if let Err(e) = storage::ensure_todos_dir() {
        eprintln!("Logging disabled: {}", e);
        return None;
    }
    let path = log_path();
    init_at(&path, parse_level(&config.level)).then_some(path)
}

fn init_at(path: &Path, level: Level) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {}", path.display(), e);
            return false;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }
}
