pub mod config;

use std::io;
use std::path::{Path, PathBuf};

/// 获取 ~/.todos/ 目录路径
pub fn todos_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".todos")
}

/// 确保 ~/.todos/ 目录存在
pub fn ensure_todos_dir() -> io::Result<PathBuf> {
    let path = todos_dir();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> crate::error::Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> crate::error::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
