//! 应用配置持久化

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{load_toml, save_toml, todos_dir};
use crate::error::{Result, TodoError};

/// 公共演示 API 的默认地址
pub const DEFAULT_BASE_URL: &str = "https://playground.4geeks.com/todo";
/// 默认用户名
pub const DEFAULT_USERNAME: &str = "todos-rs";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 远端集合资源配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_username")]
    pub username: String,
    /// 单次请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: default_username(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// 命令行参数覆盖配置文件
    pub fn with_overrides(mut self, base_url: Option<String>, username: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(name) = username {
            self.username = name;
        }
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(TodoError::config("username cannot be empty"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| TodoError::config(format!("invalid base_url {:?}: {}", self.base_url, e)))?;
        Ok(())
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// trace / debug / info / warn / error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    todos_dir().join("config.toml")
}

/// 加载配置（不存在则返回默认值）
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

/// 从指定路径加载配置；文件缺失时返回默认值，损坏时返回错误
///
/// Callers fall back to `Config::default()` on error and report it once
/// logging is up.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    load_toml(path)
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.username = "alice".to_string();
        config.theme.name = "Nord".to_string();
        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nusername = \"bob\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api.username, "bob");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, TodoError::TomlParse(_)));
        assert_eq!(load_config_from(&path).unwrap_or_default(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let api = ApiConfig::default().with_overrides(None, Some("carol".to_string()));
        assert_eq!(api.username, "carol");
        assert_eq!(api.base_url, DEFAULT_BASE_URL);

        let api = api.with_overrides(Some("http://localhost:9000".to_string()), None);
        assert_eq!(api.base_url, "http://localhost:9000");
        assert_eq!(api.username, "carol");
    }

    #[test]
    fn test_validate() {
        assert!(ApiConfig::default().validate().is_ok());

        let api = ApiConfig::default().with_overrides(None, Some("  ".to_string()));
        assert!(matches!(api.validate(), Err(TodoError::Config(_))));

        let api = ApiConfig::default().with_overrides(Some("not a url".to_string()), None);
        assert!(api.validate().is_err());
    }
}
