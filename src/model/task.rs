use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 服务端分配的任务 ID
///
/// Integers on the demo API; string identifiers are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for TaskId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<i64>()
            .map(TaskId::Int)
            .unwrap_or_else(|_| TaskId::Text(s.to_string())))
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Int(n)
    }
}

/// 任务数据（服务端返回的形状）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub label: String,
    #[serde(default)]
    pub is_done: bool,
}

/// 创建 / 更新请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub label: String,
    pub is_done: bool,
}

impl NewTask {
    pub fn pending(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_done: false,
        }
    }
}

impl Task {
    /// 翻转完成状态后的请求体
    pub fn toggled(&self) -> NewTask {
        NewTask {
            label: self.label.clone(),
            is_done: !self.is_done,
        }
    }
}
