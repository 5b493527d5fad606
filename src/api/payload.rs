//! Response body normalisation
//!
//! The demo API is not consistent about shapes: the collection endpoint may
//! answer with an object (`{"detail": ...}`, `{"msg": ...}`) instead of an
//! array. Nothing leaves this module unless it has the shape the caller
//! asked for.

use serde_json::Value;

use crate::error::{Result, TodoError};
use crate::model::Task;

/// 解析响应文本为 JSON
pub fn parse_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(TodoError::malformed("empty body"));
    }
    serde_json::from_str(text).map_err(|e| TodoError::malformed(e.to_string()))
}

/// 集合响应：只接受数组，其余一律视为空集合
///
/// Array elements that do not decode as a task are dropped.
pub fn decode_collection(value: Value) -> Vec<Task> {
    let Value::Array(items) = value else {
        tracing::warn!("collection payload is not an array, treating as empty: {}", kind(&value));
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Task>(item) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::warn!("skipping malformed task in collection: {}", e);
                None
            }
        })
        .collect()
}

/// 单个任务响应：必须是对象
pub fn decode_task(value: Value) -> Result<Task> {
    if !value.is_object() {
        return Err(TodoError::malformed(format!(
            "expected a task object, got {}",
            kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| TodoError::malformed(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
