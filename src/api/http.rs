//! `TodoApi` over HTTP (blocking `ureq` agent)

use std::time::Duration;

use url::Url;

use super::payload::{decode_collection, decode_task, parse_body};
use super::{TodoApi, UserStatus};
use crate::error::{Result, TodoError};
use crate::model::{NewTask, Task, TaskId};
use crate::storage::config::ApiConfig;

const USER_AGENT: &str = concat!("todos-rs/", env!("CARGO_PKG_VERSION"));

/// 远端集合资源的 HTTP 客户端
#[derive(Clone)]
pub struct HttpTodoApi {
    agent: ureq::Agent,
    base: Url,
    username: String,
}

impl HttpTodoApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;

        let base = Url::parse(&config.base_url)
            .map_err(|e| TodoError::config(format!("invalid base_url: {}", e)))?;
        if base.cannot_be_a_base() {
            return Err(TodoError::config(format!(
                "base_url {} cannot carry a path",
                config.base_url
            )));
        }

        let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            agent: builder.build(),
            base,
            username: config.username.trim().to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// 拼接 base URL 与路径段（自动做百分号编码）
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn user_url(&self) -> Url {
        self.endpoint(&["users", &self.username])
    }

    fn collection_url(&self) -> Url {
        self.endpoint(&["todos", &self.username])
    }

    fn task_url(&self, id: &TaskId) -> Url {
        self.endpoint(&["todos", &id.to_string()])
    }
}

/// ureq 错误 → TodoError
fn map_err(err: ureq::Error) -> TodoError {
    match err {
        ureq::Error::Status(code, response) => TodoError::Status {
            code,
            body: response.into_string().unwrap_or_default(),
        },
        ureq::Error::Transport(transport) => TodoError::transport(transport.to_string()),
    }
}

fn read_json(response: ureq::Response) -> Result<serde_json::Value> {
    let text = response
        .into_string()
        .map_err(|e| TodoError::malformed(e.to_string()))?;
    parse_body(&text)
}

impl TodoApi for HttpTodoApi {
    fn ensure_user(&self) -> Result<UserStatus> {
        let url = self.user_url();
        tracing::debug!("POST {}", url);

        // 不带请求体
        match self.agent.post(url.as_str()).call() {
            Ok(_) => Ok(UserStatus::Created),
            // 已存在的用户：400 (demo API) 或 409
            Err(ureq::Error::Status(400 | 409, _)) => Ok(UserStatus::AlreadyExists),
            Err(e) => Err(map_err(e)),
        }
    }

    fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let response = self.agent.get(url.as_str()).call().map_err(map_err)?;
        Ok(decode_collection(read_json(response)?))
    }

    fn create_task(&self, task: &NewTask) -> Result<Task> {
        let url = self.collection_url();
        tracing::debug!("POST {} label={:?}", url, task.label);

        let response = self
            .agent
            .post(url.as_str())
            .send_json(task)
            .map_err(map_err)?;
        decode_task(read_json(response)?)
    }

    fn update_task(&self, id: &TaskId, task: &NewTask) -> Result<Task> {
        let url = self.task_url(id);
        tracing::debug!("PUT {} is_done={}", url, task.is_done);

        let response = self
            .agent
            .put(url.as_str())
            .send_json(task)
            .map_err(map_err)?;
        decode_task(read_json(response)?)
    }

    fn delete_task(&self, id: &TaskId) -> Result<()> {
        let url = self.task_url(id);
        tracing::debug!("DELETE {}", url);

        self.agent.delete(url.as_str()).call().map_err(map_err)?;
        Ok(())
    }
}
