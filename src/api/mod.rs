//! Remote collection resource
//!
//! Endpoints used (all relative to the configured base URL):
//!
//! - `POST   /users/{username}`  create the user, "already exists" is fine
//! - `GET    /todos/{username}`  full collection, JSON array
//! - `POST   /todos/{username}`  create, body `{label, is_done}`
//! - `PUT    /todos/{id}`        update, body `{label, is_done}`
//! - `DELETE /todos/{id}`        delete, no body

pub mod http;
pub mod payload;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
pub(crate) mod test_server;

pub use http::HttpTodoApi;

use crate::error::Result;
use crate::model::{NewTask, Task, TaskId};

/// `POST /users/{username}` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Created,
    AlreadyExists,
}

/// 远端 to-do 集合（按固定用户名寻址）
///
/// Every call is blocking and returns only after the server answered.
pub trait TodoApi {
    /// Idempotent user creation.
    fn ensure_user(&self) -> Result<UserStatus>;

    /// Full collection in server order. A payload that is not an array is an
    /// empty collection.
    fn fetch_tasks(&self) -> Result<Vec<Task>>;

    /// Create a task and return the server's copy (with its id).
    fn create_task(&self, task: &NewTask) -> Result<Task>;

    fn update_task(&self, id: &TaskId, task: &NewTask) -> Result<Task>;

    fn delete_task(&self, id: &TaskId) -> Result<()>;
}
