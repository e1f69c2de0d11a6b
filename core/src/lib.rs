pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use error::{Result, TaskError};
pub use input::{parse_line, Command};
pub use model::task::Task;
pub use repository::{FileTaskRepository, TaskRepository, DEFAULT_FILE_NAME};
pub use service::confirm::{parse_answer, Confirm};
pub use service::task_service::{DoneChange, Persisted, TaskStore};
