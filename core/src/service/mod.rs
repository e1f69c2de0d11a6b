pub mod confirm;
pub mod task_service;
