pub mod file;
pub mod traits;

// Re-export
pub use file::{FileTaskRepository, DEFAULT_FILE_NAME};
pub use traits::TaskRepository;
