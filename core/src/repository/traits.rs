use crate::error::Result;
use crate::model::task::Task;

/// Whole-collection persistence. The store always loads and saves the full
/// sequence, never individual records.
pub trait TaskRepository {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
