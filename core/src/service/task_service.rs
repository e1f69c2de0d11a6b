use tracing::{debug, warn};

use crate::error::{Result, TaskError};
use crate::model::task::Task;
use crate::repository::TaskRepository;
use crate::service::confirm::Confirm;

/// Result of a mutation that was applied in memory. `warning` carries the
/// save error when the file could not be rewritten; the change itself stands.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<TaskError>,
}

impl<T> Persisted<T> {
    /// Nothing changed, so nothing was written.
    fn untouched(value: T) -> Self {
        Self { value, warning: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DoneChange {
    Changed(Task),
    /// The task was already in the requested state.
    Unchanged(Task),
}

pub struct TaskStore<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Loads the full task list. A missing file is an empty store; an
    /// unreadable or malformed one also yields an empty store, with the
    /// error handed back for the caller to report.
    pub fn load(repo: R) -> (Self, Option<TaskError>) {
        match repo.load() {
            Ok(tasks) => (Self { repo, tasks }, None),
            Err(e) => {
                warn!("discarding stored tasks: {}", e);
                (Self { repo, tasks: Vec::new() }, Some(e))
            }
        }
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u32) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    pub fn add(&mut self, title: &str) -> Result<Persisted<Task>> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::Validation("Please provide a task title.".to_string()));
        }

        let task = Task::new(self.tasks.len() as u32 + 1, title.to_string());
        self.tasks.push(task.clone());
        debug!("added task {}", task.id);
        Ok(self.persist(task))
    }

    pub fn set_done(&mut self, id: u32, value: bool) -> Result<Persisted<DoneChange>> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        if task.done == value {
            return Ok(Persisted::untouched(DoneChange::Unchanged(task.clone())));
        }

        task.done = value;
        let task = task.clone();
        debug!("task {} done={}", id, value);
        Ok(self.persist(DoneChange::Changed(task)))
    }

    pub fn complete(&mut self, id: u32) -> Result<Persisted<DoneChange>> {
        self.set_done(id, true)
    }

    pub fn uncheck(&mut self, id: u32) -> Result<Persisted<DoneChange>> {
        self.set_done(id, false)
    }

    /// Removes a task after the user confirms it.
    pub fn delete(&mut self, id: u32, confirm: &mut dyn Confirm) -> Result<Persisted<Task>> {
        let task = self.get(id)?;
        let prompt = format!(
            "Are you sure you want to delete Task {}: {}? (y/n): ",
            task.id, task.title
        );
        if !confirm.confirm(&prompt) {
            return Err(TaskError::Declined);
        }
        self.remove(id)
    }

    /// Removes a task without asking and renumbers the rest to `1..N`.
    /// The returned task keeps the id it had before removal.
    pub fn remove(&mut self, id: u32) -> Result<Persisted<Task>> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        let removed = self.tasks.remove(pos);
        renumber(&mut self.tasks);
        debug!("removed task {}, {} remaining", id, self.tasks.len());
        Ok(self.persist(removed))
    }

    /// Clears every task after the user confirms it.
    pub fn reset(&mut self, confirm: &mut dyn Confirm) -> Result<Persisted<()>> {
        if !confirm.confirm("Are you sure you want to delete all tasks? (y/n): ") {
            return Err(TaskError::Declined);
        }
        Ok(self.clear())
    }

    pub fn clear(&mut self) -> Persisted<()> {
        self.tasks.clear();
        debug!("cleared all tasks");
        self.persist(())
    }

    fn persist<T>(&self, value: T) -> Persisted<T> {
        let warning = match self.repo.save(&self.tasks) {
            Ok(()) => None,
            Err(e) => {
                warn!("failed to save tasks: {}", e);
                Some(e)
            }
        };
        Persisted { value, warning }
    }
}

/// Reassigns ids so they match position: the first task is 1.
pub fn renumber(tasks: &mut [Task]) {
    for (i, task) in tasks.iter_mut().enumerate() {
        task.id = i as u32 + 1;
    }
}
