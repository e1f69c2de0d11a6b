use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TaskError};
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

pub const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Clone, Debug)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        FileTaskRepository {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, starting empty", self.file_path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(TaskError::Read(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(TaskError::Parse)?;
        debug!("loaded {} tasks from {}", tasks.len(), self.file_path.display());
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.file_path).map_err(TaskError::Write)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks).map_err(TaskError::Serialize)?;
        writer.flush().map_err(TaskError::Write)?;
        debug!("saved {} tasks to {}", tasks.len(), self.file_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Task> {
        let mut done = Task::new(1, "Buy milk".to_string());
        done.done = true;
        vec![done, Task::new(2, "Walk dog".to_string())]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(dir.path().join(DEFAULT_FILE_NAME));
        assert!(repo.load().unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_blank_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        fs::write(&path, "  \n").unwrap();
        let repo = FileTaskRepository::new(&path);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(dir.path().join(DEFAULT_FILE_NAME));
        repo.save(&sample()).unwrap();
        assert_eq!(repo.load().unwrap(), sample());
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(dir.path().join(DEFAULT_FILE_NAME));
        repo.save(&sample()).unwrap();
        let content = fs::read_to_string(repo.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(content.contains("\"title\": \"Walk dog\""));
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(dir.path().join(DEFAULT_FILE_NAME));
        repo.save(&sample()).unwrap();
        repo.save(&[]).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_parse_error_and_left_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        let repo = FileTaskRepository::new(&path);

        let err = repo.load().unwrap_err();
        assert!(matches!(err, TaskError::Parse(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(dir.path().join("missing").join(DEFAULT_FILE_NAME));
        let err = repo.save(&sample()).unwrap_err();
        assert!(matches!(err, TaskError::Write(_)));
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(dir.path());
        let err = repo.load().unwrap_err();
        assert!(matches!(err, TaskError::Read(_)));
    }
}
