use std::io::{self, BufRead, Write};

use anyhow::Result;
use todolist_core::{
    parse_answer, parse_line, Command, Confirm, DoneChange, Persisted, TaskError, TaskRepository,
    TaskStore, DEFAULT_FILE_NAME,
};
use tracing::debug;

const HELP: &str = "\
Commands:
add <title>     (add new task)
list            (list all tasks)
done <id>       (mark as done)
uncheck <id>    (mark as not done)
delete <id>     (delete the task)
reset           (clear the list)
help            (show this help)
exit            (quit)";

/// Prompt input and output. Confirmation answers are read from the same
/// stream as commands.
struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> Console<I, W> {
    /// Reads one line. Bytes that are not valid UTF-8 are replaced rather
    /// than rejected, so a garbled line is handled like any other input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }
}

impl<I: BufRead, W: Write> Confirm for Console<I, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.prompt(prompt).is_err() {
            return false;
        }
        match self.read_line() {
            Ok(Some(answer)) => parse_answer(&answer),
            // End of input or a read error counts as no.
            _ => false,
        }
    }
}

pub struct Session<R: TaskRepository, I, W> {
    store: TaskStore<R>,
    console: Console<I, W>,
    load_warning: Option<TaskError>,
}

impl<R: TaskRepository, I: BufRead, W: Write> Session<R, I, W> {
    pub fn open(repo: R, input: I, output: W) -> Self {
        let (store, load_warning) = TaskStore::load(repo);
        Self {
            store,
            console: Console { input, output },
            load_warning,
        }
    }

    pub fn store(&self) -> &TaskStore<R> {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.console.output
    }

    /// Runs until `exit` or end of input. Only an I/O failure on the
    /// console itself ends the session early.
    pub fn run(&mut self) -> Result<()> {
        self.say("Welcome to Todo CLI (type 'help' for commands, 'exit' to quit)")?;
        if let Some(e) = self.load_warning.take() {
            match e {
                TaskError::Parse(_) => {
                    self.say(format!("Error parsing {}: {}", DEFAULT_FILE_NAME, e))?
                }
                _ => self.say(format!("Error while reading the task json file: {}", e))?,
            }
        }

        loop {
            self.console.prompt("> ")?;
            let Some(line) = self.console.read_line()? else {
                debug!("end of input");
                break;
            };

            match parse_line(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Exit)) => {
                    self.say("Goodbye!")?;
                    break;
                }
                Ok(Some(command)) => self.execute(command)?,
                Err(e) => self.say(e)?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        debug!("executing {:?}", command);
        match command {
            Command::Add { title } => match self.store.add(&title) {
                Ok(added) => {
                    self.say(format!("Added Task: {}", added.value.title))?;
                    self.warn_unsaved(added)
                }
                Err(e) => self.say(e),
            },
            Command::List => self.list(),
            Command::Done { id } => match self.store.complete(id) {
                Ok(change) => {
                    match &change.value {
                        DoneChange::Changed(task) => {
                            self.say(format!("Marked Task {} as done: {}", id, task.title))?
                        }
                        DoneChange::Unchanged(_) => {
                            self.say(format!("Task {} is already marked as done.", id))?
                        }
                    }
                    self.warn_unsaved(change)
                }
                Err(e) => self.say(e),
            },
            Command::Uncheck { id } => match self.store.uncheck(id) {
                Ok(change) => {
                    match &change.value {
                        DoneChange::Changed(task) => {
                            self.say(format!(
                                "Change status of Task {} as not done: {}",
                                id, task.title
                            ))?
                        }
                        DoneChange::Unchanged(_) => {
                            self.say(format!("Task {} is not marked as done.", id))?
                        }
                    }
                    self.warn_unsaved(change)
                }
                Err(e) => self.say(e),
            },
            Command::Delete { id } => match self.store.delete(id, &mut self.console) {
                Ok(removed) => {
                    self.say(format!("Deleted Task {}: {}", id, removed.value.title))?;
                    self.warn_unsaved(removed)
                }
                Err(TaskError::Declined) => self.say("Delete cancelled."),
                Err(e) => self.say(e),
            },
            Command::Reset => match self.store.reset(&mut self.console) {
                Ok(cleared) => {
                    self.say("All tasks have been deleted and reset the list.")?;
                    self.warn_unsaved(cleared)
                }
                Err(TaskError::Declined) => self.say("Reset cancelled."),
                Err(e) => self.say(e),
            },
            Command::Help => self.say(HELP),
            // Handled by the loop before dispatch.
            Command::Exit => Ok(()),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return self.say("No tasks found.");
        }
        let out = &mut self.console.output;
        writeln!(out, "Task List:")?;
        for task in self.store.list() {
            writeln!(out, "{}. {} {}", task.id, task.marker(), task.title)?;
        }
        Ok(())
    }

    fn warn_unsaved<T>(&mut self, persisted: Persisted<T>) -> io::Result<()> {
        match persisted.warning {
            Some(e) => self.say(format!("Warning: failed to save tasks: {}", e)),
            None => Ok(()),
        }
    }

    fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.console.output, "{}", message)
    }
}
