use crate::error::{Result, TaskError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { title: String },
    List,
    Done { id: u32 },
    Uncheck { id: u32 },
    Delete { id: u32 },
    Reset,
    Help,
    Exit,
}

/// Tokenizes one prompt line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = tokens.collect();

    let command = match name {
        "add" => {
            if rest.is_empty() {
                return Err(usage("Please provide a task title."));
            }
            Command::Add {
                title: rest.join(" "),
            }
        }
        "list" => Command::List,
        "done" => Command::Done {
            id: parse_id(&rest, "Please provide the task ID to mark as done.")?,
        },
        "uncheck" => Command::Uncheck {
            id: parse_id(&rest, "Please provide the task ID to uncheck.")?,
        },
        "delete" => Command::Delete {
            id: parse_id(&rest, "Please provide the task ID to delete.")?,
        },
        "reset" => Command::Reset,
        "help" => Command::Help,
        "exit" => Command::Exit,
        other => return Err(TaskError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(args: &[&str], missing: &str) -> Result<u32> {
    let raw = args.first().ok_or_else(|| usage(missing))?;
    match raw.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TaskError::Validation(format!("Invalid task ID: {}", raw))),
    }
}

fn usage(message: &str) -> TaskError {
    TaskError::Validation(message.to_string())
}
