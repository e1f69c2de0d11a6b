mod repl;

use std::io;

use anyhow::Result;
use todolist_core::{FileTaskRepository, DEFAULT_FILE_NAME};
use tracing_subscriber::EnvFilter;

use crate::repl::Session;

fn setup_logging() {
    // Logs go to stderr so they never mix with the prompt transcript.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let repo = FileTaskRepository::new(DEFAULT_FILE_NAME);
    let stdin = io::stdin();
    let mut session = Session::open(repo, stdin.lock(), io::stdout());
    session.run()
}
