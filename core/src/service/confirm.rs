/// Asks the user a yes/no question before a destructive change.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// `y` or `yes` in any case, surrounding whitespace ignored. Anything else is no.
pub fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
