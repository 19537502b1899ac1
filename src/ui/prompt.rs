//! Interactive confirmation, asked before destructive operations.

use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no,
/// including EOF.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match io::stdin().lock().read_line(&mut s) {
        Ok(_) => is_yes(&s),
        Err(_) => false,
    }
}

/// Skip the question when `assume_yes` is set.
pub fn confirm_or_assume(prompt: &str, assume_yes: bool) -> bool {
    assume_yes || confirm(prompt)
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
