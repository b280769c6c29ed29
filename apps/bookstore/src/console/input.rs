//! Prompt helpers for the console menu.
//!
//! Reads are blocking; the console front end is a single-user loop and
//! never shares the runtime with other work.

use std::io::{self, Write};
use std::str::FromStr;

use bookstore_core::validation::require_non_empty;
use bookstore_core::Money;

/// Prints a label and reads one trimmed line.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts until the reply is non-empty.
pub fn prompt_required(label: &str) -> io::Result<String> {
    loop {
        let line = prompt(label)?;
        match require_non_empty(label, &line) {
            Ok(()) => return Ok(line),
            Err(e) => println!("  {e}"),
        }
    }
}

/// Reads a line without echoing it.
pub fn prompt_password(label: &str) -> io::Result<String> {
    rpassword::prompt_password(format!("{label}: "))
}

/// Prompts until the reply parses as an integer.
pub fn prompt_i64(label: &str) -> io::Result<i64> {
    loop {
        let line = prompt(label)?;
        match line.parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => println!("  please enter a whole number"),
        }
    }
}

/// Prompts until the reply parses as a rupee amount ("499" or "499.50").
pub fn prompt_money(label: &str) -> io::Result<Money> {
    loop {
        let line = prompt(label)?;
        match Money::from_str(&line) {
            Ok(m) => return Ok(m),
            Err(e) => println!("  {e}"),
        }
    }
}

/// Prompts for an optional value; an empty reply means "none".
pub fn prompt_optional(label: &str) -> io::Result<Option<String>> {
    let line = prompt(&format!("{label} (blank for none)"))?;
    Ok(if line.is_empty() { None } else { Some(line) })
}
