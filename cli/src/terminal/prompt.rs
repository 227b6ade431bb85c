//! Line-based prompts on the controlling terminal.
//!
//! The question goes to stderr, the answer is read from stdin. End of input is reported
//! as `None` so interactive loops can stop cleanly.

use std::io::{self, BufRead, Write};

use colored::*;
use console::Term;

use crate::terminal::{colors, spinner};

fn ask(question: &str) -> io::Result<Option<String>> {
    spinner::suspend(|| {
        let mut stderr = io::stderr();
        write!(
            stderr,
            "{} {} ",
            "?".color(colors::ACCENT).bold(),
            question.color(colors::PRIMARY)
        )?;
        stderr.flush()
    })?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Free text answer. `None` on end of input.
pub fn input(question: &str) -> io::Result<Option<String>> {
    ask(&format!("{question}:"))
}

/// Free text answer with a value used when the answer is blank.
pub fn input_with_default(question: &str, default: &str) -> io::Result<Option<String>> {
    let answer = ask(&format!("{question} [{}]:", default.color(colors::SECONDARY)))?;
    Ok(answer.map(|a| {
        let trimmed = a.trim();
        if trimmed.is_empty() {
            default.to_string()
        } else {
            trimmed.to_string()
        }
    }))
}

/// Yes/no question. Blank answers and end of input pick `default`.
pub fn confirm(question: &str, default: bool) -> io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = ask(&format!("{question} {hint}"))?;
    Ok(parse_yes_no(answer.as_deref(), default))
}

/// Reads the bind password without echo.
pub fn password(bind_dn: &str) -> io::Result<String> {
    let term = Term::stderr();
    term.write_str(&format!(
        "{} {} ",
        "?".color(colors::ACCENT).bold(),
        format!("Password for {bind_dn}:").color(colors::PRIMARY)
    ))?;
    term.read_secure_line()
}

fn parse_yes_no(answer: Option<&str>, default: bool) -> bool {
    match answer.map(|a| a.trim().to_ascii_lowercase()) {
        Some(a) if a == "y" || a == "yes" => true,
        Some(a) if a == "n" || a == "no" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_yes_no;

    #[test]
    fn yes_no_answers() {
        assert!(parse_yes_no(Some("Y"), false));
        assert!(parse_yes_no(Some(" yes "), false));
        assert!(!parse_yes_no(Some("no"), true));
        assert!(parse_yes_no(Some(""), true));
        assert!(!parse_yes_no(None, false));
        assert!(!parse_yes_no(Some("maybe"), false));
    }
}
