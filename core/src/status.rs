use std::fmt;
use std::path::PathBuf;

/// One-line, human-readable progress and outcome messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Querying,
    Found { count: usize, username: String },
    NotFound,
    Error(String),
    Saved(PathBuf),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Querying => f.write_str("Querying Active Directory..."),
            Status::Found { count, username } => {
                write!(f, "Found {count} groups for user '{username}'.")
            }
            Status::NotFound => f.write_str("User not found in the domain."),
            Status::Error(message) => write!(f, "Error: {message}"),
            Status::Saved(path) => write!(f, "Groups saved to: {}", path.display()),
        }
    }
}
