use std::{fmt, time::Duration};

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "settings i/o error: {}", e),
            Self::Json(e) => write!(f, "settings json error: {}", e),
        }
    }
}

/// Failure of a single external command invocation
#[derive(Debug)]
pub enum CommandError {
    /// The program could not be started (or waited on)
    Spawn(std::io::Error),
    /// The program exited with a failure status
    Status { code: Option<i32>, stderr: String },
    /// The program did not finish in time and was killed
    Timeout(Duration),
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self::Spawn(e)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "failed to run command: {}", e),
            Self::Status {
                code: Some(code),
                stderr,
            } => write!(f, "command exited with status {}: {}", code, stderr.trim()),
            Self::Status { code: None, stderr } => {
                write!(f, "command killed by signal: {}", stderr.trim())
            }
            Self::Timeout(after) => write!(f, "command timed out after {:?}", after),
        }
    }
}
