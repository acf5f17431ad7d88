use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure talking to the `op` executable.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("op executable not found on PATH or in /usr/local/bin; set --op-path")]
    NotFound,
    #[error("failed to run {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("op {command} failed ({status}): {stderr}")]
    Exit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("malformed op output: {0}")]
    Decode(#[from] serde_json::Error),
}
