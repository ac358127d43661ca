use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Error parsing JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Error while walking directory {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    #[error(transparent)]
    Sequence(#[from] multitool_core::fibonacci::SequenceError),
}
