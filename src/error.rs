use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("failed to read story file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse story JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("failed to render story page: {0}")]
pub struct RenderError(#[from] pub askama::Error);

#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("not a number: {0:?}")]
    InvalidChoice(String),
    #[error("choice {choice} is out of range, pick 0 to {count}")]
    OutOfRange { choice: usize, count: usize },
    #[error("input closed before a choice was made")]
    EndOfInput,
    #[error("terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}
