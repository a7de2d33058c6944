use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("File '{}' not found.", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}
