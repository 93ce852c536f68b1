use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output file already exists: {0} (use --force to overwrite)")]
    FileExists(String),
}

pub type DiffCheckResult<T> = Result<T, DiffCheckError>;
