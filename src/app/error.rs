use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Edge loading error: {0}")]
    EdgeLoad(#[from] crate::edge_loader::error::EdgeLoaderError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
