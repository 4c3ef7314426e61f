use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawingError {
    #[error("No graphics state registered under '{0}'")]
    StyleNotFound(String),
    #[error("I/O error while writing render trace: {0}")]
    Io(#[from] std::io::Error),
}
