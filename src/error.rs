use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckgridError {
    #[error("Invalid color '{0}'. Use #rgb, #rrggbb, a color name or a 0-255 index")]
    InvalidColor(String),

    #[error("Invalid entries file: {0}")]
    InvalidEntries(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
