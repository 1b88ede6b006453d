use thiserror::Error;

#[derive(Debug, Error)]
pub enum VttError {
    #[error("I/O error reading VTT file: {0}")]
    Io(#[from] std::io::Error),
}
