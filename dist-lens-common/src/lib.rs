pub mod config;
pub use config::Config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Pattern error: {0}")]
    Pattern(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DistLensError>;
