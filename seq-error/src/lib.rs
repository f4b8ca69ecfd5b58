//! Shared error type for the seq-tools crates.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeqError>;

#[derive(Error, Debug)]
pub enum SeqError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
