use thiserror::Error;

pub mod hash;
pub mod identity;
pub mod keys;
pub mod types;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid key error: {0}")]
    InvalidKeyError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
