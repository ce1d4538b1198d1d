// src/error.rs
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Fractional bits outside `0..=19`
    InvalidPrecision(u8),
    Serialize(String),
    Deserialize(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision(bits) => write!(
                f,
                "Invalid precision: {} fractional bits (maximum is {})",
                bits,
                crate::precision::MAX_FRACTIONAL_BITS
            ),
            Self::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            Self::Deserialize(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

pub type Result<T> = std::result::Result<T, AssetError>;
