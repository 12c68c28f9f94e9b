//! Error types for b58-prefix

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    InvalidCharacter { character: char, position: usize },
    NoSolutionFound {
        prefix: String,
        payload_length: usize,
        max_version_bytes: usize,
    },
    EmptyPrefix,
    LeadingZeroDigit,
    InvalidPayloadLength,
    PayloadTooLong { payload_length: usize, max: usize },
    InvalidBase58(String),
    ChecksumMismatch,
    Config(String),
    Io(String),
    Json(String),
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefixError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid base58 character {:?} at position {}",
                character, position
            ),
            PrefixError::NoSolutionFound {
                prefix,
                payload_length,
                max_version_bytes,
            } => write!(
                f,
                "No version bytes found for prefix {:?} with {}-byte payload within {} version bytes",
                prefix, payload_length, max_version_bytes
            ),
            PrefixError::EmptyPrefix => write!(f, "Prefix must not be empty"),
            PrefixError::LeadingZeroDigit => {
                write!(f, "Prefix must not start with the zero digit '1'")
            }
            PrefixError::InvalidPayloadLength => write!(f, "Payload length must be positive"),
            PrefixError::PayloadTooLong {
                payload_length,
                max,
            } => write!(
                f,
                "Payload length {} exceeds the maximum of {} bytes",
                payload_length, max
            ),
            PrefixError::InvalidBase58(msg) => write!(f, "Invalid base58 string: {}", msg),
            PrefixError::ChecksumMismatch => write!(f, "Base58check checksum mismatch"),
            PrefixError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PrefixError::Io(msg) => write!(f, "IO error: {}", msg),
            PrefixError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for PrefixError {}

impl From<std::io::Error> for PrefixError {
    fn from(err: std::io::Error) -> Self {
        PrefixError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for PrefixError {
    fn from(err: toml::de::Error) -> Self {
        PrefixError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PrefixError {
    fn from(err: serde_json::Error) -> Self {
        PrefixError::Json(err.to_string())
    }
}

impl From<bs58::decode::Error> for PrefixError {
    fn from(err: bs58::decode::Error) -> Self {
        PrefixError::InvalidBase58(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, PrefixError>;
