//! b58-prefix - version bytes for human-readable base58check prefixes
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Encoding
//! - [`alphabet`] - Base-58 alphabet and digit lookup
//! - [`codec`] - Integer base-58 arithmetic and base58check framing
//!
//! ## Prefix Search
//! - [`prefix`] - Version byte search and verification
//! - [`catalog`] - Named prefixes and identification of encoded strings
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//! - [`cli`] - CLI front end

#![forbid(unsafe_code)]

// ============================================================================
// Encoding
// ============================================================================
pub mod alphabet;
pub mod codec;

// ============================================================================
// Prefix Search
// ============================================================================
pub mod catalog;
pub mod prefix;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod cli;
pub mod config;
pub mod error;

pub use codec::{asciidec, b58dec};
pub use error::{PrefixError, Result};
pub use prefix::{
    compute_version_bytes, solve, verify_version_bytes, Prefix, PrefixSolution, SearchLimits,
};
