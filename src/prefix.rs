//! Version byte search.
//!
//! A base58check string is the base-58 rendering of the big-endian number
//! `version ++ payload ++ checksum`. Strings of `prefix.len() + m` digits
//! that start with `prefix` are exactly the numbers in
//! `[t * 58^m, (t + 1) * 58^m)` where `t = b58dec(prefix)`. Version value `v`
//! works for every payload when the whole block
//! `[v * 2^s, (v + 1) * 2^s)` with `s = 8 * (payload_length + 4)` fits inside
//! that interval.

use crate::alphabet::{is_base58_char, RADIX, ZERO_DIGIT};
use crate::codec::{asciidec, b58dec, b58enc, encode_with_version, CHECKSUM_LENGTH};
use crate::error::{PrefixError, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Default cap on the number of version bytes the search may return.
pub const DEFAULT_MAX_VERSION_BYTES: usize = 8;

/// Largest payload the search accepts, in bytes.
pub const MAX_PAYLOAD_LENGTH: usize = 1 << 16;

/// A validated human-readable prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prefix(String);

impl Prefix {
    /// Validates `text` as a prefix: non-empty, base-58 only, not starting with `1`.
    ///
    /// A leading `1` is rejected here rather than reported as a failed search:
    /// base58check renders a leading zero byte as `1`, so no version bytes
    /// give such a prefix a fixed encoded length.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(PrefixError::EmptyPrefix);
        }
        if let Some((position, character)) =
            text.chars().enumerate().find(|(_, c)| !is_base58_char(*c))
        {
            return Err(PrefixError::InvalidCharacter {
                character,
                position,
            });
        }
        if text.starts_with(ZERO_DIGIT) {
            return Err(PrefixError::LeadingZeroDigit);
        }
        Ok(Prefix(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of base-58 digits in the prefix.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer value of the prefix read as a base-58 number.
    pub fn value(&self) -> BigUint {
        // Characters were checked in `new`.
        b58dec(&self.0).unwrap_or_default()
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self> {
        Prefix::new(s)
    }
}

impl TryFrom<String> for Prefix {
    type Error = PrefixError;

    fn try_from(value: String) -> Result<Self> {
        Prefix::new(&value)
    }
}

impl From<Prefix> for String {
    fn from(prefix: Prefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bounds for the version byte search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    #[serde(default = "default_max_version_bytes")]
    pub max_version_bytes: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_version_bytes: DEFAULT_MAX_VERSION_BYTES,
        }
    }
}

fn default_max_version_bytes() -> usize {
    DEFAULT_MAX_VERSION_BYTES
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixSolution {
    pub prefix: Prefix,
    pub payload_length: usize,
    /// Total base-58 characters of `version ++ payload ++ checksum`.
    pub encoded_length: usize,
    /// Smallest version value that works for every payload.
    pub version_bytes: Vec<u8>,
    /// Largest version value with the same encoded length. Every value in
    /// between works as well.
    pub upper_version_bytes: Vec<u8>,
}

impl PrefixSolution {
    /// Base58check-encodes `payload` under this solution's version bytes.
    pub fn encode(&self, payload: &[u8]) -> Result<String> {
        if payload.len() != self.payload_length {
            return Err(PrefixError::InvalidPayloadLength);
        }
        Ok(encode_with_version(&self.version_bytes, payload))
    }

    pub fn version_hex(&self) -> String {
        hex::encode(&self.version_bytes)
    }
}

/// Finds the version bytes for `prefix` and a payload of `payload_length` bytes.
pub fn solve(
    prefix: &Prefix,
    payload_length: usize,
    limits: &SearchLimits,
) -> Result<PrefixSolution> {
    let shift = tail_length(payload_length)? * 8;
    let target = prefix.value();
    let block = BigUint::from(1u8) << shift;
    let max_bits = (limits.max_version_bytes as u64).saturating_mul(8);

    let mut scale = BigUint::from(1u8);
    let mut suffix_digits = 0usize;
    loop {
        suffix_digits += 1;
        scale *= RADIX;
        let low_end = &target * &scale;
        let high_end = (&target + 1u32) * &scale;

        let lo = (&low_end + &block - 1u32) >> shift;
        if lo.bits() > max_bits {
            debug!(
                prefix = %prefix,
                payload_length,
                suffix_digits,
                "version bytes exceed limit of {}",
                limits.max_version_bytes
            );
            return Err(PrefixError::NoSolutionFound {
                prefix: prefix.to_string(),
                payload_length,
                max_version_bytes: limits.max_version_bytes,
            });
        }

        if high_end >= block {
            let hi = (&high_end - &block) >> shift;
            if lo <= hi {
                let solution = PrefixSolution {
                    prefix: prefix.clone(),
                    payload_length,
                    encoded_length: prefix.len() + suffix_digits,
                    version_bytes: asciidec(&lo),
                    upper_version_bytes: asciidec(&hi),
                };
                debug!(
                    prefix = %prefix,
                    payload_length,
                    encoded_length = solution.encoded_length,
                    version = %solution.version_hex(),
                    "found version bytes"
                );
                return Ok(solution);
            }
        }
        trace!(prefix = %prefix, suffix_digits, "interval too narrow");
    }
}

/// Returns `(encoded_length, version_bytes)` for `prefix` and `length`,
/// searching with the default limits.
pub fn compute_version_bytes(prefix: &str, length: usize) -> Result<(usize, Vec<u8>)> {
    let prefix = Prefix::new(prefix)?;
    let solution = solve(&prefix, length, &SearchLimits::default())?;
    Ok((solution.encoded_length, solution.version_bytes))
}

/// Checks whether `version_bytes` make every `payload_length`-byte payload
/// encode with `prefix`. Returns the encoded length when they do.
///
/// Encodings grow with the payload, so the all-zero and all-`0xff` tails
/// bound every other payload and checksum.
pub fn verify_version_bytes(
    prefix: &Prefix,
    payload_length: usize,
    version_bytes: &[u8],
) -> Result<Option<usize>> {
    let tail = tail_length(payload_length)?;
    // A leading zero byte renders as '1', which no prefix starts with.
    if version_bytes.first().copied().unwrap_or(0) == 0 {
        return Ok(None);
    }

    let lowest = tail_encoding(version_bytes, 0x00, tail);
    let highest = tail_encoding(version_bytes, 0xff, tail);

    let works = lowest.len() == highest.len()
        && lowest.starts_with(prefix.as_str())
        && highest.starts_with(prefix.as_str());
    trace!(%lowest, %highest, works, "checked tail extremes");
    Ok(works.then_some(lowest.len()))
}

/// Bytes following the version: payload plus checksum.
fn tail_length(payload_length: usize) -> Result<usize> {
    if payload_length == 0 {
        return Err(PrefixError::InvalidPayloadLength);
    }
    if payload_length > MAX_PAYLOAD_LENGTH {
        return Err(PrefixError::PayloadTooLong {
            payload_length,
            max: MAX_PAYLOAD_LENGTH,
        });
    }
    Ok(payload_length + CHECKSUM_LENGTH)
}

fn tail_encoding(version_bytes: &[u8], fill: u8, tail: usize) -> String {
    let mut data = version_bytes.to_vec();
    data.resize(version_bytes.len() + tail, fill);
    b58enc(&BigUint::from_bytes_be(&data))
}
