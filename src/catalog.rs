//! Named prefixes and identification of encoded strings.

use crate::codec::check_decode;
use crate::error::{PrefixError, Result};
use crate::prefix::{solve, verify_version_bytes, Prefix, PrefixSolution, SearchLimits};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A named prefix. `version_bytes` pins a deployed constant, which may be
/// any value inside the valid range rather than the smallest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixEntry {
    pub name: String,
    pub prefix: Prefix,
    pub payload_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_bytes: Option<Vec<u8>>,
}

impl PrefixEntry {
    fn builtin(name: &str, prefix: &str, payload_length: usize) -> Result<Self> {
        Ok(PrefixEntry {
            name: name.to_string(),
            prefix: Prefix::new(prefix)?,
            payload_length,
            version_bytes: None,
        })
    }

    fn pinned(mut self, version_bytes: &[u8]) -> Self {
        self.version_bytes = Some(version_bytes.to_vec());
        self
    }
}

/// A catalog entry together with its search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub name: String,
    pub solution: PrefixSolution,
    /// The bytes in use: the pinned constant if any, else the computed minimum.
    pub version_bytes: Vec<u8>,
    pub pinned: bool,
}

/// The catalog entry an encoded string belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identified {
    pub name: String,
    pub prefix: Prefix,
    /// Version bytes found in the decoded data.
    pub version_bytes: Vec<u8>,
    pub payload_hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<PrefixEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<PrefixEntry>) -> Self {
        Catalog { entries }
    }

    /// Account hashes and public keys of the Mavryk address scheme.
    pub fn builtin() -> Result<Self> {
        Ok(Catalog::new(vec![
            PrefixEntry::builtin("ed25519 public key hash", "mv1", 20)?,
            PrefixEntry::builtin("secp256k1 public key hash", "mv2", 20)?,
            PrefixEntry::builtin("p256 public key hash", "mv3", 20)?,
            PrefixEntry::builtin("originated contract hash", "KT1", 20)?,
            PrefixEntry::builtin("ed25519 public key", "edpk", 32)?.pinned(&[13, 15, 37, 217]),
            PrefixEntry::builtin("secp256k1 public key", "sppk", 33)?,
            PrefixEntry::builtin("p256 public key", "p2pk", 33)?,
        ]))
    }

    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Solves every entry and checks pinned constants against their prefix.
    pub fn resolve(&self, limits: &SearchLimits) -> Result<Vec<ResolvedEntry>> {
        self.entries
            .iter()
            .map(|entry| resolve_entry(entry, limits))
            .collect()
    }

    /// Finds the entry `encoded` was produced with, checking the
    /// base58check checksum first. Longer prefixes are tried first.
    pub fn identify(&self, encoded: &str, limits: &SearchLimits) -> Result<Option<Identified>> {
        let data = check_decode(encoded)?;
        let mut resolved = self.resolve(limits)?;
        resolved.sort_by_key(|r| std::cmp::Reverse(r.solution.prefix.len()));

        for entry in resolved {
            let solution = &entry.solution;
            let version_len = entry.version_bytes.len();
            if encoded.starts_with(solution.prefix.as_str())
                && encoded.len() == solution.encoded_length
                && data.len() == version_len + solution.payload_length
            {
                debug!(name = %entry.name, "identified encoded string");
                let (version_bytes, payload) = data.split_at(version_len);
                return Ok(Some(Identified {
                    name: entry.name,
                    prefix: solution.prefix.clone(),
                    version_bytes: version_bytes.to_vec(),
                    payload_hex: hex::encode(payload),
                }));
            }
        }
        Ok(None)
    }
}

fn resolve_entry(entry: &PrefixEntry, limits: &SearchLimits) -> Result<ResolvedEntry> {
    let solution = solve(&entry.prefix, entry.payload_length, limits)?;
    let Some(pinned) = &entry.version_bytes else {
        return Ok(ResolvedEntry {
            name: entry.name.clone(),
            version_bytes: solution.version_bytes.clone(),
            solution,
            pinned: false,
        });
    };

    match verify_version_bytes(&entry.prefix, entry.payload_length, pinned)? {
        Some(len) if len == solution.encoded_length => Ok(ResolvedEntry {
            name: entry.name.clone(),
            version_bytes: pinned.clone(),
            solution,
            pinned: true,
        }),
        other => {
            warn!(name = %entry.name, encoded_length = ?other, "pinned version bytes rejected");
            Err(PrefixError::Config(format!(
                "version bytes {:?} of entry {:?} do not always encode with prefix {:?} at length {}",
                pinned, entry.name, entry.prefix.as_str(), solution.encoded_length
            )))
        }
    }
}
