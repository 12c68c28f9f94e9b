//! Base-58 integer arithmetic and base58check framing.
//!
//! `b58dec`/`b58enc` treat a base-58 string as a plain big-endian number,
//! which is what the version byte search reasons about. `check_encode` and
//! `check_decode` produce and parse the real wire form (leading zero bytes
//! as `1`, 4-byte double-SHA-256 checksum).

use crate::alphabet::{digit_value, ALPHABET, RADIX};
use crate::error::{PrefixError, Result};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Length of the base58check checksum in bytes.
pub const CHECKSUM_LENGTH: usize = 4;

/// Decodes a base-58 word into its integer value, most significant digit first.
///
/// The empty word decodes to zero, as does any run of `1`s.
pub fn b58dec(word: &str) -> Result<BigUint> {
    let mut value = BigUint::default();
    for (position, character) in word.chars().enumerate() {
        let digit = u8::try_from(character)
            .ok()
            .and_then(digit_value)
            .ok_or(PrefixError::InvalidCharacter {
                character,
                position,
            })?;
        value = value * RADIX + u32::from(digit);
    }
    Ok(value)
}

/// Encodes an integer as a base-58 word. Zero encodes to `"1"`.
pub fn b58enc(value: &BigUint) -> String {
    value
        .to_radix_be(RADIX)
        .into_iter()
        .map(|digit| ALPHABET[digit as usize] as char)
        .collect()
}

/// Minimal big-endian byte expansion of `value`; zero yields `[0]`.
pub fn asciidec(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// First four bytes of SHA-256(SHA-256(data)).
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha256::digest(Sha256::digest(data));
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    out
}

/// Base58check-encodes `data` (usually version bytes followed by a payload).
pub fn check_encode(data: &[u8]) -> String {
    let mut framed = Vec::with_capacity(data.len() + CHECKSUM_LENGTH);
    framed.extend_from_slice(data);
    framed.extend_from_slice(&checksum(data));
    bs58::encode(framed).into_string()
}

/// Decodes a base58check string and strips the verified checksum.
pub fn check_decode(text: &str) -> Result<Vec<u8>> {
    let mut framed = bs58::decode(text).into_vec()?;
    if framed.len() < CHECKSUM_LENGTH {
        return Err(PrefixError::InvalidBase58(format!(
            "decoded {} bytes, shorter than the {}-byte checksum",
            framed.len(),
            CHECKSUM_LENGTH
        )));
    }
    let data_len = framed.len() - CHECKSUM_LENGTH;
    if framed[data_len..] != checksum(&framed[..data_len]) {
        return Err(PrefixError::ChecksumMismatch);
    }
    framed.truncate(data_len);
    Ok(framed)
}

/// Base58check-encodes `version_bytes ++ payload`.
pub fn encode_with_version(version_bytes: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version_bytes.len() + payload.len());
    data.extend_from_slice(version_bytes);
    data.extend_from_slice(payload);
    check_encode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b58dec_known_values() {
        assert_eq!(b58dec("1").unwrap(), BigUint::from(0u32));
        assert_eq!(b58dec("111").unwrap(), BigUint::from(0u32));
        assert_eq!(b58dec("").unwrap(), BigUint::from(0u32));
        assert_eq!(b58dec("2").unwrap(), BigUint::from(1u32));
        assert_eq!(b58dec("21").unwrap(), BigUint::from(58u32));
        assert_eq!(b58dec("mv1").unwrap(), BigUint::from(151090u32));
    }

    #[test]
    fn test_b58dec_rejects_characters_outside_alphabet() {
        assert_eq!(
            b58dec("mv0").unwrap_err(),
            PrefixError::InvalidCharacter {
                character: '0',
                position: 2
            }
        );
        assert!(matches!(
            b58dec("Il"),
            Err(PrefixError::InvalidCharacter { character: 'I', .. })
        ));
        assert!(matches!(
            b58dec("ab€"),
            Err(PrefixError::InvalidCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn test_asciidec_known_values() {
        assert_eq!(asciidec(&BigUint::from(375492u32)), vec![5, 186, 196]);
        assert_eq!(asciidec(&BigUint::from(797373u32)), vec![12, 42, 189]);
        assert_eq!(asciidec(&BigUint::from(0u32)), vec![0]);
        assert_eq!(asciidec(&BigUint::from(256u32)), vec![1, 0]);
    }

    #[test]
    fn test_asciidec_matches_big_endian_interpretation() {
        for value in [1u64, 255, 256, 65535, 375492, u64::MAX] {
            let bytes = asciidec(&BigUint::from(value));
            assert_ne!(bytes[0], 0);
            assert_eq!(BigUint::from_bytes_be(&bytes), BigUint::from(value));
        }
    }

    #[test]
    fn test_b58enc_inverts_b58dec() {
        assert_eq!(b58enc(&BigUint::from(0u32)), "1");
        assert_eq!(b58enc(&BigUint::from(151090u32)), "mv1");

        let mut value = BigUint::from(1u32);
        for step in 0u32..200 {
            let word = b58enc(&value);
            assert_eq!(b58dec(&word).unwrap(), value, "step {}", step);
            value = value * 37u32 + step;
        }
    }

    #[test]
    fn test_checksum_roundtrip_and_tampering() {
        let data = [5u8, 186, 196, 1, 2, 3];
        let encoded = check_encode(&data);
        assert_eq!(check_decode(&encoded).unwrap(), data.to_vec());

        // Flip the last digit; the checksum no longer matches.
        let mut tampered: Vec<char> = encoded.chars().collect();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == '2' { '3' } else { '2' };
        let tampered: String = tampered.into_iter().collect();
        assert_eq!(check_decode(&tampered), Err(PrefixError::ChecksumMismatch));
    }

    #[test]
    fn test_check_decode_errors() {
        assert!(matches!(
            check_decode("0OIl"),
            Err(PrefixError::InvalidBase58(_))
        ));
        assert!(matches!(check_decode("2"), Err(PrefixError::InvalidBase58(_))));
    }

    #[test]
    fn test_decode_known_mavryk_address() {
        let data = check_decode("mv1E7Ms4p1e3jV2WMehLB3FBFwbV56GiRQfe").unwrap();
        assert_eq!(data.len(), 23);
        assert_eq!(&data[..3], &[5, 186, 196]);
        assert_eq!(
            encode_with_version(&data[..3], &data[3..]),
            "mv1E7Ms4p1e3jV2WMehLB3FBFwbV56GiRQfe"
        );
    }
}
