//! The Bitcoin base-58 alphabet and its reverse lookup table.

/// Base-58 alphabet, zero digit first. Excludes `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The digit with value zero. Encodes a leading zero byte in base58check.
pub const ZERO_DIGIT: char = '1';

/// Radix of the encoding.
pub const RADIX: u32 = 58;

const INVALID: u8 = 0xff;

/// ASCII byte -> digit value, `INVALID` for bytes outside the alphabet.
static DIGIT_TABLE: [u8; 128] = build_table();

const fn build_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the value of a single base-58 digit.
#[inline]
pub fn digit_value(byte: u8) -> Option<u8> {
    match DIGIT_TABLE.get(byte as usize) {
        Some(&INVALID) | None => None,
        Some(&value) => Some(value),
    }
}

/// Returns the character for a digit value below 58.
#[inline]
pub fn digit_char(value: u8) -> Option<char> {
    ALPHABET.get(value as usize).map(|&b| b as char)
}

/// Checks a character against the alphabet.
pub fn is_base58_char(c: char) -> bool {
    c.is_ascii() && digit_value(c as u8).is_some()
}
