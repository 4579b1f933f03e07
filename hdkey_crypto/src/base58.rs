use crate::hash::sha256d;
use std::iter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {0:?}")]
    InvalidCharacter(char),
    #[error("base58check data of {0} bytes is shorter than its 4-byte checksum")]
    InvalidLength(usize),
    #[error("base58check checksum mismatch")]
    ChecksumMismatch,
}

pub const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const NOT_A_DIGIT: u8 = 0xFF;

/// Digit value of every ASCII code, `NOT_A_DIGIT` outside the alphabet.
const BASE58_DIGITS: [u8; 128] = {
    let mut table = [NOT_A_DIGIT; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        table[BASE58_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

fn digit_value(c: char) -> Option<u8> {
    let code = c as usize;
    if code >= BASE58_DIGITS.len() {
        return None;
    }
    match BASE58_DIGITS[code] {
        NOT_A_DIGIT => None,
        digit => Some(digit),
    }
}

/// Encodes `data` as a big-endian integer in base 58.
///
/// Every leading zero byte is written as one leading `'1'`, so fixed-width
/// payloads keep their width. Empty input gives an empty string.
pub fn base58_encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let mut input = data[zeros..].to_vec();
    let mut encoded: Vec<u8> = Vec::with_capacity(zeros + input.len() * 138 / 100 + 1);
    while !input.is_empty() {
        // Long division of the remaining number by 58.
        let mut remainder: u32 = 0;
        let mut quotient: Vec<u8> = Vec::with_capacity(input.len());
        for &byte in &input {
            let acc = (remainder << 8) | byte as u32;
            let digit = (acc / 58) as u8;
            remainder = acc % 58;
            if !quotient.is_empty() || digit != 0 {
                quotient.push(digit);
            }
        }
        encoded.push(BASE58_ALPHABET[remainder as usize]);
        input = quotient;
    }
    encoded.extend(iter::repeat_n(BASE58_ALPHABET[0], zeros));
    encoded.reverse();
    encoded.into_iter().map(char::from).collect()
}

/// Decodes a base58 string. Exact inverse of [`base58_encode`].
pub fn base58_decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    let zeros = s.bytes().take_while(|&b| b == BASE58_ALPHABET[0]).count();
    let mut input: Vec<u8> = Vec::with_capacity(s.len() - zeros);
    for c in s.chars().skip(zeros) {
        input.push(digit_value(c).ok_or(Base58Error::InvalidCharacter(c))?);
    }

    let mut decoded: Vec<u8> = Vec::with_capacity(s.len());
    while !input.is_empty() {
        let mut remainder: u32 = 0;
        let mut quotient: Vec<u8> = Vec::with_capacity(input.len());
        for &digit in &input {
            let acc = remainder * 58 + digit as u32;
            let q = (acc >> 8) as u8;
            remainder = acc & 0xFF;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q);
            }
        }
        decoded.push(remainder as u8);
        input = quotient;
    }
    decoded.extend(iter::repeat_n(0u8, zeros));
    decoded.reverse();
    Ok(decoded)
}

/// First four bytes of the double SHA-256 of `data`.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let hash = sha256d(data);
    [hash[0], hash[1], hash[2], hash[3]]
}

pub fn base58_check_encode(payload: &[u8]) -> String {
    let mut extended = Vec::with_capacity(payload.len() + 4);
    extended.extend_from_slice(payload);
    extended.extend_from_slice(&checksum(payload));
    base58_encode(&extended)
}

pub fn base58_check_decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    let raw = base58_decode(s)?;
    if raw.len() < 4 {
        return Err(Base58Error::InvalidLength(raw.len()));
    }
    let (payload, check) = raw.split_at(raw.len() - 4);
    if checksum(payload) != check {
        return Err(Base58Error::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
