//! Base58 encoding and decoding with optional checksum support.
//!
//! Raw Base58 encoding works on big-endian byte buffers by long division, so
//! no big-integer library is involved; decoding goes through `bs58` with the
//! Bitcoin alphabet. Base58Check appends the first four bytes
//! of the double-SHA-256 of the payload and is what WIF private keys use.

use crate::hash::{checksum, CHECKSUM_LEN};
use crate::WifError;

/// Bitcoin's modified Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity. Index 0 is `'1'`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 58;

/// Encode a big-endian unsigned integer as Base58 digits.
///
/// The value is repeatedly divided by 58 and each remainder becomes one
/// symbol, most significant first. The output never carries a superfluous
/// leading `'1'`.
///
/// # Arguments
/// * `value` - The integer as big-endian bytes. Leading zero bytes are ignored.
/// * `default_one` - What a zero value encodes to: `"1"` when true, `""` otherwise.
///
/// # Returns
/// The minimal Base58 representation of `value`.
pub fn encode_int(value: &[u8], default_one: bool) -> String {
    let mut num: Vec<u8> = value.iter().copied().skip_while(|&b| b == 0).collect();
    if num.is_empty() {
        return if default_one {
            (ALPHABET[0] as char).to_string()
        } else {
            String::new()
        };
    }

    // Digits are collected least significant first.
    let mut digits = Vec::with_capacity(num.len() * 138 / 100 + 1);
    let mut start = 0;
    while start < num.len() {
        let mut rem = 0u32;
        for byte in &mut num[start..] {
            let acc = (rem << 8) | u32::from(*byte);
            *byte = (acc / BASE) as u8;
            rem = acc % BASE;
        }
        digits.push(ALPHABET[rem as usize]);
        while start < num.len() && num[start] == 0 {
            start += 1;
        }
    }

    digits.iter().rev().map(|&d| d as char).collect()
}

/// Encode a byte slice to a Base58 string.
///
/// Each leading zero byte becomes one leading `'1'`, the remainder is
/// encoded as a big-endian integer. An all-zero input therefore encodes to
/// exactly as many `'1'` symbols as it has bytes, and empty input to `""`.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let mut out = String::with_capacity(zeros + (data.len() - zeros) * 138 / 100 + 1);
    out.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));
    out.push_str(&encode_int(&data[zeros..], false));
    out
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes. Error indices are
/// byte offsets into `s`.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters.
pub fn decode(s: &str) -> Result<Vec<u8>, WifError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                WifError::InvalidBase58 { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => WifError::InvalidBase58 {
                character: s
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                index,
            },
            other => WifError::Base58(other.to_string()),
        })
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended (Base58Check).
///
/// The result is `encode(data || checksum(data))`.
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum(data));
    log::trace!("base58check encoding {} byte payload", payload.len());
    encode(&payload)
}

/// Decode a Base58Check string, verifying the 4-byte checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (without checksum) on success, or an
/// error for invalid encoding or checksum mismatch.
pub fn check_decode(s: &str) -> Result<Vec<u8>, WifError> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(WifError::TooShort(decoded.len()));
    }
    let (payload, sum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if sum != checksum(payload) {
        return Err(WifError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_empty_string() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base58_single_zero_byte() {
        assert_eq!(encode(&[0]), "1");
        assert_eq!(decode("1").unwrap(), vec![0]);
    }

    #[test]
    fn test_base58_all_zeros() {
        assert_eq!(encode(&[0, 0, 0]), "111");
        assert_eq!(decode("111").unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_base58_two_leading_zeros() {
        let encoded = encode(&[0x00, 0x00, 0x01]);
        assert_eq!(encoded, "112");
        assert!(encoded.starts_with("11"));
        assert!(!encoded[2..].starts_with('1'));
    }

    #[test]
    fn test_base58_decoded_address() {
        let input = hex::decode("00010966776006953D5567439E5E39F86A0D273BEED61967F6").unwrap();
        assert_eq!(encode(&input), "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        assert_eq!(decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM").unwrap(), input);
    }

    #[test]
    fn test_base58_decoded_hash() {
        let input = hex::decode("0123456789ABCDEF").unwrap();
        assert_eq!(encode(&input), "C3CPq7c8PY");
        assert_eq!(decode("C3CPq7c8PY").unwrap(), input);
    }

    #[test]
    fn test_base58_leading_zeros() {
        let input = hex::decode("000000287FB4CD").unwrap();
        assert_eq!(encode(&input), "111233QC4");
        assert_eq!(decode("111233QC4").unwrap(), input);
    }

    #[test]
    fn test_base58_encode_large_number() {
        assert_eq!(encode(&[255, 255, 255, 255]), "7YXq9G");
        assert_eq!(encode(&[0, 0, 0, 0, 255]), "11115Q");
    }

    #[test]
    fn test_encode_int_zero() {
        assert_eq!(encode_int(&[], true), "1");
        assert_eq!(encode_int(&[], false), "");
        assert_eq!(encode_int(&[0, 0], true), "1");
        assert_eq!(encode_int(&[0, 0], false), "");
    }

    #[test]
    fn test_encode_int_small_values() {
        assert_eq!(encode_int(&[57], true), "z");
        assert_eq!(encode_int(&[58], false), "21");
        // Leading zero bytes carry no meaning for an integer.
        assert_eq!(encode_int(&[0, 0, 58], false), "21");
        assert_eq!(encode_int(&[0xef], false), "58");
    }

    #[test]
    fn test_base58_decode_invalid_character() {
        assert!(matches!(
            decode("invalid0"),
            Err(WifError::InvalidBase58 { character: 'l', index: 4 })
        ));
        assert!(matches!(
            decode("1234!@#$%"),
            Err(WifError::InvalidBase58 { character: '!', index: 4 })
        ));
        assert!(matches!(
            decode("abcé"),
            Err(WifError::InvalidBase58 { character: 'é', index: 3 })
        ));
    }

    #[test]
    fn test_base58_decode_matches_encode_for_wif_payload() {
        let mut payload = vec![0xefu8];
        payload.extend_from_slice(&[0u8; 31]);
        payload.push(0x01);
        payload.extend_from_slice(&[0x40, 0xdf, 0x3c, 0xbd]);
        let wif = encode(&payload);
        assert_eq!(wif, "91avARGdfge8E4tZfYLoxeJ5sGBdNJQH4kvjJoQFacbgwmaKkrx");
        assert_eq!(decode(&wif).unwrap(), payload);
    }

    #[test]
    fn test_base58_check_roundtrip() {
        let payload = hex::decode("00f54a5851e9372b87810a8e60cdd2e7cfd80b6e31").unwrap();
        let encoded = check_encode(&payload);
        assert_eq!(check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_base58_check_bad_checksum() {
        let payload = vec![0xef, 0x01, 0x02, 0x03];
        let mut encoded = check_encode(&payload);
        let last = encoded.pop().unwrap();
        let replacement = if last == '1' { '2' } else { '1' };
        encoded.push(replacement);
        assert!(matches!(check_decode(&encoded), Err(WifError::ChecksumMismatch)));
    }

    #[test]
    fn test_base58_check_too_short() {
        assert!(matches!(check_decode("111"), Err(WifError::TooShort(3))));
    }
}
