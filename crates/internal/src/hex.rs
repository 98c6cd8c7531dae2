//! Hexadecimal literal parsing

use num_bigint::BigUint;
use tbvec_api::{Error, Result, ResultExt};

/// Decode a hex literal into big-endian bytes.
///
/// Accepts upper- and lower-case digits and an optional `0x` prefix. An empty
/// literal, an odd number of digits or a non-hex character is a `Format`
/// error naming `context`.
pub fn decode_literal(context: &str, literal: &str) -> Result<Vec<u8>> {
    let digits = literal.strip_prefix("0x").unwrap_or(literal);
    if digits.is_empty() {
        return Err(Error::format(context.to_string(), "empty literal"));
    }
    ::hex::decode(digits).with_context(context.to_string())
}

/// Decode a hex literal into an unsigned integer, returning it together with
/// the literal's byte length
pub fn literal_to_biguint(context: &str, literal: &str) -> Result<(BigUint, usize)> {
    let bytes = decode_literal(context, literal)?;
    Ok((BigUint::from_bytes_be(&bytes), bytes.len()))
}
