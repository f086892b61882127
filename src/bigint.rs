//! Arbitrary-precision unsigned integer helpers backed by `num-bigint`.

use num_bigint::BigUint;

/// Interpret big-endian bytes as an unsigned integer (OS2IP).
pub fn from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encode `value` big-endian, left-padded with zeros to at least `width` bytes
/// (I2OSP). Values wider than `width` are returned unpadded.
pub fn to_be_bytes_padded(value: &BigUint, width: usize) -> Vec<u8> {
    let raw = if value.bits() == 0 {
        Vec::new()
    } else {
        value.to_bytes_be()
    };
    if raw.len() >= width {
        return raw;
    }
    let mut out = vec![0u8; width];
    out[width - raw.len()..].copy_from_slice(&raw);
    out
}

/// `base ^ exponent mod modulus`. `modulus` must be non-zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exponent, modulus)
}

/// `ceil(bitlength(value) / 8)`.
pub fn byte_len(value: &BigUint) -> usize {
    ((value.bits() + 7) / 8) as usize
}
