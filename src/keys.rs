//! RSA key decoding.
//!
//! Keys are a DER `SEQUENCE` of exactly two positive `INTEGER`s: the modulus
//! followed by the public exponent (public key) or the private exponent
//! (private key). For public keys this is the PKCS#1 `RSAPublicKey` layout.

use std::fmt;

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::bigint;
use crate::error::{Error, Result};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// RSA public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    modulus: BigUint,
    public_exponent: BigUint,
}

impl RsaPublicKey {
    pub fn new(modulus: BigUint, public_exponent: BigUint) -> Result<Self> {
        check_positive(&modulus, "modulus")?;
        check_positive(&public_exponent, "public exponent")?;
        Ok(Self {
            modulus,
            public_exponent,
        })
    }

    /// Decode `SEQUENCE { modulus INTEGER, publicExponent INTEGER }`.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let (modulus, public_exponent) = parse_integer_pair(bytes)?;
        Self::new(modulus, public_exponent)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn public_exponent(&self) -> &BigUint {
        &self.public_exponent
    }

    /// Modulus length in bytes, the `k` of PKCS#1.
    pub fn size(&self) -> usize {
        bigint::byte_len(&self.modulus)
    }
}

/// RSA private key in modulus/exponent form.
///
/// `Debug` never prints the private exponent.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    modulus: BigUint,
    private_exponent: BigUint,
}

impl RsaPrivateKey {
    pub fn new(modulus: BigUint, private_exponent: BigUint) -> Result<Self> {
        check_positive(&modulus, "modulus")?;
        check_positive(&private_exponent, "private exponent")?;
        Ok(Self {
            modulus,
            private_exponent,
        })
    }

    /// Decode `SEQUENCE { modulus INTEGER, privateExponent INTEGER }`.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let (modulus, private_exponent) = parse_integer_pair(bytes)?;
        Self::new(modulus, private_exponent)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub(crate) fn private_exponent(&self) -> &BigUint {
        &self.private_exponent
    }

    /// Modulus length in bytes, the `k` of PKCS#1.
    pub fn size(&self) -> usize {
        bigint::byte_len(&self.modulus)
    }

    /// Public half of this key, given the public exponent it was generated with.
    pub fn to_public(&self, public_exponent: BigUint) -> Result<RsaPublicKey> {
        RsaPublicKey::new(self.modulus.clone(), public_exponent)
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("modulus", &self.modulus)
            .field("private_exponent", &"<redacted>")
            .finish()
    }
}

/// SHA-256 fingerprint of an encoded public key, as `"sha256:<hex>"`.
pub fn calculate_key_id(public_key_bytes: &[u8]) -> String {
    let hash = Sha256::digest(public_key_bytes);
    format!("sha256:{}", hex::encode(hash))
}

fn check_positive(value: &BigUint, field: &str) -> Result<()> {
    if value.bits() == 0 {
        log::warn!("rejecting RSA key: {} is zero", field);
        return Err(Error::MalformedKey(format!("{} must be positive", field)));
    }
    Ok(())
}

fn parse_integer_pair(bytes: &[u8]) -> Result<(BigUint, BigUint)> {
    let mut outer = DerReader::new(bytes);
    let body = outer.read_tlv(TAG_SEQUENCE)?;
    if !outer.is_empty() {
        return Err(malformed("trailing data after key sequence"));
    }

    let mut fields = DerReader::new(body);
    let first = fields.read_unsigned_integer()?;
    let second = fields.read_unsigned_integer()?;
    if !fields.is_empty() {
        return Err(malformed("unexpected extra field in key sequence"));
    }
    Ok((first, second))
}

fn malformed(msg: &str) -> Error {
    log::warn!("rejecting RSA key: {}", msg);
    Error::MalformedKey(msg.to_string())
}

/// Minimal DER reader over definite-length TLVs.
struct DerReader<'a> {
    input: &'a [u8],
}

impl<'a> DerReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input }
    }

    fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8> {
        let (&byte, rest) = self
            .input
            .split_first()
            .ok_or_else(|| malformed("unexpected end of input"))?;
        self.input = rest;
        Ok(byte)
    }

    fn read_length(&mut self) -> Result<usize> {
        let first = self.read_byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        let count = (first & 0x7f) as usize;
        if count == 0 {
            return Err(malformed("indefinite length is not allowed"));
        }
        if count > std::mem::size_of::<usize>() {
            return Err(malformed("length field too large"));
        }
        let mut len = 0usize;
        for i in 0..count {
            let byte = self.read_byte()?;
            if i == 0 && byte == 0 {
                return Err(malformed("non-minimal length encoding"));
            }
            len = (len << 8) | byte as usize;
        }
        if len < 0x80 {
            return Err(malformed("non-minimal length encoding"));
        }
        Ok(len)
    }

    /// Read one TLV with the given tag and return its contents.
    fn read_tlv(&mut self, tag: u8) -> Result<&'a [u8]> {
        let actual = self.read_byte()?;
        if actual != tag {
            return Err(malformed(&format!(
                "expected tag 0x{:02x}, found 0x{:02x}",
                tag, actual
            )));
        }
        let len = self.read_length()?;
        if len > self.input.len() {
            return Err(malformed("length exceeds available data"));
        }
        let (contents, rest) = self.input.split_at(len);
        self.input = rest;
        Ok(contents)
    }

    /// Read an `INTEGER` that must be non-negative.
    fn read_unsigned_integer(&mut self) -> Result<BigUint> {
        let contents = self.read_tlv(TAG_INTEGER)?;
        match contents {
            [] => Err(malformed("empty integer")),
            [first, ..] if first & 0x80 != 0 => Err(malformed("negative integer")),
            [0x00, second, ..] if second & 0x80 == 0 => {
                Err(malformed("non-minimal integer encoding"))
            }
            _ => Ok(bigint::from_be_bytes(contents)),
        }
    }
}
