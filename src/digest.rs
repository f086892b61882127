//! Hash dispatcher: maps a digest identifier to its hash function and to the
//! DER-encoded `DigestInfo` prefix embedded in PKCS#1 v1.5 blocks.

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::error::{Error, Result};

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestId {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ripemd160,
}

/// `(id, name, DigestInfo prefix, output length)` for every supported digest.
static DIGEST_TABLE: [(DigestId, &str, &[u8], usize); 7] = [
    (
        DigestId::Md5,
        "md5",
        &[
            0x30, 0x20, 0x30, 0x0c, 0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05,
            0x05, 0x00, 0x04, 0x10,
        ],
        16,
    ),
    (
        DigestId::Sha1,
        "sha1",
        &[
            0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04,
            0x14,
        ],
        20,
    ),
    (
        DigestId::Sha224,
        "sha224",
        &[
            0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x04, 0x05, 0x00, 0x04, 0x1c,
        ],
        28,
    ),
    (
        DigestId::Sha256,
        "sha256",
        &[
            0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x01, 0x05, 0x00, 0x04, 0x20,
        ],
        32,
    ),
    (
        DigestId::Sha384,
        "sha384",
        &[
            0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x02, 0x05, 0x00, 0x04, 0x30,
        ],
        48,
    ),
    (
        DigestId::Sha512,
        "sha512",
        &[
            0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x03, 0x05, 0x00, 0x04, 0x40,
        ],
        64,
    ),
    (
        DigestId::Ripemd160,
        "ripemd160",
        &[
            0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x24, 0x03, 0x02, 0x01, 0x05, 0x00, 0x04,
            0x14,
        ],
        20,
    ),
];

impl DigestId {
    /// All supported digests, in table order.
    pub const ALL: [DigestId; 7] = [
        DigestId::Md5,
        DigestId::Sha1,
        DigestId::Sha224,
        DigestId::Sha256,
        DigestId::Sha384,
        DigestId::Sha512,
        DigestId::Ripemd160,
    ];

    fn entry(self) -> &'static (DigestId, &'static str, &'static [u8], usize) {
        // Table is indexed in declaration order of the enum.
        &DIGEST_TABLE[self as usize]
    }

    /// Lowercase canonical name, e.g. `"sha256"`.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// DER encoding of the `DigestInfo` header that precedes the raw hash.
    pub fn digest_info_prefix(self) -> &'static [u8] {
        self.entry().2
    }

    /// Length of the raw hash output in bytes.
    pub fn output_len(self) -> usize {
        self.entry().3
    }

    /// Prefix length plus hash length, the `len` of the PKCS#1 v1.5 layout.
    pub fn encoded_len(self) -> usize {
        self.digest_info_prefix().len() + self.output_len()
    }

    /// Hash `data` with this algorithm.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestId::Md5 => Md5::digest(data).to_vec(),
            DigestId::Sha1 => Sha1::digest(data).to_vec(),
            DigestId::Sha224 => Sha224::digest(data).to_vec(),
            DigestId::Sha256 => Sha256::digest(data).to_vec(),
            DigestId::Sha384 => Sha384::digest(data).to_vec(),
            DigestId::Sha512 => Sha512::digest(data).to_vec(),
            DigestId::Ripemd160 => Ripemd160::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for DigestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DigestId {
    type Err = Error;

    /// Accepts the canonical names case-insensitively, with or without a
    /// hyphen (`"SHA-256"`, `"sha256"`, `"RIPEMD-160"`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        DIGEST_TABLE
            .iter()
            .find(|(_, name, _, _)| *name == normalized)
            .map(|(id, _, _, _)| *id)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Resolve a digest name to its identifier and `DigestInfo` prefix.
pub fn resolve(name: &str) -> Result<(DigestId, &'static [u8])> {
    let id: DigestId = name.parse()?;
    log::debug!("resolved digest {} ({} byte prefix)", id, id.digest_info_prefix().len());
    Ok((id, id.digest_info_prefix()))
}
