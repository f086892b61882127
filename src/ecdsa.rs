//! ECDSA over a named curve.
//!
//! This module hashes the message and hands the hash to a [`CurveEngine`];
//! all point arithmetic, nonce generation and signature encoding belong to the
//! engine. [`RustCryptoCurves`] is the default engine.

use std::fmt;
use std::str::FromStr;

use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};

use crate::digest::DigestId;
use crate::error::{Error, Result};

/// Elliptic-curve signing capability keyed by curve name.
pub trait CurveEngine: Send + Sync {
    /// Sign a precomputed hash with `private_key` on `curve`.
    fn sign_prehash(&self, curve: &str, hash: &[u8], private_key: &[u8]) -> Result<Vec<u8>>;

    /// Check `signature` over a precomputed hash with `public_key` on `curve`.
    fn verify_prehash(
        &self,
        curve: &str,
        hash: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool>;
}

/// Hash `message` with `digest` and sign it on `curve`.
pub fn sign<E: CurveEngine + ?Sized>(
    engine: &E,
    curve: &str,
    digest: DigestId,
    message: &[u8],
    private_key: &[u8],
) -> Result<Vec<u8>> {
    if curve.is_empty() {
        return Err(Error::NoCurveSelected);
    }
    let hash = digest.digest(message);
    log::debug!("ECDSA sign on {} with {}", curve, digest);
    engine.sign_prehash(curve, &hash, private_key)
}

/// Hash `message` with `digest` and verify `signature` on `curve`.
pub fn verify<E: CurveEngine + ?Sized>(
    engine: &E,
    curve: &str,
    digest: DigestId,
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool> {
    if curve.is_empty() {
        return Err(Error::NoCurveSelected);
    }
    let hash = digest.digest(message);
    log::debug!("ECDSA verify on {} with {}", curve, digest);
    engine.verify_prehash(curve, &hash, signature, public_key)
}

/// Curves available in [`RustCryptoCurves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    P256,
    #[cfg(feature = "k256")]
    Secp256k1,
    #[cfg(feature = "p384")]
    P384,
}

impl Curve {
    pub fn name(self) -> &'static str {
        match self {
            Curve::P256 => "p256",
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => "secp256k1",
            #[cfg(feature = "p384")]
            Curve::P384 => "p384",
        }
    }

    /// Size of a field element in bytes.
    pub fn field_size(self) -> usize {
        match self {
            Curve::P256 => 32,
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => 32,
            #[cfg(feature = "p384")]
            Curve::P384 => 48,
        }
    }

    /// Shortest hash the curve accepts: half a field element.
    pub fn min_prehash_len(self) -> usize {
        self.field_size() / 2
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "" => Err(Error::NoCurveSelected),
            "p256" | "p-256" | "secp256r1" | "prime256v1" => Ok(Curve::P256),
            #[cfg(feature = "k256")]
            "secp256k1" | "k256" => Ok(Curve::Secp256k1),
            #[cfg(feature = "p384")]
            "p384" | "p-384" | "secp384r1" => Ok(Curve::P384),
            _ => Err(Error::UnknownCurve(s.to_string())),
        }
    }
}

/// Curve engine backed by the RustCrypto elliptic-curve crates.
///
/// Private keys are raw big-endian scalars or PKCS#8 PEM; public keys are
/// SEC1 points (compressed or uncompressed) or SPKI PEM. Signatures are
/// ASN.1 DER.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoCurves;

impl CurveEngine for RustCryptoCurves {
    fn sign_prehash(&self, curve: &str, hash: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let curve: Curve = curve.parse()?;
        check_prehash(curve, hash)?;
        match curve {
            Curve::P256 => sign_p256(curve, hash, private_key),
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => sign_k256(curve, hash, private_key),
            #[cfg(feature = "p384")]
            Curve::P384 => sign_p384(curve, hash, private_key),
        }
    }

    fn verify_prehash(
        &self,
        curve: &str,
        hash: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool> {
        let curve: Curve = curve.parse()?;
        check_prehash(curve, hash)?;
        let valid = match curve {
            Curve::P256 => verify_p256(hash, signature, public_key),
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => verify_k256(hash, signature, public_key),
            #[cfg(feature = "p384")]
            Curve::P384 => verify_p384(hash, signature, public_key),
        };
        Ok(valid)
    }
}

/// Per-curve sign and verify over one RustCrypto curve crate.
///
/// Keys or signatures that do not decode on the curve make verification
/// return `false`.
macro_rules! curve_ops {
    ($sign:ident, $verify:ident, $krate:ident) => {
        fn $sign(curve: Curve, hash: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
            let signing_key = match pem_text(private_key) {
                Some(pem) => $krate::SecretKey::from_pkcs8_pem(pem)
                    .map($krate::ecdsa::SigningKey::from)
                    .map_err(|_| invalid_private_key(curve))?,
                None => $krate::ecdsa::SigningKey::from_slice(private_key)
                    .map_err(|_| invalid_private_key(curve))?,
            };
            let signature: $krate::ecdsa::Signature = signing_key.sign_prehash(hash)?;
            Ok(signature.to_der().as_bytes().to_vec())
        }

        fn $verify(hash: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
            let verifying_key = match pem_text(public_key) {
                Some(pem) => $krate::PublicKey::from_public_key_pem(pem)
                    .map($krate::ecdsa::VerifyingKey::from)
                    .ok(),
                None => $krate::ecdsa::VerifyingKey::from_sec1_bytes(public_key).ok(),
            };
            let Some(verifying_key) = verifying_key else {
                return false;
            };
            let Ok(signature) = $krate::ecdsa::Signature::from_der(signature) else {
                return false;
            };
            verifying_key.verify_prehash(hash, &signature).is_ok()
        }
    };
}

curve_ops!(sign_p256, verify_p256, p256);
#[cfg(feature = "k256")]
curve_ops!(sign_k256, verify_k256, k256);
#[cfg(feature = "p384")]
curve_ops!(sign_p384, verify_p384, p384);

/// PEM input is recognised by its armor line.
fn pem_text(bytes: &[u8]) -> Option<&str> {
    if !bytes.starts_with(b"-----BEGIN ") {
        return None;
    }
    std::str::from_utf8(bytes).ok()
}

fn check_prehash(curve: Curve, hash: &[u8]) -> Result<()> {
    let minimum = curve.min_prehash_len();
    if hash.len() < minimum {
        log::warn!(
            "{}-byte hash is too short for {} (minimum {})",
            hash.len(),
            curve,
            minimum
        );
        return Err(Error::PrehashTooShort {
            curve: curve.name().to_string(),
            minimum,
            actual: hash.len(),
        });
    }
    Ok(())
}

fn invalid_private_key(curve: Curve) -> Error {
    log::warn!("rejecting {} private key", curve);
    Error::MalformedKey(format!("invalid {} private key", curve))
}
