//! One `sign`/`verify` surface over both signature families.

use std::fmt;

use crate::digest::DigestId;
use crate::ecdsa::{self, CurveEngine, RustCryptoCurves};
use crate::error::{Error, Result};
use crate::keys::{RsaPrivateKey, RsaPublicKey};
use crate::rsa;

/// A signature family together with its digest (and curve, for ECDSA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    Rsa { digest: DigestId },
    Ecdsa { curve: String, digest: DigestId },
}

impl SignatureAlgorithm {
    /// Parse a name such as `"SHA256withRSA"` or `"SHA384withECDSA"`.
    ///
    /// ECDSA names need a `curve`; RSA names ignore it.
    pub fn parse(name: &str, curve: Option<&str>) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        let (digest, family) = lower
            .split_once("with")
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))?;
        let digest: DigestId = digest
            .parse()
            .map_err(|_| Error::UnknownAlgorithm(name.to_string()))?;

        match family {
            "rsa" | "rsaencryption" => Ok(SignatureAlgorithm::Rsa { digest }),
            "ecdsa" => match curve {
                Some(curve) if !curve.is_empty() => Ok(SignatureAlgorithm::Ecdsa {
                    curve: curve.to_string(),
                    digest,
                }),
                _ => Err(Error::NoCurveSelected),
            },
            _ => Err(Error::UnknownAlgorithm(name.to_string())),
        }
    }

    pub fn digest(&self) -> DigestId {
        match self {
            SignatureAlgorithm::Rsa { digest } | SignatureAlgorithm::Ecdsa { digest, .. } => {
                *digest
            }
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureAlgorithm::Rsa { digest } => {
                write!(f, "{}withRSA", digest.name().to_ascii_uppercase())
            }
            SignatureAlgorithm::Ecdsa { curve, digest } => write!(
                f,
                "{}withECDSA({})",
                digest.name().to_ascii_uppercase(),
                curve
            ),
        }
    }
}

/// Sign `message`. RSA keys are DER `SEQUENCE { modulus, privateExponent }`;
/// ECDSA keys are whatever the default curve engine accepts.
pub fn sign(alg: &SignatureAlgorithm, message: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
    sign_with(&RustCryptoCurves, alg, message, private_key)
}

/// Verify `signature` over `message`. RSA keys are DER
/// `SEQUENCE { modulus, publicExponent }`.
pub fn verify(
    alg: &SignatureAlgorithm,
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool> {
    verify_with(&RustCryptoCurves, alg, message, signature, public_key)
}

/// [`sign`] with an explicit curve engine for the ECDSA family.
pub fn sign_with<E: CurveEngine + ?Sized>(
    engine: &E,
    alg: &SignatureAlgorithm,
    message: &[u8],
    private_key: &[u8],
) -> Result<Vec<u8>> {
    match alg {
        SignatureAlgorithm::Rsa { digest } => {
            let key = RsaPrivateKey::from_der(private_key)?;
            rsa::sign(*digest, message, &key)
        }
        SignatureAlgorithm::Ecdsa { curve, digest } => {
            ecdsa::sign(engine, curve, *digest, message, private_key)
        }
    }
}

/// [`verify`] with an explicit curve engine for the ECDSA family.
pub fn verify_with<E: CurveEngine + ?Sized>(
    engine: &E,
    alg: &SignatureAlgorithm,
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool> {
    match alg {
        SignatureAlgorithm::Rsa { digest } => {
            let key = RsaPublicKey::from_der(public_key)?;
            rsa::verify(*digest, message, signature, &key)
        }
        SignatureAlgorithm::Ecdsa { curve, digest } => {
            ecdsa::verify(engine, curve, *digest, message, signature, public_key)
        }
    }
}
