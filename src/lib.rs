//! # dualsig
//!
//! RSA (PKCS#1 v1.5) and ECDSA signatures behind one `sign`/`verify` surface.
//!
//! Higher-level protocol code (certificate or transaction validation, for
//! example) can check a signature without caring which key type produced it.
//!
//! ## Features
//!
//! - **RSA PKCS#1 v1.5**: signing and verification with MD5, SHA-1, SHA-224,
//!   SHA-256, SHA-384, SHA-512 and RIPEMD-160 `DigestInfo` encodings
//! - **Constant-time padding checks**: every byte of the decoded block is
//!   examined regardless of where a mismatch occurs
//! - **ECDSA**: hash-then-sign over a named curve through a pluggable
//!   [`ecdsa::CurveEngine`]; P-256 always, secp256k1 and P-384 behind the
//!   `k256` and `p384` Cargo features (enabled by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use dualsig::scheme::{self, SignatureAlgorithm};
//! use p256::ecdsa::SigningKey;
//! use rand::rngs::OsRng;
//!
//! // Generate a P-256 key pair
//! let signing_key = SigningKey::random(&mut OsRng);
//! let private_key = signing_key.to_bytes();
//! let public_key = signing_key.verifying_key().to_encoded_point(true);
//!
//! // Sign and verify through the uniform surface
//! let alg = SignatureAlgorithm::parse("SHA256withECDSA", Some("p256")).unwrap();
//! let signature = scheme::sign(&alg, b"Hello, World!", &private_key).unwrap();
//! let is_valid = scheme::verify(&alg, b"Hello, World!", &signature, public_key.as_bytes()).unwrap();
//! assert!(is_valid);
//! ```
//!
//! RSA goes through the same calls with `"SHA256withRSA"` and DER-encoded
//! `SEQUENCE { modulus, exponent }` keys.
//!
//! ## Error Handling
//!
//! A signature that does not match is `Ok(false)`. An [`Error`] means the
//! inputs were invalid and no verdict could be computed.

pub mod bigint;
pub mod ct;
pub mod digest;
pub mod ecdsa;
pub mod error;
pub mod keys;
pub mod rsa;
pub mod scheme;

#[cfg(test)]
mod testdata;

pub use digest::DigestId;
pub use error::{Error, Result};
pub use keys::{RsaPrivateKey, RsaPublicKey};
pub use scheme::SignatureAlgorithm;
