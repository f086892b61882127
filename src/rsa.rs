//! RSA signatures with PKCS#1 v1.5 padding (RSASSA-PKCS1-v1_5).
//!
//! The encoded block for a modulus of `k` bytes is
//!
//! ```text
//! 0x00 || 0x01 || 0xFF * (k - len - 3) || 0x00 || DigestInfo prefix || hash
//! ```
//!
//! where `len` is the prefix length plus the hash length.

use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};

use crate::bigint;
use crate::ct;
use crate::digest::DigestId;
use crate::error::{Error, Result};
use crate::keys::{RsaPrivateKey, RsaPublicKey};

/// Minimum overhead of the block: two header bytes, eight bytes of 0xFF and
/// the zero separator.
const MIN_PADDING: usize = 11;

/// Hash `message` and sign it with `key`.
///
/// The signature is always exactly `key.size()` bytes.
pub fn sign(digest: DigestId, message: &[u8], key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let hash = digest.digest(message);
    sign_digest(digest, &hash, key)
}

/// Sign an already computed `hash` of the given digest algorithm.
pub fn sign_digest(digest: DigestId, hash: &[u8], key: &RsaPrivateKey) -> Result<Vec<u8>> {
    check_digest_len(digest, hash)?;
    let k = key.size();
    check_key_size(digest, k)?;

    let em = encode_block(digest, hash, k);
    let m = bigint::from_be_bytes(&em);
    check_reduces(&m, key.modulus())?;

    let c = bigint::mod_pow(&m, key.private_exponent(), key.modulus());
    Ok(bigint::to_be_bytes_padded(&c, k))
}

/// Hash `message` and check `signature` against it.
///
/// Returns `Ok(false)` for any signature that does not match; errors are
/// reserved for inputs on which no verdict can be reached.
pub fn verify(
    digest: DigestId,
    message: &[u8],
    signature: &[u8],
    key: &RsaPublicKey,
) -> Result<bool> {
    let hash = digest.digest(message);
    verify_digest(digest, &hash, signature, key)
}

/// Check `signature` against an already computed `hash`.
pub fn verify_digest(
    digest: DigestId,
    hash: &[u8],
    signature: &[u8],
    key: &RsaPublicKey,
) -> Result<bool> {
    check_digest_len(digest, hash)?;
    let k = key.size();
    check_key_size(digest, k)?;

    // A signature is exactly k bytes and reduced modulo n. Neither is secret.
    let s = bigint::from_be_bytes(signature);
    if signature.len() != k || &s >= key.modulus() {
        log::debug!(
            "{} RSA signature rejected: {} bytes or not below the modulus",
            digest,
            signature.len()
        );
        return Ok(false);
    }
    let m = bigint::mod_pow(&s, key.public_exponent(), key.modulus());
    let em = bigint::to_be_bytes_padded(&m, k);

    let valid = em.len() == k && bool::from(check_block(digest, hash, &em));
    if !valid {
        log::debug!("{} RSA signature did not match", digest);
    }
    Ok(valid)
}

fn check_digest_len(digest: DigestId, hash: &[u8]) -> Result<()> {
    if hash.len() != digest.output_len() {
        return Err(Error::InvalidDigestLength {
            expected: digest.output_len(),
            actual: hash.len(),
        });
    }
    Ok(())
}

/// Fails unless a `k`-byte modulus can hold the block for `digest`.
fn check_key_size(digest: DigestId, k: usize) -> Result<()> {
    let required = digest.encoded_len() + MIN_PADDING;
    if k < required {
        log::warn!(
            "{}-byte modulus cannot hold a {} block of {} bytes",
            k,
            digest,
            required
        );
        return Err(Error::KeyTooSmall {
            required,
            actual: k,
        });
    }
    log::debug!("{} block: k={} len={}", digest, k, digest.encoded_len());
    Ok(())
}

fn check_reduces(m: &BigUint, modulus: &BigUint) -> Result<()> {
    if m >= modulus {
        return Err(Error::DecryptionError);
    }
    Ok(())
}

/// Build the `k`-byte encoded block. Callers have checked the size.
fn encode_block(digest: DigestId, hash: &[u8], k: usize) -> Vec<u8> {
    let prefix = digest.digest_info_prefix();
    let len = prefix.len() + hash.len();
    let separator = k - len - 1;

    let mut em = vec![0xffu8; k];
    em[0] = 0x00;
    em[1] = 0x01;
    em[separator] = 0x00;
    em[k - len..k - hash.len()].copy_from_slice(prefix);
    em[k - hash.len()..].copy_from_slice(hash);
    em
}

/// Validate every byte of `em` against the expected layout without
/// short-circuiting on the first mismatch.
fn check_block(digest: DigestId, hash: &[u8], em: &[u8]) -> Choice {
    let prefix = digest.digest_info_prefix();
    let k = em.len();
    let len = prefix.len() + hash.len();
    let separator = k - len - 1;

    em[0].ct_eq(&0x00)
        & em[1].ct_eq(&0x01)
        & ct::ct_all_equal(&em[2..separator], 0xff)
        & em[separator].ct_eq(&0x00)
        & ct::ct_eq_choice(&em[k - len..k - hash.len()], prefix)
        & ct::ct_eq_choice(&em[k - hash.len()..], hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;

    fn private_1024() -> RsaPrivateKey {
        RsaPrivateKey::from_der(&testdata::private_1024()).unwrap()
    }

    fn public_1024() -> RsaPublicKey {
        RsaPublicKey::from_der(&testdata::public_1024()).unwrap()
    }

    /// Raw RSA over an arbitrary block, for forging test inputs.
    fn raw_sign(em: &[u8], key: &RsaPrivateKey) -> Vec<u8> {
        let m = bigint::from_be_bytes(em);
        let c = bigint::mod_pow(&m, key.private_exponent(), key.modulus());
        bigint::to_be_bytes_padded(&c, key.size())
    }

    #[test]
    fn test_known_answer_sha256() {
        let signature = sign(DigestId::Sha256, testdata::MESSAGE, &private_1024()).unwrap();
        assert_eq!(hex::encode(&signature), testdata::SIG_SHA256_1024);

        let expected = hex::decode(testdata::SIG_SHA256_1024).unwrap();
        assert!(verify(DigestId::Sha256, testdata::MESSAGE, &expected, &public_1024()).unwrap());
    }

    #[test]
    fn test_known_answer_sha1() {
        let signature = sign(DigestId::Sha1, testdata::MESSAGE, &private_1024()).unwrap();
        assert_eq!(hex::encode(&signature), testdata::SIG_SHA1_1024);
    }

    #[test]
    fn test_round_trip_all_digests() {
        let private = private_1024();
        let public = public_1024();
        for digest in DigestId::ALL {
            let signature = sign(digest, b"round trip", &private).unwrap();
            assert_eq!(signature.len(), 128, "{}", digest);
            assert!(verify(digest, b"round trip", &signature, &public).unwrap(), "{}", digest);
            assert!(!verify(digest, b"round trip!", &signature, &public).unwrap(), "{}", digest);
        }
    }

    #[test]
    fn test_round_trip_512_bit_key() {
        let private = RsaPrivateKey::from_der(&testdata::private_512()).unwrap();
        let public = RsaPublicKey::from_der(&testdata::public_512()).unwrap();
        let signature = sign(DigestId::Sha256, b"short key", &private).unwrap();
        assert_eq!(signature.len(), 64);
        assert!(verify(DigestId::Sha256, b"short key", &signature, &public).unwrap());
    }

    #[test]
    fn test_single_bit_flips_rejected() {
        let public = public_1024();
        let signature = hex::decode(testdata::SIG_SHA256_1024).unwrap();
        for byte in (0..signature.len()).step_by(7).chain([signature.len() - 1]) {
            for bit in [0u8, 3, 7] {
                let mut tampered = signature.clone();
                tampered[byte] ^= 1 << bit;
                assert!(
                    !verify(DigestId::Sha256, testdata::MESSAGE, &tampered, &public).unwrap(),
                    "flip at byte {} bit {}",
                    byte,
                    bit
                );
            }
        }
    }

    #[test]
    fn test_hash_region_bit_flips_rejected() {
        // Flip bits inside the encoded hash itself, then sign the tampered block.
        let private = private_1024();
        let public = public_1024();
        let hash = DigestId::Sha256.digest(testdata::MESSAGE);
        let em = encode_block(DigestId::Sha256, &hash, 128);
        for pos in 128 - hash.len()..128 {
            let mut tampered = em.clone();
            tampered[pos] ^= 0x01;
            let signature = raw_sign(&tampered, &private);
            assert!(!verify(DigestId::Sha256, testdata::MESSAGE, &signature, &public).unwrap());
        }
    }

    #[test]
    fn test_prefix_swap_rejected() {
        // ripemd160 and sha1 share prefix and hash lengths.
        let private = private_1024();
        let public = public_1024();
        let hash = DigestId::Sha1.digest(testdata::MESSAGE);
        let mut em = encode_block(DigestId::Sha1, &hash, 128);
        let prefix_start = 128 - DigestId::Sha1.encoded_len();
        em[prefix_start..128 - hash.len()]
            .copy_from_slice(DigestId::Ripemd160.digest_info_prefix());

        let forged = raw_sign(&em, &private);
        assert_eq!(
            verify(DigestId::Sha1, testdata::MESSAGE, &forged, &public),
            Ok(false)
        );
    }

    #[test]
    fn test_padding_defects_rejected() {
        let private = private_1024();
        let public = public_1024();
        let hash = DigestId::Sha256.digest(testdata::MESSAGE);
        let em = encode_block(DigestId::Sha256, &hash, 128);
        let separator = 128 - DigestId::Sha256.encoded_len() - 1;

        let mut wrong_type = em.clone();
        wrong_type[1] = 0x02;
        let mut short_run = em.clone();
        short_run[2] = 0xfe;
        let mut late_run = em.clone();
        late_run[separator - 1] = 0x00;
        let mut no_separator = em.clone();
        no_separator[separator] = 0xff;

        for block in [wrong_type, short_run, late_run, no_separator] {
            let signature = raw_sign(&block, &private);
            assert!(!verify(DigestId::Sha256, testdata::MESSAGE, &signature, &public).unwrap());
        }
    }

    #[test]
    fn test_encode_block_layout() {
        let hash = [0xabu8; 32];
        let em = encode_block(DigestId::Sha256, &hash, 64);
        assert_eq!(em.len(), 64);
        assert_eq!(&em[..2], &[0x00, 0x01]);
        // 64 - 51 - 3 = 10 bytes of 0xFF
        assert!(em[2..12].iter().all(|b| *b == 0xff));
        assert_eq!(em[12], 0x00);
        assert_eq!(&em[13..32], DigestId::Sha256.digest_info_prefix());
        assert_eq!(&em[32..], &hash);
        assert!(bool::from(check_block(DigestId::Sha256, &hash, &em)));
    }

    #[test]
    fn test_key_too_small() {
        let private = RsaPrivateKey::from_der(&testdata::private_512()).unwrap();
        let public = RsaPublicKey::from_der(&testdata::public_512()).unwrap();
        // sha512: 19 + 64 + 11 = 94 > 64
        assert_eq!(
            sign(DigestId::Sha512, b"msg", &private),
            Err(Error::KeyTooSmall {
                required: 94,
                actual: 64
            })
        );
        assert_eq!(
            verify(DigestId::Sha512, b"msg", &[0u8; 64], &public),
            Err(Error::KeyTooSmall {
                required: 94,
                actual: 64
            })
        );
    }

    #[test]
    fn test_sha256_minimum_modulus() {
        // 19-byte prefix + 32-byte hash + 11 = 62 bytes.
        let e = BigUint::from(3u32);
        let too_small = RsaPublicKey::new(bigint::from_be_bytes(&[0xff; 61]), e.clone()).unwrap();
        assert_eq!(
            verify(DigestId::Sha256, b"msg", &[1], &too_small),
            Err(Error::KeyTooSmall {
                required: 62,
                actual: 61
            })
        );

        let just_enough = RsaPublicKey::new(bigint::from_be_bytes(&[0xff; 62]), e).unwrap();
        let mut one = [0u8; 62];
        one[61] = 1;
        assert_eq!(verify(DigestId::Sha256, b"msg", &one, &just_enough), Ok(false));
    }

    #[test]
    fn test_oversized_signature_is_mismatch() {
        let public = public_1024();
        let signature = [0xffu8; 129];
        assert_eq!(
            verify(DigestId::Sha256, testdata::MESSAGE, &signature, &public),
            Ok(false)
        );
        assert_eq!(verify(DigestId::Sha256, testdata::MESSAGE, &[], &public), Ok(false));
    }

    #[test]
    fn test_unreduced_signature_rejected() {
        let public = public_1024();
        let signature = hex::decode(testdata::SIG_SHA256_1024).unwrap();
        let s = bigint::from_be_bytes(&signature);

        // s + n is another representative of the same residue.
        let shifted = bigint::to_be_bytes_padded(&(&s + public.modulus()), 128);
        assert_eq!(shifted.len(), 128);
        assert_eq!(
            verify(DigestId::Sha256, testdata::MESSAGE, &shifted, &public),
            Ok(false)
        );

        let modulus_bytes = bigint::to_be_bytes_padded(public.modulus(), 128);
        assert_eq!(
            verify(DigestId::Sha256, testdata::MESSAGE, &modulus_bytes, &public),
            Ok(false)
        );
    }

    #[test]
    fn test_signature_length_must_equal_modulus_length() {
        let public = public_1024();
        let signature = hex::decode(testdata::SIG_SHA256_1024).unwrap();

        let mut long = vec![0u8];
        long.extend_from_slice(&signature);
        assert_eq!(
            verify(DigestId::Sha256, testdata::MESSAGE, &long, &public),
            Ok(false)
        );
        assert_eq!(
            verify(DigestId::Sha256, testdata::MESSAGE, &signature[1..], &public),
            Ok(false)
        );
        assert_eq!(
            verify(DigestId::Sha256, testdata::MESSAGE, &signature, &public),
            Ok(true)
        );
    }

    #[test]
    fn test_block_must_reduce() {
        let modulus = BigUint::from(1000u32);
        assert_eq!(check_reduces(&BigUint::from(999u32), &modulus), Ok(()));
        assert_eq!(
            check_reduces(&BigUint::from(1000u32), &modulus),
            Err(Error::DecryptionError)
        );
    }

    #[test]
    fn test_digest_variants() {
        let hash = DigestId::Sha384.digest(b"prehashed");
        let signature = sign_digest(DigestId::Sha384, &hash, &private_1024()).unwrap();
        assert!(verify(DigestId::Sha384, b"prehashed", &signature, &public_1024()).unwrap());
        assert!(verify_digest(DigestId::Sha384, &hash, &signature, &public_1024()).unwrap());
        assert_eq!(
            sign_digest(DigestId::Sha384, &hash[..47], &private_1024()),
            Err(Error::InvalidDigestLength {
                expected: 48,
                actual: 47
            })
        );
    }
}
