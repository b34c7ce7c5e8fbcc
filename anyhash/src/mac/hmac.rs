//! Hash-Based Message Authentication Codes `HMAC` ([`RFC 2104`][1]).
//!
//! Generic over any [`Digester`], so every registered fixed-output hash function gets `HMAC` for
//! free.
//!
//! [1]: https://www.rfc-editor.org/rfc/rfc2104
use alloc::vec;
use alloc::vec::Vec;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{fail, Error, Result};
use crate::hash::Digester;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// A streaming `HMAC` computation.
///
/// # Example
///
/// ```
/// use anyhash::{mac::Hmac, HashId};
///
/// let sha = HashId::SHA256.get_hash_function().unwrap();
///
/// let mut mac = Hmac::new(&sha, b"Jefe");
/// mac.update(b"what do ya want ")
///    .update(b"for nothing?");
///
/// assert_eq!(
///     mac.finalize(),
///     hex_literal::hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
/// );
/// ```
pub struct Hmac<D: Digester> {
    inner: D,
    outer: D,
}

impl<D: Digester> Hmac<D> {
    /// Keys a new `HMAC` over `hash`. Only the algorithm of `hash` is used, not its state.
    ///
    /// # Errors
    ///
    /// [`Error::HmacKeyTooLong`] if `key` is longer than the block size of `hash`. Long keys are
    /// not implicitly hashed.
    pub fn try_new(hash: &D, key: &[u8]) -> Result<Self> {
        let block_size = hash.block_size();
        if key.len() > block_size {
            return Err(Error::HmacKeyTooLong { key_len: key.len(), block_size });
        }
        Ok(Self::keyed(hash, key))
    }

    /// Keys a new `HMAC` over `hash`.
    ///
    /// # Panics
    ///
    /// If `key` is longer than the block size, see [`try_new`](Self::try_new).
    #[track_caller]
    pub fn new(hash: &D, key: &[u8]) -> Self {
        Self::try_new(hash, key).unwrap_or_else(|err| fail(err))
    }

    /// Keys a new `HMAC` over `hash`, hashing keys longer than a block first as RFC 2104 does.
    ///
    /// HKDF keys `HMAC` with caller-provided salts and pseudorandom keys, so it needs this form.
    pub(crate) fn new_with_any_key(hash: &D, key: &[u8]) -> Self {
        if key.len() > hash.block_size() {
            let mut h = hash.fresh();
            h.update(key);
            let hashed = Zeroizing::new(h.sum(&[]));
            Self::keyed(hash, &hashed)
        } else {
            Self::keyed(hash, key)
        }
    }

    fn keyed(hash: &D, key: &[u8]) -> Self {
        let mut pad = Zeroizing::new(vec![0u8; hash.block_size()]);
        pad[..key.len()].copy_from_slice(key);

        pad.iter_mut().for_each(|b| *b ^= IPAD);
        let mut inner = hash.fresh();
        inner.update(&pad);

        pad.iter_mut().for_each(|b| *b ^= IPAD ^ OPAD);
        let mut outer = hash.fresh();
        outer.update(&pad);

        Self { inner, outer }
    }

    /// Absorbs `data` into the authenticated message.
    #[inline]
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Returns the authentication tag.
    #[must_use]
    pub fn finalize(mut self) -> Vec<u8> {
        let inner = Zeroizing::new(self.inner.sum(&[]));
        self.outer.update(&inner);
        self.outer.sum(&[])
    }

    /// Compares the authentication tag against `tag` in constant time.
    ///
    /// A `tag` of the wrong length never matches.
    #[must_use]
    pub fn verify(self, tag: &[u8]) -> bool {
        self.finalize().as_slice().ct_eq(tag).into()
    }
}

/// One-shot `HMAC(key, message)` over `hash`.
///
/// # Errors
///
/// [`Error::HmacKeyTooLong`] if `key` is longer than the block size of `hash`.
pub fn hmac<D: Digester>(hash: &D, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::try_new(hash, key)?;
    mac.update(message);
    Ok(mac.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashId;
    use digest::Digest;
    use hex_literal::hex;
    use ::hmac::Mac;
    use proptest::prelude::*;

    /// A bare RustCrypto digest, to show nothing is tied to [`crate::Fixed`].
    struct Rc<H>(H);

    impl<H: Digest + Clone + digest::crypto_common::BlockSizeUser> Digester for Rc<H> {
        fn update(&mut self, data: &[u8]) { Digest::update(&mut self.0, data); }
        fn sum(&self, prefix: &[u8]) -> Vec<u8> {
            let mut out = prefix.to_vec();
            out.extend_from_slice(&self.0.clone().finalize());
            out
        }
        fn size(&self) -> usize { <H as Digest>::output_size() }
        fn block_size(&self) -> usize { H::block_size() }
        fn fresh(&self) -> Self { Self(H::new()) }
    }

    #[test]
    fn rfc_4231_case_2() {
        let sha256 = HashId::SHA256.get_hash_function().unwrap();
        let sha512 = HashId::SHA512.get_hash_function().unwrap();

        assert_eq!(
            hmac(&sha256, b"what do ya want for nothing?", b"Jefe").unwrap(),
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );
        assert_eq!(
            hmac(&sha512, b"what do ya want for nothing?", b"Jefe").unwrap(),
            hex!(
                "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
                "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
            )
        );
    }

    #[test]
    fn generic_over_digester() {
        let ours = hmac(&Rc(sha2::Sha256::new()), b"message", b"key").unwrap();
        let registry = hmac(&HashId::SHA256.get_hash_function().unwrap(), b"message", b"key").unwrap();

        assert_eq!(ours, registry);
    }

    #[test]
    fn key_at_block_size() {
        let sha = HashId::SHA3_512.get_hash_function().unwrap();
        assert!(Hmac::try_new(&sha, &[1u8; 72]).is_ok());
        assert_eq!(
            Hmac::try_new(&sha, &[1u8; 73]).err().map(|e| e.to_string()),
            Some("hmac key length is larger than hash block size: 73 > 72".into())
        );
    }

    #[test]
    fn long_keys_are_hashed_internally() {
        let sha = HashId::SHA256.get_hash_function().unwrap();
        let key = [0xaau8; 131];

        let mut ours = Hmac::new_with_any_key(&sha, &key);
        ours.update(b"Test Using Larger Than Block-Size Key - Hash Key First");

        assert_eq!(
            ours.finalize(),
            hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
        );
    }

    #[test]
    fn verify_rejects_truncated() {
        let sha = HashId::SHA384.get_hash_function().unwrap();
        let tag = hmac(&sha, b"data", b"key").unwrap();

        let mut mac = Hmac::new(&sha, b"key");
        mac.update(b"data");
        assert!(!mac.verify(&tag[..47]));

        let mut mac = Hmac::new(&sha, b"key");
        mac.update(b"data");
        assert!(mac.verify(&tag));
    }

    proptest! {
        #[test]
        fn rust_crypto_equivalence_sha256(
            key in proptest::collection::vec(any::<u8>(), 0..=64),
            msg in proptest::collection::vec(any::<u8>(), 0..512)
        ) {
            let sha = HashId::SHA256.get_hash_function().unwrap();
            let ours = hmac(&sha, &msg, &key).unwrap();

            let mut theirs = ::hmac::Hmac::<sha2::Sha256>::new_from_slice(&key).unwrap();
            theirs.update(&msg);

            let theirs = theirs.finalize().into_bytes();
            prop_assert_eq!(ours.as_slice(), theirs.as_slice());
        }

        #[test]
        fn rust_crypto_equivalence_sha3_384(
            key in proptest::collection::vec(any::<u8>(), 0..=104),
            msg in proptest::collection::vec(any::<u8>(), 0..512)
        ) {
            let sha = HashId::SHA3_384.get_hash_function().unwrap();
            let ours = hmac(&sha, &msg, &key).unwrap();

            let mut theirs = ::hmac::Hmac::<sha3::Sha3_384>::new_from_slice(&key).unwrap();
            theirs.update(&msg);

            let theirs = theirs.finalize().into_bytes();
            prop_assert_eq!(ours.as_slice(), theirs.as_slice());
        }
    }
}
