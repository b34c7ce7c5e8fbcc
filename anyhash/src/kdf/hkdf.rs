//! The `HMAC` Key Derivation Function (`HKDF`).
//!
//! This module provides an implementation of HKDF as specified in [`RFC 5869`][1], generic over
//! any [`Digester`]. The functions here apply no policy, [`Fixed::hkdf`] and friends layer the
//! restricted mode on top.
//!
//! [1]: https://www.rfc-editor.org/rfc/rfc5869
//! [`Fixed::hkdf`]: crate::Fixed::hkdf
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hash::Digester;
use crate::mac::Hmac;

/// HKDF-Expand produces at most this many blocks of output.
pub const MAX_BLOCKS: usize = 255;

/// The largest output [`expand`] can produce for a digest of `size` bytes.
#[inline]
#[must_use]
pub const fn max_output(size: usize) -> usize {
    MAX_BLOCKS * size
}

/// `PRK = HMAC(salt, secret)`.
///
/// An empty `salt` is replaced by `hash.size()` zero bytes, salts longer than a block are hashed.
///
/// # Example
///
/// ```
/// use anyhash::{kdf::hkdf, HashId};
///
/// let sha = HashId::SHA256.get_hash_function().unwrap();
/// let prk = hkdf::extract(&sha, &[0x0b; 22], &hex_literal::hex!("000102030405060708090a0b0c"));
///
/// assert_eq!(
///     prk,
///     hex_literal::hex!("077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5")
/// );
/// ```
#[must_use]
pub fn extract<D: Digester>(hash: &D, secret: &[u8], salt: &[u8]) -> Vec<u8> {
    let zeros;
    let salt = if salt.is_empty() {
        zeros = vec![0u8; hash.size()];
        zeros.as_slice()
    } else {
        salt
    };

    let mut mac = Hmac::new_with_any_key(hash, salt);
    mac.update(secret);
    mac.finalize()
}

/// `OKM = T(1) || T(2) || ...` truncated to `length` bytes, where
/// `T(i) = HMAC(prk, T(i - 1) || info || i)`.
///
/// A `length` of `0` derives `hash.size()` bytes.
///
/// # Errors
///
/// [`Error::InvalidLength`] if `length` exceeds [`max_output`] of the digest size.
pub fn expand<D: Digester>(hash: &D, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
    let size = hash.size();
    let length = if length == 0 { size } else { length };
    let max = max_output(size);

    if length > max {
        return Err(Error::InvalidLength { requested: length, max });
    }

    let mut okm = Vec::with_capacity(length);
    let mut previous = Zeroizing::new(Vec::new());

    for counter in 1..=(MAX_BLOCKS as u8) {
        if okm.len() >= length {
            break;
        }

        let mut mac = Hmac::new_with_any_key(hash, prk);
        mac.update(&previous).update(info).update(&[counter]);
        let block = Zeroizing::new(mac.finalize());

        let take = (length - okm.len()).min(block.len());
        okm.extend_from_slice(&block[..take]);
        previous = block;
    }

    Ok(okm)
}

/// [`extract`] followed by [`expand`], the intermediate key is zeroed on drop.
///
/// # Errors
///
/// See [`expand`].
pub fn derive<D: Digester>(
    hash: &D,
    secret: &[u8],
    salt: &[u8],
    info: &[u8],
    length: usize
) -> Result<Vec<u8>> {
    let prk = Zeroizing::new(extract(hash, secret, salt));
    expand(hash, &prk, info, length)
}
