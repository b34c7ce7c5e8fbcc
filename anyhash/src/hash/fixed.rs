use alloc::vec::Vec;
use core::fmt;

use crate::error::{fail, Error, Result};
use crate::hash::{Digester, Extendable, Hasher};
use crate::kdf::hkdf;
use crate::mac::Hmac;
use crate::policy::Mode;
use crate::registry::{BoxedDigest, Metadata};
use crate::HashId;

/// A fixed-output hash function.
///
/// Besides the [`Hasher`] contract, `Fixed` carries the derived constructions: [`hmac`],
/// [`hkdf_extract`], [`hkdf_expand`] and [`hkdf`]. HKDF honours the instance's [`Mode`].
///
/// # Example
///
/// ```
/// use anyhash::HashId;
///
/// let mut sha = HashId::SHA256.get_hash_function().unwrap();
/// sha.update(b"a");
/// sha.update(b"bc");
///
/// assert_eq!(
///     sha.sum(&[]),
///     hex_literal::hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
/// );
/// ```
///
/// [`hmac`]: Fixed::hmac
/// [`hkdf_extract`]: Fixed::hkdf_extract
/// [`hkdf_expand`]: Fixed::hkdf_expand
/// [`hkdf`]: Fixed::hkdf
pub struct Fixed {
    meta: &'static Metadata,
    make: fn() -> BoxedDigest,
    inner: BoxedDigest,
    mode: Mode,
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixed")
            .field("algorithm", &self.meta.name)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Fixed {
    pub(crate) fn from_parts(meta: &'static Metadata, make: fn() -> BoxedDigest) -> Self {
        Self { meta, make, inner: make(), mode: Mode::default() }
    }

    /// Returns the hasher with the HKDF policy set to `mode`.
    #[inline]
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the HKDF policy.
    #[inline]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The HKDF policy of this instance.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The identifier of the underlying hash function.
    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> HashId {
        self.meta.id
    }

    /// The registry metadata of the underlying hash function.
    #[inline]
    #[must_use]
    pub const fn metadata(&self) -> &'static Metadata {
        self.meta
    }

    /// Absorbs `data`.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Appends the digest of everything absorbed so far to `prefix`.
    ///
    /// The state is left untouched, more data may be absorbed afterwards.
    #[must_use]
    pub fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        let digest = self.inner.box_clone().finalize();
        let mut out = Vec::with_capacity(prefix.len() + digest.len());
        out.extend_from_slice(prefix);
        out.extend_from_slice(&digest);
        out
    }

    /// Returns the digest.
    ///
    /// `size` only guards against reading less than a digest, any `size` at or above
    /// [`size`](Self::size) yields exactly the digest. The state is not modified.
    ///
    /// # Errors
    ///
    /// [`Error::OutputTooSmall`] if `size` is smaller than the digest.
    pub fn try_read(&self, size: usize) -> Result<Vec<u8>> {
        if size < self.size() {
            return Err(Error::OutputTooSmall { requested: size, minimum: self.size() });
        }
        Ok(self.sum(&[]))
    }

    /// Returns the digest.
    ///
    /// # Panics
    ///
    /// If `size` is smaller than the digest, see [`try_read`](Self::try_read).
    #[track_caller]
    #[must_use]
    pub fn read(&self, size: usize) -> Vec<u8> {
        self.try_read(size).unwrap_or_else(|err| fail(err))
    }

    /// Resets the state, absorbs every input in order, and returns the digest.
    pub fn hash<I, T>(&mut self, inputs: I) -> Vec<u8>
        where I: IntoIterator<Item = T>,
              T: AsRef<[u8]>
    {
        self.reset();
        for input in inputs {
            self.update(input.as_ref());
        }
        self.sum(&[])
    }

    /// Returns to the initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Digest size in bytes.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.meta.output_size
    }

    /// Block size in bytes.
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.meta.block_size
    }

    /// Does nothing, the digest size of a fixed-output hash function cannot change.
    #[inline]
    pub fn set_output_size(&mut self, _size: usize) {}

    /// Returns `Some(self)`.
    #[inline]
    #[must_use]
    pub const fn get_hash_function(&self) -> Option<&Self> {
        Some(self)
    }

    /// Returns `None`.
    #[inline]
    #[must_use]
    pub const fn get_xof(&self) -> Option<&Extendable> {
        None
    }

    /// A new instance of the same hash function and mode, in its initial state.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Self { meta: self.meta, make: self.make, inner: (self.make)(), mode: self.mode }
    }

    /// Computes `HMAC(key, message)`.
    ///
    /// # Errors
    ///
    /// [`Error::HmacKeyTooLong`] if `key` is longer than the block size.
    pub fn try_hmac(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let mut mac = Hmac::try_new(self, key)?;
        mac.update(message);
        Ok(mac.finalize())
    }

    /// Computes `HMAC(key, message)`.
    ///
    /// # Panics
    ///
    /// If `key` is longer than the block size. Hash long keys first, or use
    /// [`try_hmac`](Self::try_hmac).
    #[track_caller]
    #[must_use]
    pub fn hmac(&self, message: &[u8], key: &[u8]) -> Vec<u8> {
        self.try_hmac(message, key).unwrap_or_else(|err| fail(err))
    }

    /// Checks `tag` against `HMAC(key, message)` in constant time.
    ///
    /// # Errors
    ///
    /// [`Error::HmacKeyTooLong`] if `key` is longer than the block size.
    pub fn verify_hmac(&self, message: &[u8], key: &[u8], tag: &[u8]) -> Result<bool> {
        let mut mac = Hmac::try_new(self, key)?;
        mac.update(message);
        Ok(mac.verify(tag))
    }

    /// HKDF-Extract (RFC 5869): derives a pseudorandom key of [`size`](Self::size) bytes.
    ///
    /// An empty `salt` is replaced by [`size`](Self::size) zero bytes.
    ///
    /// # Errors
    ///
    /// Under [`Mode::Fips140`], [`Error::UnapprovedHash`] or [`Error::ShortKey`].
    pub fn hkdf_extract(&self, secret: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        self.mode.check_extract(self.algorithm(), secret.len())?;
        Ok(hkdf::extract(self, secret, salt))
    }

    /// HKDF-Expand (RFC 5869): derives `length` bytes of keying material from `prk`.
    ///
    /// A `length` of `0` derives [`size`](Self::size) bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLength`] if `length` exceeds `255 * size`.
    /// - [`Error::UnapprovedHash`] under [`Mode::Fips140`].
    pub fn hkdf_expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
        self.mode.check_hash(self.algorithm())?;
        hkdf::expand(self, prk, info, length)
    }

    /// Extract followed by expand.
    ///
    /// # Errors
    ///
    /// See [`hkdf_extract`](Self::hkdf_extract) and [`hkdf_expand`](Self::hkdf_expand).
    pub fn hkdf(&self, secret: &[u8], salt: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
        self.mode.check_extract(self.algorithm(), secret.len())?;
        hkdf::derive(self, secret, salt, info, length)
    }
}

impl Digester for Fixed {
    #[inline]
    fn update(&mut self, data: &[u8]) { Self::update(self, data); }
    #[inline]
    fn sum(&self, prefix: &[u8]) -> Vec<u8> { Self::sum(self, prefix) }
    #[inline]
    fn size(&self) -> usize { Self::size(self) }
    #[inline]
    fn block_size(&self) -> usize { Self::block_size(self) }
    #[inline]
    fn fresh(&self) -> Self { Self::fresh(self) }
}

impl Hasher for Fixed {
    #[inline]
    fn algorithm(&self) -> HashId { Self::algorithm(self) }
    #[inline]
    fn update(&mut self, data: &[u8]) { Self::update(self, data); }
    #[inline]
    fn try_read(&mut self, size: usize) -> Result<Vec<u8>> { Self::try_read(self, size) }
    #[inline]
    fn sum(&mut self, prefix: &[u8]) -> Vec<u8> { Self::sum(self, prefix) }
    #[inline]
    fn hash<I, T>(&mut self, inputs: I) -> Vec<u8>
        where I: IntoIterator<Item = T>,
              T: AsRef<[u8]>
    {
        Self::hash(self, inputs)
    }
    #[inline]
    fn reset(&mut self) { Self::reset(self); }
    #[inline]
    fn size(&self) -> usize { Self::size(self) }
    #[inline]
    fn block_size(&self) -> usize { Self::block_size(self) }
    #[inline]
    fn set_output_size(&mut self, size: usize) { Self::set_output_size(self, size); }
    #[inline]
    fn get_hash_function(&self) -> Option<&Self> { Self::get_hash_function(self) }
    #[inline]
    fn get_xof(&self) -> Option<&Extendable> { Self::get_xof(self) }
}
