use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{fail, Error, Result};
use crate::hash::sponge::BoxedSponge;
use crate::hash::{Fixed, Hasher};
use crate::registry::Metadata;
use crate::HashId;

/// An extendable-output function.
///
/// An instance starts absorbing; the first [`read`](Self::read) or [`sum`](Self::sum) switches it
/// to squeezing, after which output keeps streaming until [`reset`](Self::reset) and further input
/// is refused. [`size`](Self::size) is both the length [`hash`](Self::hash) returns and the
/// smallest read permitted.
///
/// For BLAKE2X the size is also encoded into the primitive, so [`set_output_size`] changes the
/// output itself and bounds how much can be read in total. SHAKE output does not depend on it.
///
/// # Example
///
/// ```
/// use anyhash::HashId;
///
/// let mut shake = HashId::SHAKE128.get_xof().unwrap();
/// let digest = shake.hash([b"".as_slice()]);
///
/// assert_eq!(
///     digest,
///     hex_literal::hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
/// );
/// ```
///
/// [`set_output_size`]: Self::set_output_size
pub struct Extendable {
    meta: &'static Metadata,
    make: fn(usize) -> Result<BoxedSponge>,
    sponge: BoxedSponge,
    size: usize,
}

impl fmt::Debug for Extendable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extendable")
            .field("algorithm", &self.meta.name)
            .field("size", &self.size)
            .field("squeezing", &self.sponge.is_squeezing())
            .finish_non_exhaustive()
    }
}

impl Extendable {
    pub(crate) fn from_parts(
        meta: &'static Metadata,
        make: fn(usize) -> Result<BoxedSponge>,
        sponge: BoxedSponge,
        size: usize
    ) -> Self {
        Self { meta, make, sponge, size }
    }

    /// The identifier of the underlying XOF.
    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> HashId {
        self.meta.id
    }

    /// The registry metadata of the underlying XOF.
    #[inline]
    #[must_use]
    pub const fn metadata(&self) -> &'static Metadata {
        self.meta
    }

    /// Absorbs `data`.
    ///
    /// # Errors
    ///
    /// [`Error::WriteAfterRead`] if output was read since the last reset.
    #[inline]
    pub fn try_update(&mut self, data: &[u8]) -> Result<()> {
        self.sponge.absorb(data)
    }

    /// Absorbs `data`.
    ///
    /// # Panics
    ///
    /// If output was read since the last reset.
    #[track_caller]
    pub fn update(&mut self, data: &[u8]) {
        self.try_update(data).unwrap_or_else(|err| fail(err));
    }

    /// Returns the next `size` bytes of the output stream.
    ///
    /// # Errors
    ///
    /// - [`Error::OutputTooSmall`] if `size` is below [`size`](Self::size).
    /// - [`Error::XofExhausted`] if a bounded BLAKE2X output has fewer than `size` bytes left.
    pub fn try_read(&mut self, size: usize) -> Result<Vec<u8>> {
        if size < self.size {
            return Err(Error::OutputTooSmall { requested: size, minimum: self.size });
        }

        let mut out = vec![0u8; size];
        self.sponge.squeeze(&mut out)?;
        Ok(out)
    }

    /// Returns the next `size` bytes of the output stream.
    ///
    /// # Panics
    ///
    /// See [`try_read`](Self::try_read).
    #[track_caller]
    pub fn read(&mut self, size: usize) -> Vec<u8> {
        self.try_read(size).unwrap_or_else(|err| fail(err))
    }

    /// Appends the next [`size`](Self::size) bytes of the output stream to `prefix`.
    ///
    /// # Errors
    ///
    /// [`Error::XofExhausted`] if a bounded BLAKE2X output is used up.
    pub fn try_sum(&mut self, prefix: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(prefix.len() + self.size);
        out.extend_from_slice(prefix);
        out.resize(prefix.len() + self.size, 0);

        self.sponge.squeeze(&mut out[prefix.len()..])?;
        Ok(out)
    }

    /// Appends the next [`size`](Self::size) bytes of the output stream to `prefix`.
    ///
    /// # Panics
    ///
    /// See [`try_sum`](Self::try_sum).
    #[track_caller]
    pub fn sum(&mut self, prefix: &[u8]) -> Vec<u8> {
        self.try_sum(prefix).unwrap_or_else(|err| fail(err))
    }

    /// Resets the state, absorbs every input in order, and returns [`size`](Self::size) bytes.
    pub fn hash<I, T>(&mut self, inputs: I) -> Vec<u8>
        where I: IntoIterator<Item = T>,
              T: AsRef<[u8]>
    {
        self.reset();
        for input in inputs {
            self.update(input.as_ref());
        }
        self.read(self.size)
    }

    /// Returns to the absorbing state. The output size is kept.
    #[inline]
    pub fn reset(&mut self) {
        self.sponge.reset();
    }

    /// The current output size in bytes.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Block size (rate) in bytes.
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.meta.block_size
    }

    /// Sets the output size, discarding any absorbed input.
    ///
    /// The primitive is rebuilt in its initial state. For BLAKE2X the new size becomes the
    /// declared output length.
    ///
    /// # Errors
    ///
    /// - [`Error::OutputTooSmall`] if `size` is `0`.
    /// - [`Error::XofLengthTooLarge`] if BLAKE2X cannot encode `size`.
    pub fn try_set_output_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(Error::OutputTooSmall { requested: 0, minimum: 1 });
        }

        self.sponge = (self.make)(size)?;
        self.size = size;

        tracing::trace!(algorithm = self.meta.name, size, "xof output size changed");
        Ok(())
    }

    /// Sets the output size, discarding any absorbed input.
    ///
    /// # Panics
    ///
    /// See [`try_set_output_size`](Self::try_set_output_size).
    #[track_caller]
    pub fn set_output_size(&mut self, size: usize) {
        self.try_set_output_size(size).unwrap_or_else(|err| fail(err));
    }

    /// Returns `None`.
    #[inline]
    #[must_use]
    pub const fn get_hash_function(&self) -> Option<&Fixed> {
        None
    }

    /// Returns `Some(self)`.
    #[inline]
    #[must_use]
    pub const fn get_xof(&self) -> Option<&Self> {
        Some(self)
    }

    /// Returns `true` once output has been read since the last reset.
    #[inline]
    #[must_use]
    pub fn is_squeezing(&self) -> bool {
        self.sponge.is_squeezing()
    }
}

impl Hasher for Extendable {
    #[inline]
    fn algorithm(&self) -> HashId { Self::algorithm(self) }
    #[track_caller]
    fn update(&mut self, data: &[u8]) { Self::update(self, data); }
    #[inline]
    fn try_read(&mut self, size: usize) -> Result<Vec<u8>> { Self::try_read(self, size) }
    #[track_caller]
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
    #[track_caller]
    fn set_output_size(&mut self, size: usize) { Self::set_output_size(self, size); }
    #[inline]
    fn get_hash_function(&self) -> Option<&Fixed> { Self::get_hash_function(self) }
    #[inline]
    fn get_xof(&self) -> Option<&Self> { Self::get_xof(self) }
}
