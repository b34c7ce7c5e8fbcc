//! Hashers: the common contract and its two adapters.
//!
//! [`Fixed`] wraps fixed-digest primitives, [`Extendable`] wraps extendable-output functions, and
//! [`AnyHasher`] is the tagged variant the registry hands out. All three implement [`Hasher`], so
//! generic code can drive either class with the same calls.
//!
//! # Example
//!
//! ```
//! use anyhash::{HashId, Hasher};
//!
//! fn digest_of<H: Hasher>(hasher: &mut H, parts: &[&[u8]]) -> Vec<u8> {
//!     hasher.hash(parts.iter())
//! }
//!
//! let mut sha = HashId::SHA3_256.new();
//! let mut shake = HashId::SHAKE256.new();
//!
//! assert_eq!(digest_of(&mut sha, &[b"a", b"b"]).len(), 32);
//! assert_eq!(digest_of(&mut shake, &[b"a", b"b"]).len(), 64);
//! ```

pub(crate) mod blake2x;
mod extendable;
mod fixed;
pub(crate) mod sponge;

use alloc::vec::Vec;

pub use extendable::Extendable;
pub use fixed::Fixed;

use crate::error::{fail, Result};
use crate::HashId;

/// The operations shared by every hasher.
///
/// Programmer errors (requesting less output than the instance guarantees, exceeding a
/// primitive's output ceiling, absorbing after reading from a XOF) panic, their `try_`
/// counterparts return the [`Error`](crate::Error) instead.
pub trait Hasher {
    /// The identifier of the underlying primitive.
    fn algorithm(&self) -> HashId;

    /// Absorbs `data` into the state.
    ///
    /// # Panics
    ///
    /// For XOFs, if output has already been read since the last reset.
    fn update(&mut self, data: &[u8]);

    /// Returns `size` bytes of output.
    ///
    /// # Errors
    ///
    /// - `size` is smaller than [`size`](Self::size).
    /// - A XOF configured with a bounded output length has no more output.
    fn try_read(&mut self, size: usize) -> Result<Vec<u8>>;

    /// Returns `size` bytes of output, panicking where [`try_read`](Self::try_read) errors.
    #[track_caller]
    fn read(&mut self, size: usize) -> Vec<u8> {
        self.try_read(size).unwrap_or_else(|err| fail(err))
    }

    /// Appends [`size`](Self::size) bytes of output to `prefix`.
    fn sum(&mut self, prefix: &[u8]) -> Vec<u8>;

    /// Resets the state, absorbs every input in order, and returns [`size`](Self::size) bytes.
    fn hash<I, T>(&mut self, inputs: I) -> Vec<u8>
        where I: IntoIterator<Item = T>,
              T: AsRef<[u8]>
    {
        self.reset();
        for input in inputs {
            self.update(input.as_ref());
        }
        self.read(self.size())
    }

    /// Returns to the initial absorbing state.
    fn reset(&mut self);

    /// The number of bytes [`hash`](Self::hash) returns.
    fn size(&self) -> usize;

    /// The block size of the underlying primitive in bytes.
    fn block_size(&self) -> usize;

    /// Changes the output size of a XOF. No-op for fixed-output hashers.
    fn set_output_size(&mut self, size: usize);

    /// `Some` for fixed-output hashers, `None` for XOFs.
    fn get_hash_function(&self) -> Option<&Fixed>;

    /// `Some` for XOFs, `None` for fixed-output hashers.
    fn get_xof(&self) -> Option<&Extendable>;
}

/// The capabilities HMAC and HKDF need from a fixed-output hash function.
///
/// Implemented by [`Fixed`], and implementable for any other digest to reuse [`Hmac`] and the
/// [`hkdf`] functions.
///
/// [`Hmac`]: crate::mac::Hmac
/// [`hkdf`]: crate::kdf::hkdf
pub trait Digester: Sized {
    /// Absorbs `data`.
    fn update(&mut self, data: &[u8]);

    /// Appends the digest of the absorbed data to `prefix` without consuming the state.
    fn sum(&self, prefix: &[u8]) -> Vec<u8>;

    /// Digest size in bytes.
    fn size(&self) -> usize;

    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// A new instance of the same hash function in its initial state.
    #[must_use]
    fn fresh(&self) -> Self;
}

/// A hasher of either output class, as built by the [`registry`](crate::registry).
#[derive(Debug)]
pub enum AnyHasher {
    /// A fixed-output hash function.
    Fixed(Fixed),
    /// An extendable-output function.
    Extendable(Extendable),
}

macro_rules! dispatch {
    ($this:expr, $h:ident => $body:expr) => {
        match $this {
            AnyHasher::Fixed($h) => $body,
            AnyHasher::Extendable($h) => $body
        }
    };
}

impl AnyHasher {
    /// See [`Hasher::algorithm`].
    #[inline]
    pub fn algorithm(&self) -> HashId {
        dispatch!(self, h => h.algorithm())
    }

    /// See [`Hasher::update`].
    #[track_caller]
    pub fn update(&mut self, data: &[u8]) {
        dispatch!(self, h => h.update(data));
    }

    /// See [`Hasher::try_read`].
    ///
    /// # Errors
    ///
    /// See [`Hasher::try_read`].
    pub fn try_read(&mut self, size: usize) -> Result<Vec<u8>> {
        dispatch!(self, h => h.try_read(size))
    }

    /// See [`Hasher::read`].
    ///
    /// # Panics
    ///
    /// See [`Hasher::try_read`].
    #[track_caller]
    pub fn read(&mut self, size: usize) -> Vec<u8> {
        dispatch!(self, h => h.read(size))
    }

    /// See [`Hasher::sum`].
    #[track_caller]
    pub fn sum(&mut self, prefix: &[u8]) -> Vec<u8> {
        dispatch!(self, h => h.sum(prefix))
    }

    /// See [`Hasher::hash`].
    pub fn hash<I, T>(&mut self, inputs: I) -> Vec<u8>
        where I: IntoIterator<Item = T>,
              T: AsRef<[u8]>
    {
        dispatch!(self, h => h.hash(inputs))
    }

    /// See [`Hasher::reset`].
    pub fn reset(&mut self) {
        dispatch!(self, h => h.reset());
    }

    /// See [`Hasher::size`].
    #[inline]
    pub fn size(&self) -> usize {
        dispatch!(self, h => h.size())
    }

    /// See [`Hasher::block_size`].
    #[inline]
    pub fn block_size(&self) -> usize {
        dispatch!(self, h => h.block_size())
    }

    /// See [`Hasher::set_output_size`].
    ///
    /// # Panics
    ///
    /// See [`Extendable::set_output_size`].
    #[track_caller]
    pub fn set_output_size(&mut self, size: usize) {
        dispatch!(self, h => h.set_output_size(size));
    }

    /// See [`Hasher::get_hash_function`].
    #[inline]
    pub const fn get_hash_function(&self) -> Option<&Fixed> {
        match self {
            Self::Fixed(fixed) => Some(fixed),
            Self::Extendable(_) => None
        }
    }

    /// See [`Hasher::get_xof`].
    #[inline]
    pub const fn get_xof(&self) -> Option<&Extendable> {
        match self {
            Self::Fixed(_) => None,
            Self::Extendable(xof) => Some(xof)
        }
    }

    /// Unwraps the fixed-output hasher, if that is what this is.
    #[inline]
    pub fn into_hash_function(self) -> Option<Fixed> {
        match self {
            Self::Fixed(fixed) => Some(fixed),
            Self::Extendable(_) => None
        }
    }

    /// Unwraps the XOF, if that is what this is.
    #[inline]
    pub fn into_xof(self) -> Option<Extendable> {
        match self {
            Self::Fixed(_) => None,
            Self::Extendable(xof) => Some(xof)
        }
    }
}

impl Hasher for AnyHasher {
    #[inline]
    fn algorithm(&self) -> HashId { Self::algorithm(self) }
    #[track_caller]
    fn update(&mut self, data: &[u8]) { Self::update(self, data); }
    #[inline]
    fn try_read(&mut self, size: usize) -> Result<Vec<u8>> { Self::try_read(self, size) }
    #[track_caller]
    fn sum(&mut self, prefix: &[u8]) -> Vec<u8> { Self::sum(self, prefix) }
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
    fn get_xof(&self) -> Option<&Extendable> { Self::get_xof(self) }
}

impl From<Fixed> for AnyHasher {
    #[inline]
    fn from(value: Fixed) -> Self {
        Self::Fixed(value)
    }
}

impl From<Extendable> for AnyHasher {
    #[inline]
    fn from(value: Extendable) -> Self {
        Self::Extendable(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{registry, HashType};

    #[test]
    fn exclusive_capabilities() {
        for id in registry::all() {
            let hasher = id.new();
            let fixed = hasher.get_hash_function().is_some();
            let xof = hasher.get_xof().is_some();

            assert!(fixed ^ xof, "{id}");
            assert_eq!(fixed, id.hash_type() == Some(HashType::Fixed), "{id}");
        }
    }

    #[test]
    fn trait_and_inherent_agree() {
        fn through_trait<H: Hasher>(h: &mut H) -> Vec<u8> {
            h.hash([b"agree".as_slice()])
        }

        for id in registry::all() {
            let mut a = id.new();
            let mut b = id.new();

            assert_eq!(through_trait(&mut a), b.hash([b"agree"]), "{id}");
        }
    }

    #[test]
    fn into_variants() {
        assert!(HashId::SHA256.new().into_hash_function().is_some());
        assert!(HashId::SHA256.new().into_xof().is_none());
        assert!(HashId::SHAKE128.new().into_xof().is_some());
        assert!(HashId::SHAKE128.new().into_hash_function().is_none());
    }
}
