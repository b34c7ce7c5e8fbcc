//! The identifier facade: everything callers need, keyed on a [`HashId`].
use alloc::vec::Vec;

use crate::error::{fail, Error, Result};
use crate::hash::{AnyHasher, Extendable, Fixed};
use crate::id::{CryptoHash, HashId, HashType};
use crate::registry::{self, Metadata};

impl HashId {
    /// Returns `true` if the identifier is registered.
    #[inline]
    #[must_use]
    pub fn available(self) -> bool {
        registry::metadata(self).is_some()
    }

    /// The registry metadata, or `None` for unregistered identifiers.
    #[inline]
    #[must_use]
    pub fn metadata(self) -> Option<&'static Metadata> {
        registry::metadata(self)
    }

    /// The output class, or `None` for unregistered identifiers.
    #[inline]
    #[must_use]
    pub fn hash_type(self) -> Option<HashType> {
        self.metadata().map(|meta| meta.hash_type)
    }

    /// The display name, or `None` for unregistered identifiers.
    #[inline]
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        self.metadata().map(|meta| meta.name)
    }

    /// The digest size in bytes (default output size for XOFs), `0` if unregistered.
    #[inline]
    #[must_use]
    pub fn size(self) -> usize {
        self.metadata().map_or(0, |meta| meta.output_size)
    }

    /// The block size in bytes, `0` if unregistered.
    #[inline]
    #[must_use]
    pub fn block_size(self) -> usize {
        self.metadata().map_or(0, |meta| meta.block_size)
    }

    /// The security level in bits, `0` if unregistered.
    #[inline]
    #[must_use]
    pub fn security_level(self) -> usize {
        self.metadata().map_or(0, |meta| meta.security_level)
    }

    /// Builds a fresh hasher.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownHash`] if the identifier is not registered.
    pub fn try_new(self) -> Result<AnyHasher> {
        match registry::factory(self) {
            Some(factory) => factory.try_build(),
            None => {
                tracing::debug!(id = self.as_u8(), "unknown hash identifier");
                Err(Error::UnknownHash(self))
            }
        }
    }

    /// Builds a fresh hasher.
    ///
    /// # Panics
    ///
    /// If the identifier is not registered, see [`try_new`](Self::try_new).
    #[track_caller]
    #[must_use]
    pub fn new(self) -> AnyHasher {
        self.try_new().unwrap_or_else(|err| fail(err))
    }

    /// Hashes the concatenation of `inputs` with a fresh hasher, returning [`size`] bytes.
    ///
    /// # Panics
    ///
    /// If the identifier is not registered.
    ///
    /// [`size`]: Self::size
    #[track_caller]
    pub fn hash<I, T>(self, inputs: I) -> Vec<u8>
        where I: IntoIterator<Item = T>,
              T: AsRef<[u8]>
    {
        self.new().hash(inputs)
    }

    /// A fresh fixed-output hasher, or `None` for XOFs and unregistered identifiers.
    #[must_use]
    pub fn get_hash_function(self) -> Option<Fixed> {
        self.try_new().ok().and_then(AnyHasher::into_hash_function)
    }

    /// A fresh XOF, or `None` for fixed-output hashes and unregistered identifiers.
    #[must_use]
    pub fn get_xof(self) -> Option<Extendable> {
        self.try_new().ok().and_then(AnyHasher::into_xof)
    }

    /// The platform identifier of a fixed-output hash, `None` for XOFs and unregistered ids.
    #[inline]
    #[must_use]
    pub fn to_crypto(self) -> Option<CryptoHash> {
        self.metadata().and_then(|meta| meta.crypto)
    }

    /// The identifier matching a platform identifier, `None` if nothing is registered for it.
    ///
    /// ```
    /// use anyhash::{CryptoHash, HashId};
    ///
    /// assert_eq!(HashId::from_crypto(CryptoHash::Sha3_256), Some(HashId::SHA3_256));
    /// assert_eq!(HashId::from_crypto(CryptoHash::Md5), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_crypto(crypto: CryptoHash) -> Option<Self> {
        registry::from_crypto(crypto)
    }
}
