//! The identifier registry.
//!
//! A process-wide, immutable table mapping each [`HashId`] to its [`Metadata`] and to the
//! constructor of its primitive. The table is `static` data, there is no registration at runtime.
use alloc::boxed::Box;
use digest::DynDigest;

use crate::error::{fail, Result};
use crate::hash::blake2x::{Blake2Xb, Blake2Xs};
use crate::hash::sponge::{BoxedSponge, Shake};
use crate::hash::{AnyHasher, Extendable, Fixed};
use crate::id::{CryptoHash, HashId, HashType};

pub(crate) type BoxedDigest = Box<dyn DynDigest + Send + Sync>;

/// Read-only description of a registered hash function.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct Metadata {
    /// The identifier this entry describes.
    pub id: HashId,
    /// Display name, e.g. `SHA3-256`.
    pub name: &'static str,
    /// Internal block size in bytes (the sponge rate for SHA-3 and SHAKE).
    pub block_size: usize,
    /// Digest size in bytes. For XOFs, the default and minimum output length of a fresh instance.
    pub output_size: usize,
    /// Security level in bits.
    pub security_level: usize,
    /// Whether the output is fixed or extendable.
    pub hash_type: HashType,
    /// The platform identifier, fixed-output functions only.
    pub crypto: Option<CryptoHash>,
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum Build {
    Fixed(fn() -> BoxedDigest),
    /// Takes the declared output length, `0` meaning unbounded.
    Extendable(fn(usize) -> Result<BoxedSponge>),
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) meta: Metadata,
    pub(crate) build: Build,
}

fn boxed_digest<D>() -> BoxedDigest
    where D: DynDigest + Default + Send + Sync + 'static
{
    Box::new(D::default())
}

macro_rules! registry {
    (
        fixed {
            $(
                $(#[$meta:meta])*
                $cst:ident = $val:literal, $name:literal,
                block: $bs:literal, size: $sz:literal, security: $sec:literal,
                crypto: $crypto:ident, digest: $digest:ty;
            )*
        }
        extendable {
            $(
                $(#[$xmeta:meta])*
                $xcst:ident = $xval:literal, $xname:literal,
                block: $xbs:literal, size: $xsz:literal, security: $xsec:literal,
                sponge: $sponge:expr;
            )*
        }
    ) => {
        impl HashId {
            $(
                $(#[$meta])*
                pub const $cst: Self = Self::from_u8($val);
            )*
            $(
                $(#[$xmeta])*
                pub const $xcst: Self = Self::from_u8($xval);
            )*
        }

        static ENTRIES: &[Entry] = &[
            $(
                Entry {
                    meta: Metadata {
                        id: HashId::$cst,
                        name: $name,
                        block_size: $bs,
                        output_size: $sz,
                        security_level: $sec,
                        hash_type: HashType::Fixed,
                        crypto: Some(CryptoHash::$crypto),
                    },
                    build: Build::Fixed(boxed_digest::<$digest>),
                },
            )*
            $(
                Entry {
                    meta: Metadata {
                        id: HashId::$xcst,
                        name: $xname,
                        block_size: $xbs,
                        output_size: $xsz,
                        security_level: $xsec,
                        hash_type: HashType::Extendable,
                        crypto: None,
                    },
                    build: Build::Extendable($sponge),
                },
            )*
        ];
    };
}

registry! {
    fixed {
        /// SHA-224 (FIPS 180-4).
        SHA224 = 4, "SHA-224",
            block: 64, size: 28, security: 112,
            crypto: Sha224, digest: sha2::Sha224;
        /// SHA-256 (FIPS 180-4).
        SHA256 = 5, "SHA-256",
            block: 64, size: 32, security: 128,
            crypto: Sha256, digest: sha2::Sha256;
        /// SHA-384 (FIPS 180-4).
        SHA384 = 6, "SHA-384",
            block: 128, size: 48, security: 192,
            crypto: Sha384, digest: sha2::Sha384;
        /// SHA-512 (FIPS 180-4).
        SHA512 = 7, "SHA-512",
            block: 128, size: 64, security: 256,
            crypto: Sha512, digest: sha2::Sha512;
        /// SHA3-224 (FIPS 202).
        SHA3_224 = 10, "SHA3-224",
            block: 144, size: 28, security: 112,
            crypto: Sha3_224, digest: sha3::Sha3_224;
        /// SHA3-256 (FIPS 202).
        SHA3_256 = 11, "SHA3-256",
            block: 136, size: 32, security: 128,
            crypto: Sha3_256, digest: sha3::Sha3_256;
        /// SHA3-384 (FIPS 202).
        SHA3_384 = 12, "SHA3-384",
            block: 104, size: 48, security: 192,
            crypto: Sha3_384, digest: sha3::Sha3_384;
        /// SHA3-512 (FIPS 202).
        SHA3_512 = 13, "SHA3-512",
            block: 72, size: 64, security: 256,
            crypto: Sha3_512, digest: sha3::Sha3_512;
        /// SHA-512/224 (FIPS 180-4).
        SHA512_224 = 14, "SHA-512/224",
            block: 128, size: 28, security: 112,
            crypto: Sha512_224, digest: sha2::Sha512_224;
        /// SHA-512/256 (FIPS 180-4).
        SHA512_256 = 15, "SHA-512/256",
            block: 128, size: 32, security: 128,
            crypto: Sha512_256, digest: sha2::Sha512_256;
        /// BLAKE2s with a 256 bit digest (RFC 7693).
        BLAKE2S_256 = 16, "BLAKE2s-256",
            block: 64, size: 32, security: 128,
            crypto: Blake2s256, digest: blake2::Blake2s256;
        /// BLAKE2b with a 256 bit digest (RFC 7693).
        BLAKE2B_256 = 17, "BLAKE2b-256",
            block: 128, size: 32, security: 128,
            crypto: Blake2b256, digest: blake2::Blake2b<digest::consts::U32>;
        /// BLAKE2b with a 384 bit digest (RFC 7693).
        BLAKE2B_384 = 18, "BLAKE2b-384",
            block: 128, size: 48, security: 192,
            crypto: Blake2b384, digest: blake2::Blake2b<digest::consts::U48>;
        /// BLAKE2b with a 512 bit digest (RFC 7693).
        BLAKE2B_512 = 19, "BLAKE2b-512",
            block: 128, size: 64, security: 256,
            crypto: Blake2b512, digest: blake2::Blake2b512;
    }
    extendable {
        /// SHAKE128 (FIPS 202), 32 bytes by default.
        SHAKE128 = 32, "SHAKE128",
            block: 168, size: 32, security: 128,
            sponge: Shake::<sha3::Shake128>::boxed;
        /// SHAKE256 (FIPS 202), 64 bytes by default.
        SHAKE256 = 33, "SHAKE256",
            block: 136, size: 64, security: 256,
            sponge: Shake::<sha3::Shake256>::boxed;
        /// BLAKE2XB, the BLAKE2b based XOF, 64 bytes by default.
        BLAKE2XB = 34, "BLAKE2XB",
            block: 128, size: 64, security: 256,
            sponge: Blake2Xb::boxed;
        /// BLAKE2XS, the BLAKE2s based XOF, 32 bytes by default.
        BLAKE2XS = 35, "BLAKE2XS",
            block: 64, size: 32, security: 128,
            sponge: Blake2Xs::boxed;
    }
}

#[inline]
pub(crate) fn entry(id: HashId) -> Option<&'static Entry> {
    ENTRIES.iter().find(|entry| entry.meta.id == id)
}

/// Returns the metadata of `id`, or `None` if it is not registered.
#[inline]
#[must_use]
pub fn metadata(id: HashId) -> Option<&'static Metadata> {
    entry(id).map(|entry| &entry.meta)
}

/// Returns the constructor for `id`, or `None` if it is not registered.
#[inline]
#[must_use]
pub fn factory(id: HashId) -> Option<Factory> {
    entry(id).map(|entry| Factory { entry })
}

/// Iterates over every registered identifier, fixed-output functions first.
pub fn all() -> impl Iterator<Item = HashId> + Clone {
    ENTRIES.iter().map(|entry| entry.meta.id)
}

pub(crate) fn from_crypto(crypto: CryptoHash) -> Option<HashId> {
    ENTRIES.iter()
        .find(|entry| entry.meta.crypto == Some(crypto))
        .map(|entry| entry.meta.id)
}

/// Builds fresh hashers for one registered identifier.
///
/// # Example
///
/// ```
/// use anyhash::{registry, HashId};
///
/// let factory = registry::factory(HashId::SHAKE128).unwrap();
/// let mut hasher = factory.build();
///
/// assert_eq!(hasher.algorithm(), HashId::SHAKE128);
/// assert_eq!(hasher.hash([b"input"]).len(), 32);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Factory {
    entry: &'static Entry,
}

impl Factory {
    /// The identifier this factory builds.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> HashId {
        self.entry.meta.id
    }

    /// The metadata of the identifier this factory builds.
    #[inline]
    #[must_use]
    pub const fn metadata(&self) -> &'static Metadata {
        &self.entry.meta
    }

    /// Builds a hasher in its initial absorbing state.
    ///
    /// # Errors
    ///
    /// If the primitive rejects its default configuration. None of the registered primitives
    /// do, the `Result` exists for parity with [`Extendable::try_set_output_size`].
    pub fn try_build(&self) -> Result<AnyHasher> {
        tracing::trace!(algorithm = self.entry.meta.name, "building hasher");
        match self.entry.build {
            Build::Fixed(make) => Ok(AnyHasher::Fixed(Fixed::from_parts(&self.entry.meta, make))),
            Build::Extendable(make) => {
                let sponge = make(0)?;
                Ok(AnyHasher::Extendable(Extendable::from_parts(
                    &self.entry.meta,
                    make,
                    sponge,
                    self.entry.meta.output_size
                )))
            }
        }
    }

    /// Builds a hasher in its initial absorbing state.
    ///
    /// # Panics
    ///
    /// See [`try_build`](Self::try_build).
    #[track_caller]
    #[must_use]
    pub fn build(&self) -> AnyHasher {
        self.try_build().unwrap_or_else(|err| fail(err))
    }
}
