//! Algorithm identifiers.
use core::fmt;

/// Identifies a hash function.
///
/// Any `u8` may be wrapped, only the values registered in the [`registry`] are [`available`].
/// Every method on an unavailable identifier degrades gracefully: sizes are `0`, lookups return
/// `None`, and [`new`] panics (see [`try_new`] for the fallible form).
///
/// # Example
///
/// ```
/// use anyhash::HashId;
///
/// let digest = HashId::SHA256.hash([b"hello world".as_slice()]);
/// assert_eq!(digest.len(), 32);
///
/// assert!(!HashId::from_u8(0).available());
/// ```
///
/// [`registry`]: crate::registry
/// [`available`]: HashId::available
/// [`new`]: HashId::new
/// [`try_new`]: HashId::try_new
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct HashId(u8);

impl HashId {
    /// Wraps a raw identifier value, registered or not.
    #[inline]
    #[must_use]
    pub const fn from_u8(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for HashId {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for HashId {
    /// Writes the display name, or `HashId(n)` for unregistered values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::registry::metadata(*self) {
            Some(meta) => f.write_str(meta.name),
            None => write!(f, "HashId({})", self.0)
        }
    }
}

/// The output class of a hash function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashType {
    /// A fixed-length digest (SHA-2, SHA-3, BLAKE2).
    Fixed,
    /// An extendable-output function (SHAKE, BLAKE2X).
    Extendable,
}

impl HashType {
    /// Returns the canonical name of the output class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "FixedOutputLength",
            Self::Extendable => "ExtendableOutputFunction"
        }
    }
}

impl fmt::Display for HashType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! crypto_hash {
    ($(
        $(#[$meta:meta])*
        $name:ident = $val:literal
    ),* $(,)?) => {
        /// The platform hash-identifier enumeration.
        ///
        /// Values follow the numbering used by common platform crypto APIs (MD4 = 1 through
        /// BLAKE2b-512 = 19), which is what protocols exchanging hash identifiers tend to encode.
        /// Not every value has a [`HashId`] counterpart, see [`HashId::from_crypto`].
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum CryptoHash {
            $(
                $(#[$meta])*
                $name = $val,
            )*
        }

        impl CryptoHash {
            /// Every platform identifier, in numeric order.
            pub const ALL: &'static [Self] = &[$(Self::$name),*];
        }

        impl TryFrom<u8> for CryptoHash {
            type Error = u8;

            /// Converts a raw platform identifier.
            ///
            /// # Errors
            ///
            /// Returns the raw value back if it does not name a platform hash.
            #[inline]
            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($val => Ok(Self::$name),)*
                    other => Err(other)
                }
            }
        }
    };
}

crypto_hash! {
    /// MD4.
    Md4 = 1,
    /// MD5.
    Md5 = 2,
    /// SHA-1.
    Sha1 = 3,
    /// SHA-224.
    Sha224 = 4,
    /// SHA-256.
    Sha256 = 5,
    /// SHA-384.
    Sha384 = 6,
    /// SHA-512.
    Sha512 = 7,
    /// MD5 and SHA-1 concatenated, as used by TLS 1.0/1.1 signatures.
    Md5Sha1 = 8,
    /// RIPEMD-160.
    Ripemd160 = 9,
    /// SHA3-224.
    Sha3_224 = 10,
    /// SHA3-256.
    Sha3_256 = 11,
    /// SHA3-384.
    Sha3_384 = 12,
    /// SHA3-512.
    Sha3_512 = 13,
    /// SHA-512/224.
    Sha512_224 = 14,
    /// SHA-512/256.
    Sha512_256 = 15,
    /// BLAKE2s-256.
    Blake2s256 = 16,
    /// BLAKE2b-256.
    Blake2b256 = 17,
    /// BLAKE2b-384.
    Blake2b384 = 18,
    /// BLAKE2b-512.
    Blake2b512 = 19,
}
