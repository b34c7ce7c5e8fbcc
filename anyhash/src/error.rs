use crate::HashId;

/// Errors raised by hashers, the registry, and the derived constructions.
///
/// Two classes share this type. Contract violations (`OutputTooSmall`, `HmacKeyTooLong`,
/// `XofLengthTooLarge`, `XofExhausted`, `WriteAfterRead`, `UnknownHash`) indicate an integration
/// bug; the default entry points panic with the error's message and only the `try_` variants hand
/// them back. Operational errors (`InvalidLength`, `ShortKey`, `UnapprovedHash`) are always
/// returned, callers are expected to adapt their parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Fewer output bytes were requested than the hasher guarantees.
    #[error("requested output size too small: {requested} < {minimum}")]
    OutputTooSmall {
        /// The number of bytes requested.
        requested: usize,
        /// The smallest permitted output for this instance.
        minimum: usize
    },
    /// The `HMAC` key is longer than the block size of the hash function.
    #[error("hmac key length is larger than hash block size: {key_len} > {block_size}")]
    HmacKeyTooLong {
        /// Length of the rejected key.
        key_len: usize,
        /// Block size of the underlying hash function.
        block_size: usize
    },
    /// The requested `HKDF` output exceeds `255 * HashLen`.
    #[error("invalid hkdf output length {requested}, maximum is {max}")]
    InvalidLength {
        /// The requested output length.
        requested: usize,
        /// The largest length the hash function can derive.
        max: usize
    },
    /// The `HKDF` input keying material is shorter than the restricted mode allows.
    #[error("hkdf secret too short for fips 140 mode: {len} < {min} bytes")]
    ShortKey {
        /// Length of the provided secret.
        len: usize,
        /// Minimum length in restricted mode.
        min: usize
    },
    /// The hash function is not on the restricted mode's allow-list.
    #[error("{0} is not an approved hash function in fips 140 mode")]
    UnapprovedHash(HashId),
    /// The identifier is not registered.
    #[error("hash function {0} is not available")]
    UnknownHash(HashId),
    /// The requested XOF output length exceeds what the primitive can encode.
    #[error("xof length too large: {requested} > {max}")]
    XofLengthTooLarge {
        /// The requested output length.
        requested: usize,
        /// The largest length the primitive accepts.
        max: usize
    },
    /// The XOF was configured for a fixed output length which has been fully consumed.
    #[error("xof output exhausted after {limit} bytes")]
    XofExhausted {
        /// The configured output length.
        limit: u64
    },
    /// Input was absorbed after the XOF started producing output.
    #[error("write to xof after read")]
    WriteAfterRead,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns `true` for errors which signal a caller bug rather than a runtime condition.
    ///
    /// These are the errors the non-`try` entry points turn into panics.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        !matches!(
            self,
            Self::InvalidLength { .. } | Self::ShortKey { .. } | Self::UnapprovedHash(_)
        )
    }
}

/// Panics with the message of `err`, attributing the panic to the caller's caller.
#[cold]
#[track_caller]
pub(crate) fn fail(err: Error) -> ! {
    panic!("{err}")
}
