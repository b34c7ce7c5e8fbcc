//! The restricted-mode policy for the derived constructions.
use crate::error::{Error, Result};
use crate::HashId;

/// Selects whether HKDF is restricted to the FIPS 140 approved subset.
///
/// The mode is carried by each [`Fixed`](crate::Fixed) hasher, there is no process-wide switch.
/// Fresh hashers start in [`Mode::default`], which is [`Mode::Fips140`] when the crate is built
/// with the `fips` feature and [`Mode::Open`] otherwise.
///
/// # Example
///
/// ```
/// use anyhash::{Error, HashId, Mode};
///
/// let sha3 = HashId::SHA3_256.get_hash_function().unwrap().with_mode(Mode::Fips140);
///
/// assert_eq!(
///     sha3.hkdf_extract(b"a long enough secret", b""),
///     Err(Error::UnapprovedHash(HashId::SHA3_256))
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every registered fixed-output hash may be used, with secrets of any length.
    Open,
    /// Only [`Mode::APPROVED`] hashes, with secrets of at least [`Mode::MIN_EXTRACT_KEY_LEN`]
    /// bytes.
    Fips140,
}

impl Default for Mode {
    #[inline]
    fn default() -> Self {
        if cfg!(feature = "fips") { Self::Fips140 } else { Self::Open }
    }
}

impl Mode {
    /// 112 bits of input keying material, rounded up to whole bytes.
    pub const MIN_EXTRACT_KEY_LEN: usize = 14;

    /// The hash functions HKDF may use under [`Mode::Fips140`].
    pub const APPROVED: &'static [HashId] = &[HashId::SHA256, HashId::SHA384, HashId::SHA512];

    /// Returns `true` for [`Mode::Fips140`].
    #[inline]
    #[must_use]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Self::Fips140)
    }

    /// Returns `true` if `id` may be used for HKDF under this mode.
    #[must_use]
    pub fn is_approved(self, id: HashId) -> bool {
        !self.is_restricted() || Self::APPROVED.contains(&id)
    }

    /// Checks that HKDF may run over `id`.
    ///
    /// # Errors
    ///
    /// [`Error::UnapprovedHash`] under [`Mode::Fips140`] if `id` is not
    /// [approved](Self::APPROVED).
    pub fn check_hash(self, id: HashId) -> Result<()> {
        if self.is_approved(id) {
            Ok(())
        } else {
            tracing::debug!(algorithm = %id, "rejected unapproved hash in fips 140 mode");
            Err(Error::UnapprovedHash(id))
        }
    }

    /// Checks an HKDF extract (or full derivation) request.
    ///
    /// # Errors
    ///
    /// Under [`Mode::Fips140`]:
    ///
    /// - [`Error::UnapprovedHash`] if `id` is not [approved](Self::APPROVED).
    /// - [`Error::ShortKey`] if `secret_len` is below [`Self::MIN_EXTRACT_KEY_LEN`].
    pub fn check_extract(self, id: HashId, secret_len: usize) -> Result<()> {
        self.check_hash(id)?;

        if self.is_restricted() && secret_len < Self::MIN_EXTRACT_KEY_LEN {
            tracing::debug!(len = secret_len, "rejected short hkdf secret in fips 140 mode");
            return Err(Error::ShortKey { len: secret_len, min: Self::MIN_EXTRACT_KEY_LEN });
        }

        Ok(())
    }
}
