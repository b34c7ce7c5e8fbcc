//! Extendable-output primitives behind one object-safe interface.
use alloc::boxed::Box;
use core::mem;
use digest::{ExtendableOutput, Update, XofReader};

use crate::error::{Error, Result};

pub(crate) type BoxedSponge = Box<dyn Sponge>;

/// An extendable-output primitive with an explicit absorb / squeeze phase split.
///
/// Once [`squeeze`](Sponge::squeeze) has produced output, [`absorb`](Sponge::absorb) must fail
/// with [`Error::WriteAfterRead`] until [`reset`](Sponge::reset).
pub(crate) trait Sponge: Send + Sync {
    fn absorb(&mut self, data: &[u8]) -> Result<()>;

    /// Fills `out`, continuing where the previous call stopped.
    fn squeeze(&mut self, out: &mut [u8]) -> Result<()>;

    /// Returns to the absorbing phase, keeping the configured output length.
    fn reset(&mut self);

    fn is_squeezing(&self) -> bool;
}

/// The SHAKE family, or any RustCrypto XOF whose reader finalizes by value.
pub(crate) enum Shake<H: ExtendableOutput> {
    Absorbing(H),
    Squeezing(H::Reader),
}

impl<H> Shake<H>
    where H: Default + Update + ExtendableOutput + Send + Sync + 'static,
          H::Reader: Send + Sync
{
    /// SHAKE has no declared output length, the requested size is only tracked by the adapter.
    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn boxed(_size: usize) -> Result<BoxedSponge> {
        Ok(Box::new(Self::Absorbing(H::default())))
    }
}

impl<H> Sponge for Shake<H>
    where H: Default + Update + ExtendableOutput + Send + Sync,
          H::Reader: Send + Sync
{
    fn absorb(&mut self, data: &[u8]) -> Result<()> {
        match self {
            Self::Absorbing(inner) => {
                inner.update(data);
                Ok(())
            },
            Self::Squeezing(_) => Err(Error::WriteAfterRead)
        }
    }

    fn squeeze(&mut self, out: &mut [u8]) -> Result<()> {
        if let Self::Absorbing(inner) = self {
            let reader = mem::take(inner).finalize_xof();
            *self = Self::Squeezing(reader);
        }

        if let Self::Squeezing(reader) = self {
            reader.read(out);
        }

        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::Absorbing(H::default());
    }

    #[inline]
    fn is_squeezing(&self) -> bool {
        matches!(self, Self::Squeezing(_))
    }
}
