//! Hashers as byte sinks.
//!
//! Fixed-output hashers accept every write. XOFs refuse writes once output has been read, the
//! error surfaces as the sink's error type instead of a panic.

std! {
    use std::io;
    use crate::hash::{AnyHasher, Extendable, Fixed};

    impl io::Write for Fixed {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl io::Write for Extendable {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.try_update(buf).map_err(io::Error::other)?;
            Ok(buf.len())
        }

        #[inline]
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl io::Write for AnyHasher {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            match self {
                Self::Fixed(fixed) => io::Write::write(fixed, buf),
                Self::Extendable(xof) => io::Write::write(xof, buf)
            }
        }

        #[inline]
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

no_std_io! {
    use embedded_io::{self as eio, ErrorKind, ErrorType};
    use crate::error::Error;
    use crate::hash::{AnyHasher as Any, Extendable as Xof, Fixed as Digest};

    impl eio::Error for Error {
        #[inline]
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for Digest {
        type Error = Error;
    }

    impl ErrorType for Xof {
        type Error = Error;
    }

    impl ErrorType for Any {
        type Error = Error;
    }

    impl eio::Write for Digest {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl eio::Write for Xof {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.try_update(buf).map(|()| buf.len())
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl eio::Write for Any {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            match self {
                Self::Fixed(fixed) => eio::Write::write(fixed, buf),
                Self::Extendable(xof) => eio::Write::write(xof, buf)
            }
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}
