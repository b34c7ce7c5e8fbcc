//! BLAKE2X, the extendable-output mode of BLAKE2b and BLAKE2s.
//!
//! The input is absorbed by a root BLAKE2 instance whose parameter block carries the declared
//! output length. Output is the concatenation of node hashes `B2(i)`, each hashing the root digest
//! under a parameter block carrying the node index `i`, the declared length, and the inner hash
//! length. The last node of a bounded output is truncated through its digest length, so the
//! stream does not depend on how reads are chunked.
use alloc::boxed::Box;

use crate::error::{Error, Result};
use crate::hash::sponge::{BoxedSponge, Sponge};

#[derive(Clone)]
struct Squeeze<const B: usize> {
    root: [u8; B],
    block: [u8; B],
    node: Option<u32>,
    position: u64,
}

macro_rules! blake2x {
    (
        $(#[$meta:meta])*
        name: $name:ident,
        simd: $simd:ident,
        len: $len:ty,
        out: $out:literal $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub(crate) struct $name {
            state: $simd::State,
            /// The declared output length, `<$len>::MAX` for unbounded output.
            length: $len,
            squeeze: Option<Squeeze<$out>>,
        }

        impl $name {
            /// Marks an output of unknown length, so it is not a valid declared length.
            pub(crate) const UNKNOWN: $len = <$len>::MAX;

            /// Creates the XOF for `size` output bytes, `0` meaning unbounded.
            ///
            /// # Errors
            ///
            /// If `size` cannot be encoded in the parameter block.
            pub(crate) fn new(size: usize) -> Result<Self> {
                let length = match size {
                    0 => Self::UNKNOWN,
                    size if size < Self::UNKNOWN as usize => size as $len,
                    size => return Err(Error::XofLengthTooLarge {
                        requested: size,
                        max: Self::UNKNOWN as usize - 1
                    })
                };

                Ok(Self { state: Self::root_state(length), length, squeeze: None })
            }

            pub(crate) fn boxed(size: usize) -> Result<BoxedSponge> {
                Self::new(size).map(|xof| Box::new(xof) as BoxedSponge)
            }

            fn root_state(length: $len) -> $simd::State {
                $simd::Params::new()
                    .hash_length($out)
                    .node_offset(u64::from(length) << 32)
                    .to_state()
            }

            /// The total number of bytes this instance can produce.
            const fn limit(&self) -> u64 {
                if self.length == Self::UNKNOWN {
                    (u32::MAX as u64 + 1) * $out
                } else {
                    self.length as u64
                }
            }

            fn node(length: $len, root: &[u8], index: u32, hash_length: usize) -> $simd::Hash {
                $simd::Params::new()
                    .hash_length(hash_length)
                    .fanout(0)
                    .max_depth(0)
                    .max_leaf_length($out)
                    .node_offset(u64::from(index) | (u64::from(length) << 32))
                    .node_depth(0)
                    .inner_hash_length($out)
                    .hash(root)
            }
        }

        impl Sponge for $name {
            fn absorb(&mut self, data: &[u8]) -> Result<()> {
                if self.squeeze.is_some() {
                    return Err(Error::WriteAfterRead);
                }
                self.state.update(data);
                Ok(())
            }

            fn squeeze(&mut self, out: &mut [u8]) -> Result<()> {
                let limit = self.limit();
                let length = self.length;
                let bounded = length != Self::UNKNOWN;

                let state = &self.state;
                let squeeze = self.squeeze.get_or_insert_with(|| {
                    let mut root = [0u8; $out];
                    root.copy_from_slice(state.finalize().as_bytes());
                    Squeeze { root, block: [0u8; $out], node: None, position: 0 }
                });

                if squeeze.position + out.len() as u64 > limit {
                    return Err(Error::XofExhausted { limit });
                }

                let mut written = 0;
                while written < out.len() {
                    let index = (squeeze.position / $out) as u32;
                    let offset = (squeeze.position % $out) as usize;

                    if squeeze.node != Some(index) {
                        let remaining = limit - u64::from(index) * $out;
                        let hash_length = if bounded && remaining < $out {
                            remaining as usize
                        } else {
                            $out
                        };

                        let node = Self::node(length, &squeeze.root, index, hash_length);
                        squeeze.block[..hash_length].copy_from_slice(node.as_bytes());
                        squeeze.node = Some(index);
                    }

                    let take = ($out - offset).min(out.len() - written);
                    out[written..written + take]
                        .copy_from_slice(&squeeze.block[offset..offset + take]);

                    written += take;
                    squeeze.position += take as u64;
                }

                Ok(())
            }

            fn reset(&mut self) {
                self.state = Self::root_state(self.length);
                self.squeeze = None;
            }

            #[inline]
            fn is_squeezing(&self) -> bool {
                self.squeeze.is_some()
            }
        }
    };
}

blake2x! {
    /// BLAKE2XB: up to `2^32 - 2` declared bytes, 64 byte output nodes.
    name: Blake2Xb,
    simd: blake2b_simd,
    len: u32,
    out: 64,
}

blake2x! {
    /// BLAKE2XS: up to `65534` declared bytes, 32 byte output nodes.
    name: Blake2Xs,
    simd: blake2s_simd,
    len: u16,
    out: 32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use hex_literal::hex;

    fn squeeze_all<S: Sponge>(mut xof: S, input: &[u8], len: usize) -> alloc::vec::Vec<u8> {
        xof.absorb(input).unwrap();
        let mut out = vec![0u8; len];
        xof.squeeze(&mut out).unwrap();
        out
    }

    #[test]
    fn blake2xb_known_answers() {
        assert_eq!(
            squeeze_all(Blake2Xb::new(0).unwrap(), b"", 64),
            hex!("bc2cc15201a9ffc24e7d4a7c18543125b5ffec88826ec25b0083ab69ba9680c8
                  362b9226cbc7e799d8274f220ed85a04c68db8c918fe7581b19eec57668b5768")
        );
        assert_eq!(
            squeeze_all(Blake2Xb::new(0).unwrap(), b"abc", 130),
            hex!("ae080c1efbcf7f60ed52a04161d02b7ee63bed362534f0661da02c6e40cd2089
                  46d066b86b3dff620e57acea9cd72d3056cf6cb0c18341452a17ce2cced67b70
                  2669bf0bed358c1b708e97de2533b294cdd5e9e229678be36399b5b28d6541c4
                  bc4e3079fb8a0fbdf6023a65f36c654947ce7c114a243670dad347f03275b5c5
                  bd38")
        );
        assert_eq!(
            squeeze_all(Blake2Xb::new(100).unwrap(), b"abc", 100),
            hex!("e0f82b71c07860b65be612d2633becc46596a6c12a8772b561adec35721b7a5c
                  44a7e075e8a3bc8c4fc8390a197be2085b4aa4385c207f24e46415defc659afd
                  73bacb288080b10849aeea386c60cd3fa04c9bcbfeebaed6e98634d696b9d5bd
                  ef0ad2c5")
        );
    }

    #[test]
    fn blake2xs_known_answers() {
        assert_eq!(
            squeeze_all(Blake2Xs::new(0).unwrap(), b"", 32),
            hex!("5390f558b3986863ca6623a0d01e23e6ff026175069fc55b27b2454fa09772c8")
        );
        assert_eq!(
            squeeze_all(Blake2Xs::new(0).unwrap(), b"abc", 70),
            hex!("bf5c4f309fde8a62195bc8364ceea81e84eb9330579270c5737b9300085b6149
                  5576fef12a5cfa717343bff2bb2461d733fc71c0c51a60392e4d2f84218b1351
                  e28d85cc8981")
        );
        assert_eq!(
            squeeze_all(Blake2Xs::new(40).unwrap(), b"abc", 40),
            hex!("4908df7d15f358be3fa6de4ee948ac90dd50d090016561d5e3d132e4341093570d2f0ebb3856bcb0")
        );
    }

    #[test]
    fn ceilings() {
        assert_eq!(
            Blake2Xb::new(u32::MAX as usize).err(),
            Some(Error::XofLengthTooLarge { requested: u32::MAX as usize, max: u32::MAX as usize - 1 })
        );
        assert!(Blake2Xb::new(u32::MAX as usize - 1).is_ok());

        assert_eq!(
            Blake2Xs::new(65535).err(),
            Some(Error::XofLengthTooLarge { requested: 65535, max: 65534 })
        );
        assert!(Blake2Xs::new(65534).is_ok());
    }

    #[test]
    fn chunking_independent() {
        for len in [1usize, 31, 32, 33, 64, 65, 100, 200] {
            let whole = squeeze_all(Blake2Xb::new(len).unwrap(), b"chunk", len);

            let mut xof = Blake2Xb::new(len).unwrap();
            xof.absorb(b"chunk").unwrap();
            let mut parts = vec![0u8; len];
            for piece in parts.chunks_mut(7) {
                xof.squeeze(piece).unwrap();
            }

            assert_eq!(whole, parts, "len {len}");
        }
    }

    #[test]
    fn declared_length_domain_separates() {
        let short = squeeze_all(Blake2Xs::new(32).unwrap(), b"domain", 32);
        let long = squeeze_all(Blake2Xs::new(64).unwrap(), b"domain", 64);

        assert_ne!(short.as_slice(), &long[..32]);
    }

    #[test]
    fn bounded_output_is_exhausted() {
        let mut xof = Blake2Xs::new(40).unwrap();
        let mut out = [0u8; 40];
        xof.squeeze(&mut out).unwrap();

        assert_eq!(xof.squeeze(&mut [0u8; 1]), Err(Error::XofExhausted { limit: 40 }));
    }

    #[test]
    fn unbounded_stream_continues() {
        let mut xof = Blake2Xb::new(0).unwrap();
        xof.absorb(b"unbounded").unwrap();

        let mut first = [0u8; 100];
        let mut second = [0u8; 100];
        xof.squeeze(&mut first).unwrap();
        xof.squeeze(&mut second).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn reset_keeps_length() {
        let expected = squeeze_all(Blake2Xb::new(80).unwrap(), b"again", 80);

        let mut xof = Blake2Xb::new(80).unwrap();
        xof.absorb(b"discarded").unwrap();
        xof.squeeze(&mut [0u8; 10]).unwrap();
        xof.reset();

        assert!(!xof.is_squeezing());
        assert_eq!(squeeze_all(xof, b"again", 80), expected);
    }

    #[test]
    fn write_after_read() {
        let mut xof = Blake2Xs::new(0).unwrap();
        xof.squeeze(&mut [0u8; 4]).unwrap();
        assert_eq!(xof.absorb(b"late"), Err(Error::WriteAfterRead));
    }
}
