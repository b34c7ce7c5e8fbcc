#![allow(dead_code)]

pub mod reference;

use anyhash::{CryptoHash, HashId, HashType};

pub const MESSAGE: &[u8] = b"This is the message.";
pub const SECRET: &[u8] = b"secret";
pub const SALT: &[u8] = b"";
pub const INFO: &[u8] = b"contextInfo";

/// 65 bytes, one more than the smallest block size.
pub const LONG_HMAC_KEY: &[u8] =
    b"Length65aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

pub const KEY_32: &str = "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";
pub const KEY_64: &str = "bd2b1aaf7ef4f09be9f52ce2d8d599674d81aa9d6a4421696dc4d93dd0619d682ce56b\
4d64a9ef097761ced99e0f67265b5f76085e5b0ee7ca4696b2ad6fe2b2";

/// An `HMAC` key sized like the digest, `0x0b` filled where none is on file.
pub fn hmac_key(size: usize) -> Vec<u8> {
    match size {
        32 => hex::decode(KEY_32).unwrap(),
        64 => hex::decode(KEY_64).unwrap(),
        _ => vec![0x0b; size]
    }
}

/// The expected registry contents, written out independently of the registry itself.
pub struct Expected {
    pub id: HashId,
    pub name: &'static str,
    pub hash_type: HashType,
    pub crypto: Option<CryptoHash>,
    pub block_size: usize,
    pub output_size: usize,
    pub security: usize,
}

macro_rules! expected {
    ($($id:ident, $name:literal, $ty:ident, $crypto:expr, $bs:literal, $sz:literal, $sec:literal;)*) => {
        pub const EXPECTED: &[Expected] = &[
            $(Expected {
                id: HashId::$id,
                name: $name,
                hash_type: HashType::$ty,
                crypto: $crypto,
                block_size: $bs,
                output_size: $sz,
                security: $sec,
            },)*
        ];
    };
}

expected! {
    SHA224, "SHA-224", Fixed, Some(CryptoHash::Sha224), 64, 28, 112;
    SHA256, "SHA-256", Fixed, Some(CryptoHash::Sha256), 64, 32, 128;
    SHA384, "SHA-384", Fixed, Some(CryptoHash::Sha384), 128, 48, 192;
    SHA512, "SHA-512", Fixed, Some(CryptoHash::Sha512), 128, 64, 256;
    SHA3_224, "SHA3-224", Fixed, Some(CryptoHash::Sha3_224), 144, 28, 112;
    SHA3_256, "SHA3-256", Fixed, Some(CryptoHash::Sha3_256), 136, 32, 128;
    SHA3_384, "SHA3-384", Fixed, Some(CryptoHash::Sha3_384), 104, 48, 192;
    SHA3_512, "SHA3-512", Fixed, Some(CryptoHash::Sha3_512), 72, 64, 256;
    SHA512_224, "SHA-512/224", Fixed, Some(CryptoHash::Sha512_224), 128, 28, 112;
    SHA512_256, "SHA-512/256", Fixed, Some(CryptoHash::Sha512_256), 128, 32, 128;
    BLAKE2S_256, "BLAKE2s-256", Fixed, Some(CryptoHash::Blake2s256), 64, 32, 128;
    BLAKE2B_256, "BLAKE2b-256", Fixed, Some(CryptoHash::Blake2b256), 128, 32, 128;
    BLAKE2B_384, "BLAKE2b-384", Fixed, Some(CryptoHash::Blake2b384), 128, 48, 192;
    BLAKE2B_512, "BLAKE2b-512", Fixed, Some(CryptoHash::Blake2b512), 128, 64, 256;
    SHAKE128, "SHAKE128", Extendable, None, 168, 32, 128;
    SHAKE256, "SHAKE256", Extendable, None, 136, 64, 256;
    BLAKE2XB, "BLAKE2XB", Extendable, None, 128, 64, 256;
    BLAKE2XS, "BLAKE2XS", Extendable, None, 64, 32, 128;
}

/// Runs `f` over every expected entry.
pub fn for_each(mut f: impl FnMut(&Expected)) {
    for expected in EXPECTED {
        f(expected);
    }
}

pub fn for_each_fixed(mut f: impl FnMut(&Expected)) {
    for_each(|e| if e.hash_type == HashType::Fixed { f(e) });
}

pub fn for_each_xof(mut f: impl FnMut(&Expected)) {
    for_each(|e| if e.hash_type == HashType::Extendable { f(e) });
}

pub fn unregistered() -> impl Iterator<Item = HashId> {
    [0u8, 1, 2, 3, 8, 9, 20, 25, 50, 255].into_iter().map(HashId::from_u8)
}
