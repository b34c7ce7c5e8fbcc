//! Independent RustCrypto computations to compare against.
use anyhash::HashId;
use digest::{Digest, ExtendableOutput, Update, XofReader};

fn fixed<D: Digest>(input: &[u8]) -> Vec<u8> {
    D::digest(input).to_vec()
}

fn xof<X: Default + Update + ExtendableOutput>(input: &[u8], len: usize) -> Vec<u8> {
    let mut x = X::default();
    x.update(input);
    let mut out = vec![0u8; len];
    x.finalize_xof().read(&mut out);
    out
}

/// The digest of `input`, or `None` where there is no RustCrypto equivalent (BLAKE2X).
pub fn hash(id: HashId, input: &[u8], len: usize) -> Option<Vec<u8>> {
    let out = match id {
        HashId::SHA224 => fixed::<sha2::Sha224>(input),
        HashId::SHA256 => fixed::<sha2::Sha256>(input),
        HashId::SHA384 => fixed::<sha2::Sha384>(input),
        HashId::SHA512 => fixed::<sha2::Sha512>(input),
        HashId::SHA512_224 => fixed::<sha2::Sha512_224>(input),
        HashId::SHA512_256 => fixed::<sha2::Sha512_256>(input),
        HashId::SHA3_224 => fixed::<sha3::Sha3_224>(input),
        HashId::SHA3_256 => fixed::<sha3::Sha3_256>(input),
        HashId::SHA3_384 => fixed::<sha3::Sha3_384>(input),
        HashId::SHA3_512 => fixed::<sha3::Sha3_512>(input),
        HashId::BLAKE2S_256 => fixed::<blake2::Blake2s256>(input),
        HashId::BLAKE2B_256 => fixed::<blake2::Blake2b<digest::consts::U32>>(input),
        HashId::BLAKE2B_384 => fixed::<blake2::Blake2b<digest::consts::U48>>(input),
        HashId::BLAKE2B_512 => fixed::<blake2::Blake2b512>(input),
        HashId::SHAKE128 => xof::<sha3::Shake128>(input, len),
        HashId::SHAKE256 => xof::<sha3::Shake256>(input, len),
        _ => return None
    };
    Some(out)
}
