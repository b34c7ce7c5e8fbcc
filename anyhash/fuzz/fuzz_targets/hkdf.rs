#![no_main]

use libfuzzer_sys::fuzz_target;
use anyhash::{registry, Error, HashType, Mode};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else { return };
    let Some((&len, secret)) = rest.split_first() else { return };

    let fixed: Vec<_> = registry::all()
        .filter(|id| id.hash_type() == Some(HashType::Fixed))
        .collect();

    let id = fixed[usize::from(selector) % fixed.len()];
    let h = id.get_hash_function().unwrap().with_mode(Mode::Open);
    let length = usize::from(len) * 64;

    match h.hkdf(secret, secret, b"fuzz", length) {
        Ok(okm) => assert_eq!(okm.len(), if length == 0 { id.size() } else { length }),
        Err(Error::InvalidLength { requested, max }) => {
            assert_eq!(requested, length);
            assert!(requested > max);
        },
        Err(other) => panic!("unexpected {other}")
    }
});
