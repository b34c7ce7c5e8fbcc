#![no_main]

use libfuzzer_sys::fuzz_target;
use anyhash::HashId;

const XOFS: [HashId; 4] = [HashId::SHAKE128, HashId::SHAKE256, HashId::BLAKE2XB, HashId::BLAKE2XS];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else { return };
    let Some((&reads, input)) = rest.split_first() else { return };

    let id = XOFS[usize::from(selector) % XOFS.len()];
    let size = id.size();
    let chunks = usize::from(reads % 8) + 1;

    let mut chunked = id.get_xof().unwrap();
    chunked.update(input);

    let mut out = Vec::new();
    for i in 0..chunks {
        out.extend(chunked.read(size + i));
    }

    let mut whole = id.get_xof().unwrap();
    whole.update(input);

    assert_eq!(whole.read(out.len()), out);
    assert!(chunked.try_update(input).is_err());
});
