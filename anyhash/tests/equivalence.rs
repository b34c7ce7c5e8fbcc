pub mod common;

use anyhash::HashId;
use proptest::prelude::*;

fn registered() -> impl Strategy<Value = HashId> {
    prop::sample::select(anyhash::registry::all().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn split_updates_match_reference(
        id in registered(),
        input in prop::collection::vec(any::<u8>(), 0..2048),
        split in any::<prop::sample::Index>()
    ) {
        let (left, right) = input.split_at(split.index(input.len() + 1));
        let ours = id.hash([left, right]);

        prop_assert_eq!(ours.len(), id.size());
        if let Some(expected) = common::reference::hash(id, &input, id.size()) {
            prop_assert_eq!(ours, expected);
        }
    }

    #[test]
    fn xof_read_chunking(
        id in prop::sample::select(vec![
            HashId::SHAKE128, HashId::SHAKE256, HashId::BLAKE2XB, HashId::BLAKE2XS
        ]),
        input in prop::collection::vec(any::<u8>(), 0..256),
        extra in prop::collection::vec(0usize..200, 1..6)
    ) {
        let size = id.size();
        let total: usize = extra.iter().map(|e| e + size).sum();

        let mut whole = id.get_xof().unwrap();
        whole.update(&input);
        let expected = whole.read(total);

        let mut chunked = id.get_xof().unwrap();
        chunked.update(&input);
        let mut out = Vec::with_capacity(total);
        for e in extra {
            out.extend(chunked.read(size + e));
        }

        prop_assert_eq!(out, expected);
    }
}
