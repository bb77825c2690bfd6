#![no_main]

use acl_trie::{BitPrefix, BitWord, Trie};
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use std::collections::{BTreeSet, HashMap};

#[derive(Arbitrary, Debug)]
enum Action {
    Clear,
    Insert(u32, u8),
    Find(u32, u8),
    FindMut(u32, u8),
    CheckLen,
    CheckDump,
    CheckDepth,
    Clone,
}

/// Build a valid prefix by masking off the bits past the length.
fn to_prefix(value: u32, len: u8) -> BitPrefix<u32> {
    let len = u32::from(len) % (u32::BITS + 1);
    BitPrefix::new(value & u32::prefix_mask(len), len).unwrap()
}

libfuzzer_sys::fuzz_target!(|actions: Vec<Action>| {
    let mut trie = Trie::<u32>::new();
    let mut model = HashMap::new();
    let mut next_value = 0;

    for action in actions {
        match action {
            Action::Clear => {
                trie.clear();
                model.clear();
            },
            Action::Insert(value, len) => {
                let prefix = to_prefix(value, len);
                trie.insert(prefix, next_value);
                model.insert(prefix, next_value);
                next_value += 1;
            },
            Action::Find(value, len) => {
                let prefix = to_prefix(value, len);
                assert_eq!(trie.find(prefix), model.get(&prefix));
            },
            Action::FindMut(value, len) => {
                let prefix = to_prefix(value, len);
                if let Some(value) = trie.find_mut(prefix) {
                    *value = value.wrapping_add(1);
                    *model.get_mut(&prefix).unwrap() = *value;
                } else {
                    assert!(!model.contains_key(&prefix));
                }
            },
            Action::CheckLen => {
                assert_eq!(trie.len(), model.len());
                assert_eq!(trie.is_empty(), model.is_empty());
            },
            Action::CheckDump => {
                let dumped: BTreeSet<_> = trie.dump::<u32>().into_iter().collect();
                let expected: BTreeSet<_> = model.keys().copied().collect();
                assert_eq!(dumped, expected);
            },
            Action::CheckDepth => {
                let longest = model.keys().map(|prefix| prefix.len() as usize).max();
                if let Some(longest) = longest {
                    assert!(trie.max_depth() >= longest);
                }
            },
            Action::Clone => {
                trie = trie.clone();
            },
        }
    }
});
