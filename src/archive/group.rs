//! Order-preserving grouping by derived key.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A bucket of items sharing one derived key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

/// Partition `items` into groups by derived key.
///
/// Groups appear in first-seen key order and items keep their input order
/// within each group; every item lands in exactly one group. Linear in the
/// input size. Callers re-sort the returned groups when a different group
/// order is needed.
pub fn group_by<K, T, F>(items: impl IntoIterator<Item = T>, key_of: F) -> Vec<Group<K, T>>
where
    K: Copy + Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<Group<K, T>> = Vec::new();

    for item in items {
        let key = key_of(&item);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                key,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups
}
