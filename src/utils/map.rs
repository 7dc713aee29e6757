/*!
# Node Maps

[`Map`] is the key-value interface the traversal engine uses for back-pointers in
[`Traversal::shortest_path_with`](crate::algo::Traversal::shortest_path_with).
Implemented for hash maps with any hasher and for `BTreeMap`.
*/

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Key-value store with point lookups.
pub trait Map<K, V> {
    /// Stores `value` under `key` and returns the value previously stored there
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    fn get(&self, key: &K) -> Option<&V>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored keys
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Map<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;

    use super::*;

    fn back_pointers<M: Map<u32, u32> + Default>() {
        let mut parent = M::default();
        assert!(parent.is_empty());

        assert_eq!(parent.insert(2, 1), None);
        assert_eq!(parent.insert(3, 2), None);
        assert_eq!(parent.insert(3, 1), Some(2));
        assert_eq!(parent.len(), 2);

        assert_eq!(parent.get(&3), Some(&1));
        assert!(parent.contains_key(&2));
        assert!(!parent.contains_key(&1));

        assert_eq!(parent.remove(&2), Some(1));
        assert_eq!(parent.remove(&2), None);
        assert_eq!(parent.len(), 1);
    }

    #[test]
    fn implementations() {
        back_pointers::<FxHashMap<_, _>>();
        back_pointers::<HashMap<_, _>>();
        back_pointers::<BTreeMap<_, _>>();
    }
}
