/*!
# Node Sets

[`Set`] is the membership interface the traversal engine needs from a visited-set, and
what [`AdjacencyList::neighbors_of_in`](crate::ops::AdjacencyList::neighbors_of_in)
accepts as a node filter. It is implemented for hash sets with any hasher
(e.g. `FxHashSet` or a `HashSet` with the DoS-resistant default hasher) and for
`BTreeSet` when nodes are ordered.
*/

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// Membership-oriented set of values.
pub trait Set<T> {
    /// Adds `value` and returns *true* if it was not contained before
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` and returns *true* if it was contained before
    fn remove(&mut self, value: &T) -> bool;

    fn contains(&self, value: &T) -> bool;

    /// Number of contained values
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Adds all values of `values`; returns how many of them were new
    fn extend_from<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .filter_map(|value| self.insert(value).then_some(()))
            .count()
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }
}

impl<T> Set<T> for BTreeSet<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use super::*;

    fn membership<S: Set<&'static str> + Default>() {
        let mut set = S::default();
        assert!(set.is_empty());

        assert!(set.insert("b"));
        assert!(!set.insert("b"));
        assert_eq!(set.extend_from(["a", "b", "c"]), 2);
        assert_eq!(set.len(), 3);

        assert!(set.contains(&"a"));
        assert!(set.remove(&"a"));
        assert!(!set.remove(&"a"));
        assert!(!set.contains(&"a"));

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn implementations() {
        membership::<FxHashSet<_>>();
        membership::<HashSet<_>>();
        membership::<BTreeSet<_>>();
    }
}
