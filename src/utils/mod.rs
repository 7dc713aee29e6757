/*!
# Utilities

Provides abstractions over [`Set`] and [`Map`] so algorithms can be parameterized by
their container types, the [`FromCapacity`] helper to pre-size them, and order-independent
hashing used by [`UnorderedPair`](crate::edge::UnorderedPair) and
[`Component`](crate::algo::Component), and [`GeometricSkips`] for sampling sparse
Bernoulli trials.
*/

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{Hash, RandomState},
};

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};

mod geometric;
pub mod map;
pub mod set;

pub use geometric::GeometricSkips;
pub use map::Map;
pub use set::Set;

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// Hash-based containers only reserve `used`; tree-based containers ignore both. If you only have one value as an upper bound,
    /// provide it as both arguments.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

impl<K, V> FromCapacity for HashMap<K, V, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<K, V> FromCapacity for FxHashMap<K, V> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

impl<T> FromCapacity for BTreeSet<T> {
    fn from_total_used_capacity(_total: usize, _used: usize) -> Self {
        Self::new()
    }
}

impl<K, V> FromCapacity for BTreeMap<K, V> {
    fn from_total_used_capacity(_total: usize, _used: usize) -> Self {
        Self::new()
    }
}

/// Hashes a collection of values independently of their iteration order.
///
/// Every item is hashed on its own with `FxHash` and the results are combined with a
/// commutative operation, so any permutation of the same items yields the same value.
pub fn unordered_hash<'a, T, I>(items: I) -> u64
where
    T: Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| finalize(fxhash::hash64(item)))
        .fold(0u64, |acc, h| acc.wrapping_add(h))
}

/// Murmur3 finalizer. `FxHash` is linear on small integers, so without it
/// `{1, 4}` and `{2, 3}` would collide.
#[inline]
fn finalize(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^ (x >> 33)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_hash_ignores_order() {
        assert_eq!(unordered_hash(&[1, 2, 3]), unordered_hash(&[3, 1, 2]));
        assert_eq!(unordered_hash(["a", "b"].iter()), unordered_hash(["b", "a"].iter()));
        assert_ne!(unordered_hash(&[1, 2]), unordered_hash(&[1, 3]));
        assert_ne!(unordered_hash(&[1, 4]), unordered_hash(&[2, 3]));
        assert_eq!(unordered_hash(std::iter::empty::<&u32>()), 0);
    }
}
