/*!
# Edge Representation

An edge is identified by a pair of nodes:
- [`OrderedPair`] for **directed** edges: `OrderedPair(a, b) != OrderedPair(b, a)` unless `a == b`.
- [`UnorderedPair`] for **undirected** edges: `UnorderedPair::new(a, b) == UnorderedPair::new(b, a)`
  and both hash identically.

Both implement [`EdgePair`], which is what the graph representations are generic over.
*/

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::{node::NodeId, utils::unordered_hash};

/// Shared interface of [`OrderedPair`] and [`UnorderedPair`].
pub trait EdgePair<N>: Clone + Eq + Hash
where
    N: NodeId,
{
    /// Creates the edge between `u` and `v`.
    fn new(u: N, v: N) -> Self;

    /// Returns the first endpoint as given on construction
    fn first(&self) -> &N;

    /// Returns the second endpoint as given on construction
    fn second(&self) -> &N;

    /// Consumes the edge and returns both endpoints
    fn into_endpoints(self) -> (N, N);

    /// Returns *true* if this pair type describes directed edges
    fn is_directed() -> bool;

    /// Returns both endpoints as references
    fn endpoints(&self) -> (&N, &N) {
        (self.first(), self.second())
    }

    /// Returns *true* if both endpoints are equal
    fn is_loop(&self) -> bool {
        self.first() == self.second()
    }

    /// Returns *true* if `u` is one of the endpoints
    fn is_incident_to(&self, u: &N) -> bool {
        self.first() == u || self.second() == u
    }

    /// Returns the endpoint opposite to `u`, or `None` if `u` is not an endpoint.
    /// For a self-loop at `u` this returns `u` itself.
    fn opposite(&self, u: &N) -> Option<&N> {
        if self.first() == u {
            Some(self.second())
        } else if self.second() == u {
            Some(self.first())
        } else {
            None
        }
    }
}

/// A directed edge from `.0` to `.1`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OrderedPair<N>(pub N, pub N);

impl<N> OrderedPair<N> {
    /// Returns the tail of the edge
    pub fn source(&self) -> &N {
        &self.0
    }

    /// Returns the head of the edge
    pub fn target(&self) -> &N {
        &self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self
    where
        N: Clone,
    {
        OrderedPair(self.1.clone(), self.0.clone())
    }
}

impl<N: NodeId> EdgePair<N> for OrderedPair<N> {
    fn new(u: N, v: N) -> Self {
        OrderedPair(u, v)
    }

    fn first(&self) -> &N {
        &self.0
    }

    fn second(&self) -> &N {
        &self.1
    }

    fn into_endpoints(self) -> (N, N) {
        (self.0, self.1)
    }

    fn is_directed() -> bool {
        true
    }
}

impl<N: Display> Display for OrderedPair<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<N: Debug> Debug for OrderedPair<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<N> From<(N, N)> for OrderedPair<N> {
    fn from(value: (N, N)) -> Self {
        OrderedPair(value.0, value.1)
    }
}

/// An undirected edge between two nodes.
///
/// Equality and hashing ignore the order of the endpoints. Since nodes are not required
/// to be ordered, the pair is never normalized; instead the hash combines the hashes of
/// both endpoints commutatively.
#[derive(Copy, Clone)]
pub struct UnorderedPair<N>(N, N);

impl<N> UnorderedPair<N> {
    /// Returns the endpoint with smaller value first
    pub fn normalized(self) -> Self
    where
        N: Ord,
    {
        if self.0 <= self.1 {
            self
        } else {
            UnorderedPair(self.1, self.0)
        }
    }
}

impl<N: NodeId> EdgePair<N> for UnorderedPair<N> {
    fn new(u: N, v: N) -> Self {
        UnorderedPair(u, v)
    }

    fn first(&self) -> &N {
        &self.0
    }

    fn second(&self) -> &N {
        &self.1
    }

    fn into_endpoints(self) -> (N, N) {
        (self.0, self.1)
    }

    fn is_directed() -> bool {
        false
    }
}

impl<N: PartialEq> PartialEq for UnorderedPair<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<N: Eq> Eq for UnorderedPair<N> {}

impl<N: Hash> Hash for UnorderedPair<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(unordered_hash([&self.0, &self.1]));
    }
}

impl<N: Display> Display for UnorderedPair<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.0, self.1)
    }
}

impl<N: Debug> Debug for UnorderedPair<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{:?},{:?}}}", self.0, self.1)
    }
}

impl<N> From<(N, N)> for UnorderedPair<N> {
    fn from(value: (N, N)) -> Self {
        UnorderedPair(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::{FxHashSet, hash64};

    #[test]
    fn unordered_pair_is_symmetric() {
        assert_eq!(UnorderedPair::new(1, 2), UnorderedPair::new(2, 1));
        assert_eq!(
            hash64(&UnorderedPair::new(1, 2)),
            hash64(&UnorderedPair::new(2, 1))
        );

        assert_ne!(UnorderedPair::new(1, 2), UnorderedPair::new(1, 3));
        assert_eq!(UnorderedPair::new("a", "a"), UnorderedPair::new("a", "a"));

        let set: FxHashSet<_> = [(1, 2), (2, 1), (3, 3)]
            .into_iter()
            .map(UnorderedPair::from)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordered_pair_has_orientation() {
        assert_ne!(OrderedPair(1, 2), OrderedPair(2, 1));
        assert_eq!(OrderedPair(4, 4), OrderedPair(4, 4).reverse());
        assert_eq!(OrderedPair(1, 2).reverse(), OrderedPair(2, 1));
        assert_eq!(OrderedPair(1, 2).source(), &1);
        assert_eq!(OrderedPair(1, 2).target(), &2);
    }

    #[test]
    fn endpoints() {
        let e = UnorderedPair::new('a', 'b');
        assert_eq!(e.opposite(&'a'), Some(&'b'));
        assert_eq!(e.opposite(&'b'), Some(&'a'));
        assert_eq!(e.opposite(&'c'), None);
        assert!(!e.is_loop());
        assert!(UnorderedPair::new('c', 'c').is_loop());
        assert_eq!(UnorderedPair::new(5, 2).normalized().into_endpoints(), (2, 5));

        assert!(OrderedPair::<u8>::is_directed());
        assert!(!UnorderedPair::<u8>::is_directed());
    }
}
