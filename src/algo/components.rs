/*!
# Component Descriptors

[`Component`] is the node set of one strongly connected component. It is hashable and
compared by membership, so it can itself serve as the node type of a graph
(see [`Connectivity::dagify`]).

[`SccMap`] is the result of a complete SCC analysis: every node of the analysed graph is
mapped to the component containing it.
*/

use std::{
    fmt::{Debug, Formatter},
    hash::{Hash, Hasher},
    sync::Arc,
};

use super::*;

/// Immutable set of nodes forming one component.
///
/// Clones share the underlying set. The hash is computed once on construction and does not
/// depend on the iteration order of the members.
#[derive(Clone)]
pub struct Component<N>
where
    N: NodeId,
{
    members: Arc<FxHashSet<N>>,
    hash: u64,
}

impl<N> Component<N>
where
    N: NodeId,
{
    /// Creates a component from its members
    pub fn new(members: FxHashSet<N>) -> Self {
        let hash = unordered_hash(&members);
        Self {
            members: Arc::new(members),
            hash,
        }
    }

    /// Returns *true* if `u` is a member of the component
    pub fn contains(&self, u: &N) -> bool {
        self.members.contains(u)
    }

    /// Returns the number of members
    pub fn len(&self) -> NumNodes {
        self.members.len()
    }

    /// Returns *true* if the component has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns *true* if the component consists of exactly one node
    pub fn is_singleton(&self) -> bool {
        self.len() == 1
    }

    /// Returns an iterator over the members in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.members.iter()
    }

    /// Returns the member set
    pub fn members(&self) -> &FxHashSet<N> {
        &self.members
    }

    /// Returns the member set, cloning it only if it is still shared
    pub fn into_members(self) -> FxHashSet<N> {
        Arc::unwrap_or_clone(self.members)
    }
}

impl<N> PartialEq for Component<N>
where
    N: NodeId,
{
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && (Arc::ptr_eq(&self.members, &other.members) || self.members == other.members)
    }
}

impl<N> Eq for Component<N> where N: NodeId {}

impl<N> Hash for Component<N>
where
    N: NodeId,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<N> Debug for Component<N>
where
    N: NodeId + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}

impl<N> FromIterator<N> for Component<N>
where
    N: NodeId,
{
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Total mapping from nodes to their strongly connected component.
///
/// Components are stored once in an arena and addressed by their index; components are
/// indexed in the order in which they were discovered, which is a reverse topological
/// order of the condensation.
#[derive(Clone)]
pub struct SccMap<N>
where
    N: NodeId,
{
    components: Vec<Component<N>>,
    index: FxHashMap<N, usize>,
}

impl<N> SccMap<N>
where
    N: NodeId,
{
    /// Builds the map from a partition of the nodes into components
    pub fn from_components<'a, I, C>(components: I) -> Self
    where
        N: 'a,
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'a N>,
    {
        let mut index = FxHashMap::default();
        let components = components
            .into_iter()
            .enumerate()
            .map(|(i, members)| {
                members
                    .into_iter()
                    .inspect(|&u| {
                        index.insert(u.clone(), i);
                    })
                    .cloned()
                    .collect()
            })
            .collect();

        Self { components, index }
    }

    /// Returns the component containing `u`, or `None` if `u` was not part of the analysed graph
    pub fn component_of(&self, u: &N) -> Option<&Component<N>> {
        self.components.get(*self.index.get(u)?)
    }

    /// Returns the index of the component containing `u`
    pub fn component_index_of(&self, u: &N) -> Option<usize> {
        self.index.get(u).copied()
    }

    /// Returns *true* if `u` and `v` are known and lie in the same component,
    /// i.e. if they are mutually reachable.
    pub fn same_component(&self, u: &N, v: &N) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(cu), Some(cv)) => cu == cv,
            _ => false,
        }
    }

    /// Returns the number of components
    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }

    /// Returns the number of mapped nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.index.len()
    }

    /// Returns *true* if no node is mapped
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns all components in discovery order
    pub fn components(&self) -> &[Component<N>] {
        &self.components
    }

    /// Returns an iterator over all nodes together with their component
    pub fn iter(&self) -> impl Iterator<Item = (&N, &Component<N>)> {
        self.index
            .iter()
            .map(|(u, &i)| (u, &self.components[i]))
    }

    /// Consumes the map and returns the components in discovery order
    pub fn into_components(self) -> Vec<Component<N>> {
        self.components
    }
}

impl<N> Debug for SccMap<N>
where
    N: NodeId + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
