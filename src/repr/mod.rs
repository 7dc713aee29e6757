/*!
# Graph Representations

All graph variants share one storage type, [`AdjGraph<N, Dir, D, W>`], parameterized by
- `N`: the node identifier (see [`NodeId`]),
- `Dir`: [`Directed`] or [`Undirected`], which also fixes the edge identity
  ([`OrderedPair`] or [`UnorderedPair`]),
- `D`: the per-node payload (`()` for graphs without payload),
- `W`: the edge weight (`()` for unweighted graphs, any [`Weight`] otherwise).

The eight public variants are type aliases over it:

| | unweighted | weighted |
|---|---|---|
| undirected | [`Graph`] | [`WeightedGraph`] |
| directed | [`DirectedGraph`] | [`WeightedDirectedGraph`] |
| undirected + payload | [`DataGraph`] | [`WeightedDataGraph`] |
| directed + payload | [`DirectedDataGraph`] | [`WeightedDirectedDataGraph`] |

Internally, every node owns a [`Neighborhood`] (its payload plus adjacency sets) and every edge
is a key of the edge map whose value is the weight. Both structures are kept in sync by all
mutating operations, so every endpoint of an edge is always a node of the graph.

Graphs are plain owned values: cloning yields an independent graph and mutations of one
clone are never observed by another.
*/

use std::{
    collections::hash_map::Entry,
    fmt::{Debug, Formatter},
    marker::PhantomData,
};

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{edge::*, node::*, ops::*};

mod data;
mod directed;
mod neighborhood;
mod undirected;
mod weighted;

pub use directed::*;
pub use neighborhood::Neighborhood;
pub use undirected::*;
pub use weighted::*;

/// Adjacency-map graph storage shared by all graph variants.
pub struct AdjGraph<N, Dir, D = (), W = ()>
where
    N: NodeId,
    Dir: Direction,
{
    nbs: FxHashMap<N, Neighborhood<N, D>>,
    edges: FxHashMap<Dir::Pair<N>, W>,
    _dir: PhantomData<Dir>,
}

impl<N, Dir, D, W> AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    /// Builds the edge identity between `u` and `v`
    pub(crate) fn pair(u: N, v: N) -> Dir::Pair<N> {
        <Dir::Pair<N> as EdgePair<N>>::new(u, v)
    }

    /// Inserts or overwrites the edge `(u, v)`, inserting missing endpoints.
    /// Returns the previous weight if the edge existed.
    fn link(&mut self, u: N, v: N, weight: W) -> Option<W>
    where
        D: Default,
    {
        self.nbs
            .entry(u.clone())
            .or_default()
            .out_nbs
            .insert(v.clone());

        let v_nbs = self.nbs.entry(v.clone()).or_default();
        if Dir::DIRECTED {
            v_nbs.in_nbs.insert(u.clone());
        } else {
            v_nbs.out_nbs.insert(u.clone());
        }

        self.edges.insert(Self::pair(u, v), weight)
    }

    /// Removes the edge `(u, v)` and returns its weight if it existed.
    fn unlink(&mut self, u: &N, v: &N) -> Option<W> {
        let weight = self.edges.remove(&Self::pair(u.clone(), v.clone()))?;

        if let Some(nb) = self.nbs.get_mut(u) {
            nb.out_nbs.remove(v);
        }

        if let Some(nb) = self.nbs.get_mut(v) {
            if Dir::DIRECTED {
                nb.in_nbs.remove(u);
            } else {
                nb.out_nbs.remove(u);
            }
        }

        Some(weight)
    }

    /// Removes every edge incident to `u` and returns their number.
    fn unlink_all(&mut self, u: &N) -> NumEdges {
        let Some(nb) = self.nbs.get_mut(u) else {
            return 0;
        };

        let out_nbs = std::mem::take(&mut nb.out_nbs);
        let in_nbs = std::mem::take(&mut nb.in_nbs);
        let mut removed = 0;

        for v in &out_nbs {
            removed += self
                .edges
                .remove(&Self::pair(u.clone(), v.clone()))
                .is_some() as NumEdges;

            if v == u {
                continue;
            }

            if let Some(nb) = self.nbs.get_mut(v) {
                if Dir::DIRECTED {
                    nb.in_nbs.remove(u);
                } else {
                    nb.out_nbs.remove(u);
                }
            }
        }

        // only populated in directed graphs
        for w in &in_nbs {
            removed += self
                .edges
                .remove(&Self::pair(w.clone(), u.clone()))
                .is_some() as NumEdges;

            if w == u {
                continue;
            }

            if let Some(nb) = self.nbs.get_mut(w) {
                nb.out_nbs.remove(u);
            }
        }

        removed
    }

    /// Removes `u` together with all incident edges and returns its payload.
    /// Returns `None` if `u` was not a node of the graph.
    pub fn take_node(&mut self, u: &N) -> Option<D> {
        self.unlink_all(u);
        self.nbs.remove(u).map(|nb| nb.data)
    }

    /// Returns the [`Neighborhood`] record of `u`
    pub fn neighborhood_of(&self, u: &N) -> Option<&Neighborhood<N, D>> {
        self.nbs.get(u)
    }

    /// Removes all nodes and edges
    pub fn clear(&mut self) {
        self.nbs.clear();
        self.edges.clear();
    }
}

impl<N, Dir, D, W> Clone for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
    D: Clone,
    W: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nbs: self.nbs.clone(),
            edges: self.edges.clone(),
            _dir: PhantomData,
        }
    }
}

impl<N, Dir, D, W> Default for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    fn default() -> Self {
        Self {
            nbs: FxHashMap::default(),
            edges: FxHashMap::default(),
            _dir: PhantomData,
        }
    }
}

/// Two graphs are equal if they have the same nodes with equal payloads and the same edges
/// with equal weights.
impl<N, Dir, D, W> PartialEq for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
    D: PartialEq,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.nbs.len() == other.nbs.len()
            && self.edges == other.edges
            && self
                .nbs
                .iter()
                .all(|(u, nb)| other.nbs.get(u).is_some_and(|o| o.data == nb.data))
    }
}

impl<N, Dir, D, W> Debug for AdjGraph<N, Dir, D, W>
where
    N: NodeId + Debug,
    Dir: Direction,
    Dir::Pair<N>: Debug,
    D: Debug,
    W: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjGraph")
            .field("directed", &Dir::DIRECTED)
            .field(
                "nodes",
                &self.nbs.iter().map(|(u, nb)| (u, &nb.data)).collect_vec(),
            )
            .field("edges", &self.edges)
            .finish()
    }
}

impl<N, Dir, D, W> GraphType for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    type Node = N;
    type Dir = Dir;
}

impl<N, Dir, D, W> GraphNodeOrder for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &N> {
        self.nbs.keys()
    }

    fn get_node(&self, u: &N) -> Option<&N> {
        self.nbs.get_key_value(u).map(|(u, _)| u)
    }
}

impl<N, Dir, D, W> GraphEdgeOrder for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len()
    }

    fn edges(&self) -> impl Iterator<Item = &Dir::Pair<N>> {
        self.edges.keys()
    }
}

impl<N, Dir, D, W> AdjacencyList for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    fn neighbors_of(&self, u: &N) -> impl Iterator<Item = &N> {
        self.nbs
            .get(u)
            .into_iter()
            .flat_map(|nb| nb.out_nbs.iter())
    }

    fn in_neighbors_of(&self, u: &N) -> impl Iterator<Item = &N> {
        self.nbs.get(u).into_iter().flat_map(|nb| {
            if Dir::DIRECTED {
                nb.in_nbs.iter()
            } else {
                nb.out_nbs.iter()
            }
        })
    }

    fn degree_of(&self, u: &N) -> NumNodes {
        self.nbs.get(u).map_or(0, |nb| nb.out_nbs.len())
    }

    fn in_degree_of(&self, u: &N) -> NumNodes {
        self.nbs.get(u).map_or(0, |nb| {
            if Dir::DIRECTED {
                nb.in_nbs.len()
            } else {
                nb.out_nbs.len()
            }
        })
    }
}

impl<N, Dir, D, W> AdjacencyTest for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    fn has_edge(&self, u: &N, v: &N) -> bool {
        self.nbs.get(u).is_some_and(|nb| nb.out_nbs.contains(v))
    }
}

impl<N, Dir, D, W> GraphNew for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    fn new() -> Self {
        Self::default()
    }

    fn with_capacity(nodes: NumNodes, edges: NumEdges) -> Self {
        Self {
            nbs: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edges: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
            _dir: PhantomData,
        }
    }
}

impl<N, Dir, D, W> GraphNodeEditing for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
    D: Default,
{
    fn insert_node(&mut self, u: N) -> bool {
        match self.nbs.entry(u) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Neighborhood::default());
                true
            }
        }
    }
}

/// Edges of unweighted graphs. Weighted graphs use
/// [`AdjGraph::insert_weighted_edge`] instead.
impl<N, Dir, D> GraphEdgeEditing for AdjGraph<N, Dir, D, ()>
where
    N: NodeId,
    Dir: Direction,
    D: Default,
{
    fn insert_edge(&mut self, u: N, v: N) -> bool {
        self.link(u, v, ()).is_none()
    }
}

impl<N, Dir, D, W> GraphRemoval for AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    fn remove_edge(&mut self, u: &N, v: &N) -> bool {
        self.unlink(u, v).is_some()
    }

    fn remove_edges_at_node(&mut self, u: &N) -> NumEdges {
        self.unlink_all(u)
    }

    fn remove_node(&mut self, u: &N) -> bool {
        self.take_node(u).is_some()
    }
}
