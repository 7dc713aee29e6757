use fxhash::FxHashSet;

use crate::node::{NodeId, NumNodes};

/// Per-node record of an [`AdjGraph`](super::AdjGraph): the node's payload together with its
/// adjacency.
///
/// Undirected graphs only use `out_nbs` (which then holds all neighbors); directed graphs
/// additionally mirror every edge `(u, v)` as `u` in the `in_nbs` of `v`.
#[derive(Debug, Clone)]
pub struct Neighborhood<N, D>
where
    N: NodeId,
{
    pub(super) data: D,
    pub(super) out_nbs: FxHashSet<N>,
    pub(super) in_nbs: FxHashSet<N>,
}

impl<N, D> Neighborhood<N, D>
where
    N: NodeId,
{
    /// Creates a neighborhood without neighbors
    pub fn new(data: D) -> Self {
        Self {
            data,
            out_nbs: FxHashSet::default(),
            in_nbs: FxHashSet::default(),
        }
    }

    /// Returns the payload
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Returns the number of outgoing neighbors
    pub fn num_of_out_neighbors(&self) -> NumNodes {
        self.out_nbs.len()
    }

    /// Returns the number of incoming neighbors
    pub fn num_of_in_neighbors(&self) -> NumNodes {
        self.in_nbs.len()
    }

    /// Returns *true* if `v` is an outgoing neighbor
    pub fn has_out_neighbor(&self, v: &N) -> bool {
        self.out_nbs.contains(v)
    }

    /// Replaces the payload, keeping the adjacency
    pub(super) fn map_data<E>(self, f: impl FnOnce(D) -> E) -> Neighborhood<N, E> {
        Neighborhood {
            data: f(self.data),
            out_nbs: self.out_nbs,
            in_nbs: self.in_nbs,
        }
    }

    /// Copies the adjacency without the payload
    pub(super) fn clone_adjacency(&self) -> Neighborhood<N, ()> {
        Neighborhood {
            data: (),
            out_nbs: self.out_nbs.clone(),
            in_nbs: self.in_nbs.clone(),
        }
    }
}

impl<N, D> Default for Neighborhood<N, D>
where
    N: NodeId,
    D: Default,
{
    fn default() -> Self {
        Self::new(D::default())
    }
}
