/*!
# Directed Graphs

A directed edge `(u, v)` is identified by an [`OrderedPair`]: `(u, v)` and `(v, u)` are
distinct edges. Every node keeps its successors and its predecessors, so
[`AdjacencyList::in_neighbors_of`] and [`AdjacencyList::in_degree_of`] do not scan the graph.
*/

use crate::testing::test_graph_ops;

use super::*;

/// Directed, unweighted graph without node payload.
///
/// # Examples
/// ```
/// use lgraphs::prelude::*;
///
/// let mut g = DirectedGraph::new();
/// g.insert_edge(1, 2);
///
/// assert!(g.has_edge(&1, &2));
/// assert!(!g.has_edge(&2, &1));
/// assert_eq!(g.in_neighbors_of(&2).collect::<Vec<_>>(), vec![&1]);
/// ```
pub type DirectedGraph<N> = AdjGraph<N, Directed>;

/// Directed graph with edge weights of type `W`
pub type WeightedDirectedGraph<N, W> = AdjGraph<N, Directed, (), W>;

/// Directed, unweighted graph storing a payload of type `D` at every node
pub type DirectedDataGraph<N, D> = AdjGraph<N, Directed, D>;

/// Directed graph with node payloads and edge weights
pub type WeightedDirectedDataGraph<N, D, W> = AdjGraph<N, Directed, D, W>;

impl<N, D, W> AdjGraph<N, Directed, D, W>
where
    N: NodeId,
{
    /// Returns a copy of the graph with every edge reversed.
    /// Payloads and weights are kept.
    pub fn reversed(&self) -> Self
    where
        D: Clone,
        W: Clone,
    {
        Self {
            nbs: self
                .nbs
                .iter()
                .map(|(u, nb)| {
                    (
                        u.clone(),
                        Neighborhood {
                            data: nb.data.clone(),
                            out_nbs: nb.in_nbs.clone(),
                            in_nbs: nb.out_nbs.clone(),
                        },
                    )
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|(e, w)| (e.reverse(), w.clone()))
                .collect(),
            _dir: PhantomData,
        }
    }
}

test_graph_ops!(
    test_directed_graph,
    DirectedGraph<usize>,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphRemoval
    )
);

test_graph_ops!(
    test_directed_data_graph,
    DirectedDataGraph<usize, String>,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphRemoval
    )
);
