/*!
# Undirected Graphs

An undirected edge `{u, v}` is identified by an [`UnorderedPair`], so `{u, v}` and `{v, u}`
denote the same edge. Neighborhoods are symmetric: `v` is a neighbor of `u` exactly if `u` is
a neighbor of `v`, and in-neighbors coincide with neighbors.
*/

use crate::testing::test_graph_ops;

use super::*;

/// Undirected, unweighted graph without node payload.
///
/// # Examples
/// ```
/// use lgraphs::prelude::*;
///
/// let mut g = Graph::new();
/// g.insert_edge("a", "b");
///
/// assert!(g.has_edge(&"b", &"a"));
/// assert!(!g.insert_edge("b", "a"));
/// assert_eq!(g.number_of_edges(), 1);
/// ```
pub type Graph<N> = AdjGraph<N, Undirected>;

/// Undirected graph with edge weights of type `W`
pub type WeightedGraph<N, W> = AdjGraph<N, Undirected, (), W>;

/// Undirected, unweighted graph storing a payload of type `D` at every node
pub type DataGraph<N, D> = AdjGraph<N, Undirected, D>;

/// Undirected graph with node payloads and edge weights
pub type WeightedDataGraph<N, D, W> = AdjGraph<N, Undirected, D, W>;

test_graph_ops!(
    test_graph,
    Graph<usize>,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphRemoval)
);

test_graph_ops!(
    test_data_graph,
    DataGraph<usize, String>,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphRemoval)
);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn symmetric_neighborhoods() {
        let mut g = Graph::new();
        g.insert_edges([(1, 2), (2, 3), (3, 3)]);

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.neighbors_of(&2).copied().sorted().collect_vec(), vec![1, 3]);
        assert_eq!(g.in_neighbors_of(&2).copied().sorted().collect_vec(), vec![1, 3]);
        assert!(g.has_bidirected_edge(&1, &2));
        assert!(g.has_self_loop(&3));
        assert_eq!(g.degree_of(&3), 2);

        assert!(g.contains_edge(&UnorderedPair::new(2, 1)));
        assert_eq!(g.edges_from(&1).collect_vec(), vec![UnorderedPair::new(1, 2)]);
    }

    #[test]
    fn remove_node_with_self_loop() {
        let mut g = Graph::from_edges([(1, 1), (1, 2), (2, 3)]);

        assert!(g.remove_node(&1));
        assert!(!g.contains_node(&1));
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.neighbors_of(&2).copied().collect_vec(), vec![3]);
        assert!(!g.remove_node(&1));
    }

    #[test]
    fn remove_edge_either_orientation() {
        let mut g = Graph::from_edges([("x", "y")]);

        assert!(g.remove_edge(&"y", &"x"));
        assert!(!g.remove_edge(&"x", &"y"));
        assert!(g.is_singleton_graph());
        // endpoints stay
        assert_eq!(g.number_of_nodes(), 2);
    }

    #[test]
    fn clones_are_independent() {
        let g = Graph::from_edges([(1, 2), (2, 3)]);
        let mut h = g.clone();
        assert_eq!(g, h);

        h.insert_edge(3, 4);
        h.remove_node(&1);

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 2);
        assert!(g.has_edge(&1, &2));
        assert!(!g.contains_node(&4));
        assert_ne!(g, h);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let g = Graph::from_edges([(1, 2), (2, 3)]);
        let h = Graph::from_edges([(3, 2), (2, 1)]);
        assert_eq!(g, h);

        let h = Graph::from_nodes_and_edges([4], [(3, 2), (2, 1)]);
        assert_ne!(g, h);
    }

    #[test]
    fn adjacency_list_snapshot() {
        let g = Graph::from_nodes_and_edges(["c"], [("a", "b")]);
        let adj = g.adjacency_list();

        assert_eq!(adj.len(), 3);
        assert!(adj[&"a"].contains(&"b"));
        assert!(adj[&"b"].contains(&"a"));
        assert!(adj[&"c"].is_empty());
    }

    #[test]
    fn debug_lists_nodes_and_edges() {
        let g = Graph::from_edges([(1, 2)]);
        let repr = format!("{g:?}");
        assert!(repr.contains("directed: false"));
        assert!(repr.contains("{1,2}") || repr.contains("{2,1}"));
    }
}
