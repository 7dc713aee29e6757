/*!
# Substructure Generators

Wires paths, cycles and cliques into an existing graph. Nodes that are not yet part of
the graph are inserted along the way.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = DirectedGraph::new();
g.connect_path(["a", "b", "c"]);
g.connect_cycle(["c", "d", "e"]);

assert_eq!(g.number_of_nodes(), 5);
assert_eq!(g.number_of_edges(), 5);
assert!(g.has_edge(&"e", &"c"));
```
*/

use itertools::Itertools;

use super::*;

/// Adds paths, cycles and cliques over given nodes; available on every editable graph.
pub trait GeneratorSubstructures: GraphType {
    /// Inserts an edge between every two consecutive nodes
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Self::Node>;

    /// Like [`GeneratorSubstructures::connect_path`] plus an edge from the last node back
    /// to the first. A single node yields a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Self::Node>;

    /// Makes the given nodes pairwise adjacent; directed graphs get both orientations.
    /// Duplicates are ignored, and every node is inserted even if it receives no edge.
    /// With `with_loops` each node additionally gets a self-loop.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = Graph::new();
    /// g.connect_clique([0, 1, 2], false);
    ///
    /// assert!(g.has_edge(&0, &1));
    /// assert!(g.has_edge(&1, &2));
    /// assert!(g.has_edge(&0, &2));
    /// assert_eq!(g.number_of_edges(), 3);
    /// ```
    fn connect_clique<C>(&mut self, nodes: C, with_loops: bool)
    where
        C: IntoIterator<Item = Self::Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Self::Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.insert_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Self::Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.insert_edge(prev, cur.clone());
                prev = cur;
            }

            self.insert_edge(prev, first);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C, with_loops: bool)
    where
        C: IntoIterator<Item = Self::Node>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        self.insert_nodes(nodes.iter().cloned());

        for (i, u) in nodes.iter().enumerate() {
            for (j, v) in nodes.iter().enumerate() {
                if (i == j && !with_loops) || (Self::is_undirected() && i > j) {
                    continue;
                }

                self.insert_edge(u.clone(), v.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = DirectedGraph::<u32>::new();
            g.connect_path([]);
            assert!(g.is_empty());
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_path([2, 1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&2, &1));
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.edges().copied().sorted().collect_vec(),
                vec![OrderedPair(0, 3), OrderedPair(1, 4), OrderedPair(3, 1)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = DirectedGraph::<u32>::new();
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&1, &1));
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(
                g.edges().copied().sorted().collect_vec(),
                vec![
                    OrderedPair(0, 3),
                    OrderedPair(1, 4),
                    OrderedPair(3, 1),
                    OrderedPair(4, 0)
                ]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = DirectedGraph::<u32>::new();
            g.connect_clique([], true);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_clique([1], false);
            assert_eq!(g.number_of_edges(), 0);
            assert!(g.contains_node(&1));
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_clique([1], true);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&1, &1));
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_clique([1, 2, 4], false);
            assert_eq!(g.number_of_edges(), 6);
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_clique([1, 2, 4, 2], true);
            assert_eq!(g.number_of_edges(), 9);
        }

        {
            let mut g = Graph::new();
            g.connect_clique(["x", "y", "z"], true);
            assert_eq!(g.number_of_edges(), 6);
        }
    }
}
