/*!
# Graph Operations

Capability traits shared by every graph representation. Algorithms in [`algo`](crate::algo)
and generators in [`gens`](crate::gens) are written against these traits only, never
against a concrete representation.

Querying a node that is not part of the graph is never a fault: neighborhoods come back
empty, degrees are zero and lookups return `None`.
*/

use std::fmt::Debug;

use fxhash::{FxHashMap, FxHashSet};

use crate::{edge::*, node::*, utils::Set};

/// Marker for the orientation of a graph. Selects the edge identity used by the graph.
pub trait Direction: Copy + Default + Debug + 'static {
    /// *true* for directed graphs
    const DIRECTED: bool;

    /// Edge identity: [`OrderedPair`] for directed, [`UnorderedPair`] for undirected graphs
    type Pair<N: NodeId>: EdgePair<N>;
}

/// Marker for directed graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for undirected graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;
    type Pair<N: NodeId> = OrderedPair<N>;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
    type Pair<N: NodeId> = UnorderedPair<N>;
}

/// Associates a graph with its node type and its orientation
pub trait GraphType: Sized {
    /// Node identifier
    type Node: NodeId;

    /// Either [`Directed`] or [`Undirected`]
    type Dir: Direction;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Edge identity of a graph `G`
pub type EdgeOf<G> = <<G as GraphType>::Dir as Direction>::Pair<<G as GraphType>::Node>;

/// Provides getters pertaining to the node-set of a graph
pub trait GraphNodeOrder: GraphType {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in no particular order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Node>;

    /// Returns the graph's own copy of `u` or `None` if `u` is not a node of the graph.
    fn get_node(&self, u: &Self::Node) -> Option<&Self::Node>;

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: &Self::Node) -> bool {
        self.get_node(u).is_some()
    }
}

/// Provides getters pertaining to the edge-set of a graph
pub trait GraphEdgeOrder: GraphType {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all edges in no particular order
    fn edges(&self) -> impl Iterator<Item = &EdgeOf<Self>>;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Empty if `u` is not a node of the graph.
    ///
    /// Note that for directed graphs, this is the set of successors
    fn neighbors_of(&self, u: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    /// Returns an iterator over nodes `v` with an edge `(v, u)`.
    /// For undirected graphs this coincides with [`AdjacencyList::neighbors_of`].
    fn in_neighbors_of(&self, u: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: &Self::Node) -> NumNodes;

    /// Returns the number of incoming neighbors of `u`
    fn in_degree_of(&self, u: &Self::Node) -> NumNodes;

    /// Returns the neighbors of `u` that are members of `subset`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    /// use fxhash::FxHashSet;
    ///
    /// let g = Graph::from_edges([("a", "b"), ("a", "c"), ("a", "d")]);
    /// let subset: FxHashSet<_> = ["b", "d", "x"].into_iter().collect();
    ///
    /// let mut nbs: Vec<_> = g.neighbors_of_in(&"a", &subset).copied().collect();
    /// nbs.sort();
    /// assert_eq!(nbs, vec!["b", "d"]);
    /// ```
    fn neighbors_of_in<'a, S>(
        &'a self,
        u: &Self::Node,
        subset: &'a S,
    ) -> impl Iterator<Item = &'a Self::Node>
    where
        S: Set<Self::Node>,
    {
        self.neighbors_of(u).filter(move |v| subset.contains(v))
    }

    /// Returns an iterator over the outgoing edges `(u, v)` of `u`
    fn edges_from(&self, u: &Self::Node) -> impl Iterator<Item = EdgeOf<Self>> {
        self.neighbors_of(u)
            .map(move |v| <EdgeOf<Self> as EdgePair<Self::Node>>::new(u.clone(), v.clone()))
    }

    /// Returns an iterator over the incoming edges `(v, u)` of `u`.
    /// For undirected graphs these are the same edges as [`AdjacencyList::edges_from`].
    fn edges_to(&self, u: &Self::Node) -> impl Iterator<Item = EdgeOf<Self>> {
        self.in_neighbors_of(u)
            .map(move |v| <EdgeOf<Self> as EdgePair<Self::Node>>::new(v.clone(), u.clone()))
    }

    /// Returns *true* if `u` has neither outgoing nor incoming edges
    fn is_isolated(&self, u: &Self::Node) -> bool {
        self.degree_of(u) == 0 && self.in_degree_of(u) == 0
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Materializes the adjacency list `node -> successors` as an owned map
    fn adjacency_list(&self) -> FxHashMap<Self::Node, FxHashSet<Self::Node>> {
        self.vertices()
            .map(|u| (u.clone(), self.neighbors_of(u).cloned().collect()))
            .collect()
    }
}

/// Naming conveniences available on directed graphs only
pub trait DirectedAdjacencyList: AdjacencyList + GraphType<Dir = Directed> {
    /// Returns an iterator over the successors of `u`
    fn out_neighbors_of(&self, u: &Self::Node) -> impl Iterator<Item = &Self::Node> {
        self.neighbors_of(u)
    }

    /// Returns the number of successors of `u`
    fn out_degree_of(&self, u: &Self::Node) -> NumNodes {
        self.degree_of(u)
    }

    /// Returns the out-degree and in-degree of a given vertex
    fn total_degree_of(&self, u: &Self::Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns all nodes without incoming edges
    fn sources(&self) -> impl Iterator<Item = &Self::Node> {
        self.vertices().filter(move |u| self.in_degree_of(u) == 0)
    }

    /// Returns all nodes without outgoing edges
    fn sinks(&self) -> impl Iterator<Item = &Self::Node> {
        self.vertices().filter(move |u| self.out_degree_of(u) == 0)
    }
}

impl<G> DirectedAdjacencyList for G where G: AdjacencyList + GraphType<Dir = Directed> {}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphType {
    /// Returns *true* if the edge (u,v) exists in the graph.
    fn has_edge(&self, u: &Self::Node, v: &Self::Node) -> bool;

    /// Returns *true* if the given edge exists in the graph.
    fn contains_edge(&self, edge: &EdgeOf<Self>) -> bool {
        let (u, v) = edge.endpoints();
        self.has_edge(u, v)
    }

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: &Self::Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Note that for undirected graphs with edge {u,v} this function always returns *true*.
    fn has_bidirected_edge(&self, u: &Self::Node, v: &Self::Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without nodes
    fn new() -> Self;

    /// Creates a graph without nodes, reserving space for `nodes` nodes and `edges` edges
    fn with_capacity(nodes: NumNodes, edges: NumEdges) -> Self;
}

/// Provides functions to insert nodes
pub trait GraphNodeEditing: GraphType {
    /// Adds `u` without any edges.
    /// Returns *true* if `u` was not present before; otherwise this is a no-op.
    fn insert_node(&mut self, u: Self::Node) -> bool;

    /// Adds all nodes in the collection
    fn insert_nodes<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Self::Node>,
    {
        for u in nodes {
            self.insert_node(u);
        }
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNodeEditing {
    /// Adds the edge *(u,v)* to the graph, inserting missing endpoints.
    /// Returns *true* exactly if the edge was not present previously.
    fn insert_edge(&mut self, u: Self::Node, v: Self::Node) -> bool;

    /// Adds all edges in the collection
    fn insert_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Self::Node, Self::Node)>,
    {
        for (u, v) in edges {
            self.insert_edge(u, v);
        }
    }
}

/// Provides functions to delete nodes and edges. Deleting something absent is a no-op.
pub trait GraphRemoval: GraphType {
    /// Removes the edge *(u,v)* from the graph. I.e., the edge FROM u TO v in a directed graph.
    /// Returns *true* if the edge was present.
    fn remove_edge(&mut self, u: &Self::Node, v: &Self::Node) -> bool;

    /// Removes all edges adjacent to node `u` (in both directions) and returns their number.
    fn remove_edges_at_node(&mut self, u: &Self::Node) -> NumEdges;

    /// Removes `u` together with every edge referencing it.
    /// Returns *true* if `u` was present.
    fn remove_node(&mut self, u: &Self::Node) -> bool;

    /// Removes all nodes in the collection
    fn remove_nodes<'a, I>(&mut self, nodes: I)
    where
        Self::Node: 'a,
        I: IntoIterator<Item = &'a Self::Node>,
    {
        for u in nodes {
            self.remove_node(u);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphType {
    /// Create a graph from an iterator over edges; the node set consists of all endpoints
    fn from_edges<E>(edges: E) -> Self
    where
        E: IntoIterator<Item = (Self::Node, Self::Node)>;

    /// Create a graph from an iterator over nodes and an iterator over edges.
    /// Endpoints missing from `nodes` are added as well.
    fn from_nodes_and_edges<V, E>(nodes: V, edges: E) -> Self
    where
        V: IntoIterator<Item = Self::Node>,
        E: IntoIterator<Item = (Self::Node, Self::Node)>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn from_edges<E>(edges: E) -> Self
    where
        E: IntoIterator<Item = (Self::Node, Self::Node)>,
    {
        let mut graph = Self::new();
        graph.insert_edges(edges);
        graph
    }

    fn from_nodes_and_edges<V, E>(nodes: V, edges: E) -> Self
    where
        V: IntoIterator<Item = Self::Node>,
        E: IntoIterator<Item = (Self::Node, Self::Node)>,
    {
        let mut graph = Self::new();
        graph.insert_nodes(nodes);
        graph.insert_edges(edges);
        graph
    }
}
