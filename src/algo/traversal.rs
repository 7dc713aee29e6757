/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- A generic, lazy traversal iterator ([`TraversalSearch`]) with and without predecessor
  tracking, used for breadth-first search.
- Breadth-first shortest unweighted paths.
- Topological ordering for directed acyclic graphs.
- A high-level [`Traversal`] trait that exposes these algorithms directly as methods on
  graph data structures.

Traversals never copy node identifiers: they borrow the graph's own copy of every node
and only clone when an owned result (a path, an order) is requested.
*/

use std::{collections::VecDeque, marker::PhantomData};

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Item type of a [`TraversalSearch`]: a borrowed node, optionally paired with the node
/// it was discovered from.
///
/// `&N` drops the predecessor, [`PredecessorOfNode`] keeps it.
pub trait SequencedItem<'a, N: 'a>: Clone {
    /// Item for `item` discovered via an edge from `predecessor`
    fn new_with_predecessor(predecessor: &'a N, item: &'a N) -> Self;

    /// Item for a start node
    fn new_without_predecessor(item: &'a N) -> Self;

    fn item(&self) -> &'a N;

    /// `None` for start nodes and for items that do not track predecessors
    fn predecessor(&self) -> Option<&'a N>;

    fn predecessor_with_item(&self) -> (Option<&'a N>, &'a N) {
        (self.predecessor(), self.item())
    }
}

impl<'a, N> SequencedItem<'a, N> for &'a N {
    fn new_with_predecessor(_: &'a N, item: &'a N) -> Self {
        item
    }
    fn new_without_predecessor(item: &'a N) -> Self {
        item
    }
    fn item(&self) -> &'a N {
        *self
    }
    fn predecessor(&self) -> Option<&'a N> {
        None
    }
}

/// `(predecessor, node)` as yielded by traversals with parent tracking.
/// The start node of a traversal has no predecessor.
pub type PredecessorOfNode<'a, N> = (Option<&'a N>, &'a N);

impl<'a, N> SequencedItem<'a, N> for PredecessorOfNode<'a, N> {
    fn new_with_predecessor(predecessor: &'a N, item: &'a N) -> Self {
        (Some(predecessor), item)
    }
    fn new_without_predecessor(item: &'a N) -> Self {
        (None, item)
    }
    fn item(&self) -> &'a N {
        self.1
    }
    fn predecessor(&self) -> Option<&'a N> {
        self.0
    }
}

/// Frontier of a [`TraversalSearch`]. Its pop order determines the traversal order;
/// the [`VecDeque`] implementation is FIFO and thus yields a BFS.
pub trait NodeSequencer<T> {
    fn empty() -> Self;

    fn push(&mut self, item: T);

    fn pop(&mut self) -> Option<T>;

    /// Number of queued items
    fn cardinality(&self) -> usize;

    fn clear(&mut self);
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn empty() -> Self {
        VecDeque::new()
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

type NodeRef<'a, G> = &'a <G as GraphType>::Node;

/// Generic traversal iterator.
///
/// Maintains an explicit frontier of nodes to visit, a set of discovered nodes,
/// and optionally records predecessor information.
/// Parameterized by the container type for the frontier, the type of
/// items yielded (either `&Node` or [`PredecessorOfNode`]) and the visited-set.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem<'a, G::Node>,
    V: Set<NodeRef<'a, G>>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<NodeRef<'a, G>>,
    _item: PhantomData<I>,
}

/// A **breadth-first search** iterator with a custom visited-set `V`.
pub type BfsWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<NodeRef<'a, G>>, NodeRef<'a, G>, V>;

/// Breadth-first search yielding borrowed nodes
pub type Bfs<'a, G> = BfsWithSet<'a, G, FxHashSet<NodeRef<'a, G>>>;

/// Breadth-first search yielding `(predecessor, node)`; the predecessors form the BFS tree.
pub type BfsWithPredecessor<'a, G> = TraversalSearch<
    'a,
    G,
    VecDeque<PredecessorOfNode<'a, <G as GraphType>::Node>>,
    PredecessorOfNode<'a, <G as GraphType>::Node>,
    FxHashSet<NodeRef<'a, G>>,
>;

impl<'a, G, S, I, V> Iterator for TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem<'a, G::Node>,
    V: Set<NodeRef<'a, G>>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            trace!(
                dropped = self.sequencer.cardinality(),
                "traversal reached its stop node"
            );
            self.sequencer.clear();
        } else {
            for v in self.graph.neighbors_of(u) {
                if self.visited.insert(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = self.sequencer.cardinality();
        // reaching the stop node discards everything queued behind it
        let lower = if self.stop_at.is_some() {
            queued.min(1)
        } else {
            queued
        };
        (
            lower,
            Some(self.graph.len().saturating_sub(self.visited.len()) + queued),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem<'a, G::Node>,
    V: Set<NodeRef<'a, G>> + FromCapacity,
{
    /// Starts a traversal at `start`; empty if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: &G::Node) -> Self {
        let mut search = Self::new_unstarted(graph);
        if let Some(start) = graph.get_node(start) {
            search.restart_at(start);
        }
        search
    }

    /// Creates a traversal iterator without a start node. It yields nothing until
    /// [`TraversalSearch::restart_at`] is called.
    pub fn new_unstarted(graph: &'a G) -> Self {
        let len = graph.len();
        Self {
            graph,
            visited: V::from_total_used_capacity(len, len),
            sequencer: S::empty(),
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem<'a, G::Node>,
    V: Set<NodeRef<'a, G>>,
{
    /// Continues the search at `u` and returns *true* if `u` was not discovered before.
    /// Intended to be called once the iterator has been exhausted.
    pub fn restart_at(&mut self, u: &'a G::Node) -> bool {
        if !self.visited.insert(u) {
            return false;
        }
        self.sequencer.push(I::new_without_predecessor(u));
        true
    }

    /// Returns *true* if `u` has already been discovered (or was excluded).
    pub fn did_visit_node(&self, u: &G::Node) -> bool {
        self.graph
            .get_node(u)
            .is_some_and(|u| self.visited.contains(&u))
    }

    /// Ends the traversal right after `stopper` has been yielded.
    pub fn set_stop_at(&mut self, stopper: &G::Node) {
        self.stop_at = self.graph.get_node(stopper);
    }

    /// Builder variant of [`TraversalSearch::set_stop_at`]
    pub fn stop_at(mut self, stopper: &G::Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Marks `u` as discovered so the traversal never enters it and never passes through it.
    /// Unknown nodes are ignored.
    ///
    /// # Warning
    /// A node that is already queued will still be yielded; exclude nodes before iterating.
    pub fn exclude_node(&mut self, u: &G::Node) {
        if let Some(u) = self.graph.get_node(u) {
            self.visited.insert(u);
        }
    }

    /// [`TraversalSearch::exclude_node`] for every node of `us`
    pub fn exclude_nodes<'b, N>(&mut self, us: N)
    where
        G::Node: 'b,
        N: IntoIterator<Item = &'b G::Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_nodes`]; call it before iterating.
    pub fn with_nodes_excluded<'b, N>(mut self, us: N) -> Self
    where
        G::Node: 'b,
        N: IntoIterator<Item = &'b G::Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Returns *true* if a path with at least one edge leads from the start node to `u`.
    /// For `u` equal to the start node this detects a cycle through it.
    ///
    /// # Warning
    /// Must be called on a fresh traversal with a single start node.
    pub fn is_node_reachable(mut self, u: &G::Node) -> bool {
        debug_assert!(self.sequencer.cardinality() <= 1);
        let Some(u) = self.graph.get_node(u) else {
            return false;
        };

        self.visited.remove(&u);
        self.next();
        self.any(|v| v.item() == u)
    }
}

impl<'a, G, S, V> TraversalSearch<'a, G, S, PredecessorOfNode<'a, <G as GraphType>::Node>, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode<'a, <G as GraphType>::Node>>,
    V: Set<NodeRef<'a, G>>,
{
    /// Consumes the iterator and returns the parent of every visited node in the implied
    /// traversal tree. The start node has no entry.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges([(0, 1), (1, 2)]);
    ///
    /// let parents = g.bfs_with_predecessor(&0).parent_map();
    /// assert_eq!(parents.len(), 2);
    /// assert_eq!(parents[&2], &1);
    /// ```
    pub fn parent_map(self) -> FxHashMap<NodeRef<'a, G>, NodeRef<'a, G>> {
        self.filter_map(|(p, u)| Some((u, p?))).collect()
    }

    /// Consumes the iterator and returns the tree depth of every visited node, starting at 0.
    /// For BFS the depth equals the distance from the start node.
    pub fn depths(self) -> FxHashMap<NodeRef<'a, G>, NumNodes> {
        let mut depths: FxHashMap<NodeRef<'a, G>, NumNodes> = FxHashMap::default();
        for (p, u) in self {
            let depth = p.and_then(|p| depths.get(p)).map_or(0, |d| d + 1);
            depths.insert(u, depth);
        }
        depths
    }
}

/// Kahn's algorithm as an iterator: yields a node once all of its in-neighbors have been
/// yielded. On a cyclic graph the nodes on or behind a cycle are never yielded.
pub struct TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    graph: &'a G,
    in_degs: FxHashMap<NodeRef<'a, G>, NumNodes>,
    stack: Vec<NodeRef<'a, G>>,
}

impl<'a, G> Iterator for TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    type Item = &'a G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.out_neighbors_of(u) {
            if let Some(deg) = self.in_degs.get_mut(v) {
                *deg -= 1;
                if *deg == 0 {
                    self.stack.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Seeds the stack with all sources
    fn new(graph: &'a G) -> Self {
        let in_degs: FxHashMap<_, _> = graph
            .vertices()
            .map(|u| (u, graph.in_degree_of(u)))
            .collect();

        let stack = in_degs
            .iter()
            .filter_map(|(u, d)| (*d == 0).then_some(*u))
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

/// Provides convenient traversal methods (BFS, shortest paths, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Lazy breadth-first search over all nodes reachable from `start`, including `start`.
    /// Empty if `start` is not a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges([("a", "b")]);
    ///
    /// let order: Vec<_> = g.bfs(&"a").collect();
    /// assert_eq!(order, vec![&"a", &"b"]);
    /// ```
    fn bfs(&self, start: &Self::Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Like [`Traversal::bfs`], but every node comes with the node it was discovered from.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges([(0, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(&0);
    /// assert_eq!(it.next(), Some((None, &0)));
    /// assert_eq!(it.next(), Some((Some(&0), &1)));
    /// ```
    fn bfs_with_predecessor(&self, start: &Self::Node) -> BfsWithPredecessor<'_, Self> {
        BfsWithPredecessor::new(self, start)
    }

    /// Breadth-first exploration from `from`, returning all discovered nodes in discovery order.
    ///
    /// If a destination `to` is given, exploration terminates as soon as `to` is taken from
    /// the queue. Nodes discovered up to that moment are part of the result, so the
    /// returned list is a traversal order, not a path.
    /// Returns an empty list if `from` or the given `to` is not a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d")]);
    /// assert_eq!(g.bfs_order(&"a", None), vec!["a", "b", "c", "d"]);
    /// assert_eq!(g.bfs_order(&"a", Some(&"c")), vec!["a", "b", "c"]);
    /// assert!(g.bfs_order(&"a", Some(&"z")).is_empty());
    /// ```
    fn bfs_order(&self, from: &Self::Node, to: Option<&Self::Node>) -> Vec<Self::Node> {
        let Some(start) = self.get_node(from) else {
            return Vec::new();
        };
        if to.is_some_and(|to| !self.contains_node(to)) {
            return Vec::new();
        }

        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut order = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(u) = queue.pop_front() {
            if to == Some(u) {
                trace!(discovered = order.len(), "bfs reached its destination");
                break;
            }

            for v in self.neighbors_of(u) {
                if visited.insert(v) {
                    order.push(v);
                    queue.push_back(v);
                }
            }
        }

        order.into_iter().cloned().collect()
    }

    /// Computes a **shortest path** from `start` to `end` using BFS.
    ///
    /// - Returns `Some(path)` if a path exists, where `path` starts with `start` and ends
    ///   with `end`. If `start == end`, the path consists of this single node.
    /// - Returns `None` if no path exists or if either node is not part of the graph.
    ///
    /// Among several shortest paths, an arbitrary one is returned.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d")]);
    ///
    /// assert_eq!(g.shortest_path(&"a", &"d"), Some(vec!["a", "b", "c", "d"]));
    /// assert_eq!(g.shortest_path(&"a", &"x"), None);
    /// ```
    fn shortest_path(&self, start: &Self::Node, end: &Self::Node) -> Option<Vec<Self::Node>> {
        self.shortest_path_with::<FxHashSet<_>, FxHashMap<_, _>>(start, end)
    }

    /// Same as [`Traversal::shortest_path`] with custom containers for the visited-set `S` and
    /// the back-pointers `M`.
    ///
    /// # Examples
    /// ```
    /// use std::collections::{HashMap, HashSet};
    /// use lgraphs::prelude::*;
    ///
    /// let g = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 3), (3, 2)]);
    ///
    /// let path = g.shortest_path_with::<HashSet<_>, HashMap<_, _>>(&0, &2).unwrap();
    /// assert_eq!(path.len(), 3);
    /// assert!(g.shortest_path_with::<HashSet<_>, HashMap<_, _>>(&2, &0).is_none());
    /// ```
    fn shortest_path_with<'a, S, M>(
        &'a self,
        start: &Self::Node,
        end: &Self::Node,
    ) -> Option<Vec<Self::Node>>
    where
        S: Set<&'a Self::Node> + FromCapacity,
        M: Map<&'a Self::Node, &'a Self::Node> + FromCapacity,
    {
        let start = self.get_node(start)?;
        let end = self.get_node(end)?;

        if start == end {
            return Some(vec![start.clone()]);
        }

        let len = self.len();
        let mut visited = S::from_total_used_capacity(len, len);
        let mut parent = M::from_total_used_capacity(len, len);
        visited.insert(start);

        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors_of(u) {
                if !visited.insert(v) {
                    continue;
                }

                parent.insert(v, u);

                if v == end {
                    let mut path = vec![end.clone()];
                    let mut node = end;
                    while node != start {
                        node = *parent.get(&node)?;
                        path.push(node.clone());
                    }
                    path.reverse();

                    trace!(
                        length = path.len(),
                        discovered = visited.len(),
                        "reconstructed shortest path"
                    );
                    return Some(path);
                }

                queue.push_back(v);
            }
        }

        None
    }

    /// Returns the number of edges on a shortest path from `start` to `end`, or `None` if
    /// `end` is unreachable.
    fn distance(&self, start: &Self::Node, end: &Self::Node) -> Option<NumNodes> {
        self.shortest_path(start, end).map(|path| path.len() - 1)
    }

    /// Lazy topological order of a directed graph, see [`TopoSearch`].
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        TopoSearch::new(self)
    }

    /// Returns all nodes in a topological order, i.e. for every edge `(u, v)`, `u` is listed
    /// before `v`.
    ///
    /// # Errors
    /// Returns [`GraphError::CycleDetected`] if the graph contains a directed cycle
    /// (including self-loops).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut g = DirectedGraph::from_edges([(0, 1), (1, 2)]);
    /// assert_eq!(g.topological_order(), Ok(vec![0, 1, 2]));
    ///
    /// g.insert_edge(2, 0);
    /// assert_eq!(g.topological_order(), Err(GraphError::CycleDetected { remaining: 3 }));
    /// ```
    fn topological_order(&self) -> Result<Vec<Self::Node>>
    where
        Self: DirectedAdjacencyList,
    {
        let order = self.topo_search().cloned().collect_vec();
        if order.len() == self.len() {
            return Ok(order);
        }

        let remaining = self.len() - order.len();
        debug!(
            nodes = self.len(),
            remaining, "no topological order: graph contains a cycle"
        );
        Err(GraphError::CycleDetected { remaining })
    }

    /// Returns *true* if Kahn's algorithm orders every node, i.e. the graph has no directed
    /// cycle and no self-loop.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = DirectedGraph::from_edges([(0, 1), (1, 2)]);
    /// assert!(g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.topo_search().count() == self.len()
    }

    /// Returns *true* if a directed cycle passes through `u` (a self-loop counts).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 1)]);
    /// assert!(!g.is_node_on_cycle(&0));
    /// assert!(g.is_node_on_cycle(&1));
    /// ```
    fn is_node_on_cycle(&self, u: &Self::Node) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.bfs(u).is_node_reachable(u)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::RandomGraph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn sample_graph() -> DirectedGraph<u32> {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        DirectedGraph::from_edges([(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
    }

    #[test]
    fn bfs_order() {
        let graph = sample_graph();

        {
            let order = graph.bfs(&1).copied().collect_vec();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);
            assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
            assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
            assert_eq!(order[5], 3);
        }

        {
            let order = Bfs::new(&graph, &5).copied().collect_vec();
            assert_eq!(order, [5, 4, 3]);
        }

        assert_eq!(graph.bfs(&7).count(), 0);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = sample_graph();

        let edges = graph
            .bfs_with_predecessor(&1)
            .map(|(p, u)| (p.copied(), *u))
            .sorted()
            .collect_vec();

        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn bfs_depths() {
        let graph = sample_graph();
        let depths = graph.bfs_with_predecessor(&1).depths();

        assert_eq!(depths[&1], 0);
        assert_eq!(depths[&0], 1);
        assert_eq!(depths[&2], 1);
        assert_eq!(depths[&4], 2);
        assert_eq!(depths[&5], 2);
        assert_eq!(depths[&3], 3);
    }

    #[test]
    fn test_stopper() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(&0).copied().collect_vec(), vec![0, 1, 2, 3]);

        assert_eq!(graph.bfs(&0).stop_at(&1).copied().collect_vec(), vec![0, 1]);
    }

    #[test]
    fn excluded_nodes_block_paths() {
        let graph = sample_graph();

        let order = graph
            .bfs(&1)
            .with_nodes_excluded([&2, &42])
            .copied()
            .sorted()
            .collect_vec();
        assert_eq!(order, vec![0, 1, 3, 4, 5]);

        let order = graph
            .bfs(&1)
            .with_nodes_excluded([&0, &2])
            .copied()
            .collect_vec();
        assert_eq!(order, vec![1]);
    }

    #[test]
    fn bfs_order_stops_when_destination_is_dequeued() {
        let graph = Graph::from_edges([('a', 'b'), ('a', 'c'), ('b', 'd')]);

        let order = graph.bfs_order(&'a', Some(&'b'));
        assert_eq!(order[0], 'a');
        assert!(order.contains(&'b'));
        assert!(order.contains(&'c'));
        assert!(!order.contains(&'d'));

        assert!(graph.bfs_order(&'a', Some(&'z')).is_empty());
        assert!(graph.bfs_order(&'z', None).is_empty());
        assert!(graph.bfs_order(&'z', Some(&'a')).is_empty());
    }

    #[test]
    fn shortest_path_on_line() {
        let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d")]);

        assert_eq!(graph.bfs_order(&"a", None), vec!["a", "b", "c", "d"]);
        assert_eq!(
            graph.shortest_path(&"a", &"d"),
            Some(vec!["a", "b", "c", "d"])
        );
        assert_eq!(
            graph.shortest_path(&"d", &"a"),
            Some(vec!["d", "c", "b", "a"])
        );
        assert_eq!(graph.shortest_path(&"c", &"c"), Some(vec!["c"]));
        assert_eq!(graph.distance(&"a", &"c"), Some(2));
    }

    #[test]
    fn shortest_path_disconnected() {
        let mut graph = Graph::new();
        graph.insert_nodes(["a", "b"]);

        assert_eq!(graph.shortest_path(&"a", &"b"), None);
        assert_eq!(graph.shortest_path(&"a", &"x"), None);
        assert_eq!(graph.shortest_path(&"x", &"x"), None);
        assert_eq!(graph.distance(&"a", &"b"), None);
    }

    #[test]
    fn shortest_path_respects_direction() {
        let graph = sample_graph();

        let path = graph.shortest_path(&1, &3).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&3));

        assert_eq!(graph.shortest_path(&3, &1), None);
    }

    #[test]
    fn shortest_path_with_ordered_containers() {
        use std::collections::{BTreeMap, BTreeSet};

        let graph = sample_graph();
        let path = graph
            .shortest_path_with::<BTreeSet<_>, BTreeMap<_, _>>(&1, &3)
            .unwrap();
        assert_eq!(path, vec![1, 2, 4, 3]);
        assert!(graph
            .shortest_path_with::<BTreeSet<_>, BTreeMap<_, _>>(&3, &1)
            .is_none());
    }

    #[test]
    fn shortest_path_is_optimal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [10usize, 30, 60] {
            for _ in 0..10 {
                let graph = DirectedGraph::gnp(rng, n, 2.0 / n as f64).unwrap();

                for _ in 0..20 {
                    let s = rng.random_range(0..n);
                    let t = rng.random_range(0..n);

                    let depths = graph.bfs_with_predecessor(&s).depths();

                    match graph.shortest_path(&s, &t) {
                        Some(path) => {
                            assert_eq!(path[0], s);
                            assert_eq!(*path.last().unwrap(), t);
                            assert!(path.iter().tuple_windows().all(|(u, v)| graph.has_edge(u, v)));
                            assert_eq!(path.len() - 1, depths[&t]);
                        }
                        None => assert!(!depths.contains_key(&t)),
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_visits_reachable_nodes_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for _ in 0..20 {
            let graph = Graph::gnp(rng, 40, 0.05).unwrap();
            let order = graph.bfs(&0).collect_vec();

            assert_eq!(order.iter().unique().count(), order.len());
            for u in &order {
                assert!(graph.neighbors_of(u).all(|v| order.contains(&v)));
            }
        }
    }

    #[test]
    fn bfs_order_follows_depths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for _ in 0..20 {
            let graph = DirectedGraph::gnp(rng, 50, 0.04).unwrap();
            let s = rng.random_range(0..50);

            let order = graph.bfs_order(&s, None);
            assert_eq!(order[0], s);
            assert_eq!(order.iter().unique().count(), order.len());

            let depths = graph.bfs_with_predecessor(&s).depths();
            assert_eq!(order.len(), depths.len());
            assert!(order.iter().all(|u| depths.contains_key(u)));

            assert!(order
                .iter()
                .tuple_windows()
                .all(|(u, v)| depths[u] <= depths[v]));
        }
    }

    #[test]
    fn size_hint_with_stop_node() {
        // star 0 -> {1, 2, 3, 4}
        let graph = DirectedGraph::from_edges([(0, 1), (0, 2), (0, 3), (0, 4)]);

        let mut search = graph.bfs(&0).stop_at(&1);
        assert_eq!(search.next(), Some(&0));

        let (lower, upper) = search.size_hint();
        let rest = search.count();
        assert!(lower <= rest);
        assert!(upper.is_none_or(|upper| rest <= upper));

        let mut search = graph.bfs(&0);
        search.next();
        assert_eq!(search.size_hint().0, 4);
    }

    #[test]
    fn topological_order() {
        let mut graph =
            DirectedGraph::from_edges([(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]);

        {
            let order = graph.topological_order().unwrap();
            assert_eq!(order.len(), graph.number_of_nodes());

            let rank: FxHashMap<_, _> = order.iter().enumerate().map(|(i, u)| (*u, i)).collect();
            for e in graph.edges() {
                assert!(rank[e.source()] < rank[e.target()]);
            }
        }

        graph.insert_edge(6, 2); // introduce cycle
        assert_eq!(
            graph.topological_order(),
            Err(GraphError::CycleDetected { remaining: 6 })
        );
    }

    #[test]
    fn self_loop_prevents_topological_order() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 1)]);
        assert!(!graph.is_acyclic());
        assert!(graph.topological_order().is_err());
    }

    #[test]
    fn is_acyclic() {
        let mut graph =
            DirectedGraph::from_edges([(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]);
        assert!(graph.is_acyclic());
        graph.insert_edge(6, 2); // introduce cycle
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn node_on_cycle() {
        let mut graph =
            DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (3, 4), (4, 5)]);
        assert!(graph.is_node_on_cycle(&0));
        assert!(graph.is_node_on_cycle(&1));
        assert!(graph.is_node_on_cycle(&2));
        assert!(graph.is_node_on_cycle(&3));
        assert!(!graph.is_node_on_cycle(&4));
        assert!(!graph.is_node_on_cycle(&5));
        assert!(!graph.is_node_on_cycle(&6));

        graph.insert_edge(5, 2);
        let nodes = graph.vertices().copied().collect_vec();
        assert!(nodes.iter().all(|u| graph.is_node_on_cycle(u)));

        graph.insert_edge(7, 7);
        assert!(graph.is_node_on_cycle(&7));
    }
}
