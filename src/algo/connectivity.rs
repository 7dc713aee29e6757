/*!
# Connectivity

Component decompositions of graphs:

- Strongly connected components of directed graphs via an iterative version of
  Tarjan's algorithm ([`StronglyConnectedComponents`]), either as a lazy iterator or
  collected into an [`SccMap`].
- The condensation of a directed graph ([`Connectivity::dagify`]) and SCC-based cycle
  detection ([`Connectivity::contains_cycle`]).
- Connected components of undirected graphs via repeated BFS ([`ConnectedComponents`]).
*/

use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Component decompositions, available on every graph as methods.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of an undirected graph.
    /// Isolated nodes form components of their own.
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: GraphType<Dir = Undirected>;

    /// Like [`Connectivity::connected_components`], but skips isolated nodes
    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self>
    where
        Self: GraphType<Dir = Undirected>;

    /// Returns an iterator over the strongly connected components of the graph.
    /// Components are emitted in reverse topological order of the condensation.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "b")]);
    /// let sccs: Vec<_> = g.strongly_connected_components().collect();
    ///
    /// assert_eq!(sccs.len(), 2);
    /// assert_eq!(sccs[0].len(), 2);
    /// assert_eq!(sccs[1], vec![&"a"]);
    /// ```
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList;

    /// Same as [`Connectivity::strongly_connected_components`], but a single node is only
    /// reported as a component if it carries a self-loop
    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList;

    /// Maps every node to its strongly connected component.
    /// An empty graph yields an empty map; a graph without edges maps every node to a singleton.
    fn scc_map(&self) -> SccMap<Self::Node>
    where
        Self: DirectedAdjacencyList;

    /// Collapses every strongly connected component into a single node.
    ///
    /// Each edge `(u, v)` whose endpoints lie in different components `cu`, `cv` becomes
    /// the edge `(cu, cv)`; edges inside a component are dropped. The result is acyclic.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "b")]);
    /// let dag = g.dagify();
    ///
    /// assert_eq!(dag.number_of_nodes(), 2);
    /// assert_eq!(dag.number_of_edges(), 1);
    /// assert!(dag.is_acyclic());
    /// ```
    fn dagify(&self) -> DirectedGraph<Component<Self::Node>>
    where
        Self: DirectedAdjacencyList;

    /// Returns *true* if the graph contains a directed cycle, i.e. if some strongly connected
    /// component has more than one member or some node has a self-loop.
    fn contains_cycle(&self) -> bool
    where
        Self: DirectedAdjacencyList;
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self, false)
    }

    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self>
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self, true)
    }

    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        StronglyConnectedComponents::new(self)
    }

    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        StronglyConnectedComponents::new(self).include_singletons(false)
    }

    fn scc_map(&self) -> SccMap<Self::Node>
    where
        Self: DirectedAdjacencyList,
    {
        let map = SccMap::from_components(self.strongly_connected_components());
        debug!(
            nodes = map.number_of_nodes(),
            components = map.number_of_components(),
            "computed strongly connected components"
        );
        map
    }

    fn dagify(&self) -> DirectedGraph<Component<Self::Node>>
    where
        Self: DirectedAdjacencyList,
    {
        let map = self.scc_map();

        let mut dag = DirectedGraph::with_capacity(map.number_of_components(), 0);
        dag.insert_nodes(map.components().iter().cloned());

        for u in self.vertices() {
            let Some(cu) = map.component_index_of(u) else {
                continue;
            };

            for v in self.out_neighbors_of(u) {
                let Some(cv) = map.component_index_of(v) else {
                    continue;
                };

                if cu != cv {
                    let components = map.components();
                    dag.insert_edge(components[cu].clone(), components[cv].clone());
                }
            }
        }

        debug!(
            components = dag.number_of_nodes(),
            edges = dag.number_of_edges(),
            "condensed graph"
        );
        dag
    }

    fn contains_cycle(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.strongly_connected_components_no_singletons()
            .next()
            .is_some()
    }
}

/// Iterator over the connected components of an undirected graph.
/// Each component is produced in BFS order starting from its first node in vertex order.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    bfs: Bfs<'a, G>,
    candidates: std::vec::IntoIter<&'a G::Node>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    /// If `skip_trivial` is set, isolated nodes are not reported as components.
    pub fn new(graph: &'a G, skip_trivial: bool) -> Self {
        let mut bfs = Bfs::new_unstarted(graph);
        if skip_trivial {
            bfs.exclude_nodes(graph.vertices().filter(|&u| graph.is_isolated(u)));
        }

        Self {
            bfs,
            candidates: graph.vertices().collect_vec().into_iter(),
        }
    }

    /// Excludes nodes from all components that have not been emitted yet.
    pub fn set_exclude_nodes<'b, I>(&mut self, exclude: I)
    where
        G::Node: 'b,
        I: IntoIterator<Item = &'b G::Node>,
    {
        self.bfs.exclude_nodes(exclude);
    }

    /// Builder variant of [`ConnectedComponents::set_exclude_nodes`]
    pub fn exclude_nodes<'b, I>(mut self, exclude: I) -> Self
    where
        G::Node: 'b,
        I: IntoIterator<Item = &'b G::Node>,
    {
        self.set_exclude_nodes(exclude);
        self
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<&'a G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            let bfs = &self.bfs;
            let start = self.candidates.find(|&u| !bfs.did_visit_node(u))?;
            self.bfs.restart_at(start);
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}

/// Tarjan's strongly connected components as a lazy iterator.
///
/// Every call to `next` resumes the depth-first search until the next component is complete.
/// Components arrive sink-first, i.e. in reverse topological order of the condensation; the
/// order of nodes within a component is unspecified.
///
/// On construction all nodes are mapped to dense indices and the out-neighborhoods are copied
/// into an index arena, so the search works on flat vectors and uses an explicit call stack
/// instead of recursion.
pub struct StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    nodes: Vec<&'a G::Node>,
    adjacency: Vec<Vec<usize>>,
    idx: usize,

    states: Vec<NodeState>,
    potentially_unvisited: usize,

    include_singletons: bool,

    path_stack: Vec<usize>,

    call_stack: Vec<StackFrame>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Snapshots the adjacency of `graph` into the index arena
    pub fn new(graph: &'a G) -> Self {
        let nodes = graph.vertices().collect_vec();
        let index: FxHashMap<&G::Node, usize> =
            nodes.iter().enumerate().map(|(i, &u)| (u, i)).collect();

        let adjacency = nodes
            .iter()
            .map(|&u| {
                graph
                    .out_neighbors_of(u)
                    .filter_map(|v| index.get(v).copied())
                    .collect_vec()
            })
            .collect_vec();

        Self {
            states: vec![NodeState::default(); nodes.len()],
            nodes,
            adjacency,
            idx: 0,
            potentially_unvisited: 0,

            include_singletons: true,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Nodes without a self-loop that lie on no cycle form trivial components of their own.
    /// With `include = false` such components are dropped instead of being emitted.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    /// Builder variant of [`StronglyConnectedComponents::set_include_singletons`]
    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Seeds the call stack with the next node not covered by an earlier search tree.
    /// The cursor only moves forward, so the scan over all nodes is linear in total.
    fn next_unvisited_node(&mut self) -> Option<usize> {
        while self.potentially_unvisited < self.nodes.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited;
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Simulated recursive call into `node`
    fn push_node(&mut self, node: usize, parent: Option<usize>) {
        self.call_stack.push(StackFrame {
            node,
            parent,
            initial_stack_len: 0,
            first_call: true,
            has_loop: false,
            next_neighbor: 0,
        });
    }

    fn search(&mut self) -> Option<Vec<&'a G::Node>> {
        /*
        Tarjan's algorithm is typically described recursively, which neither yields an iterator
        nor survives deep graphs. `self.call_stack` simulates the recursion instead: every frame
        stores the position within its neighborhood, so processing can be paused to emit a
        component and resumed on the next call.

        On first visit a node receives the next discovery index and an equal low-link. The
        low-link is lowered by on-stack neighbors (their index) and by returning children (their
        low-link). A node whose low-link equals its index is the root of its component, which
        then consists of all nodes above it on the path stack.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len();

                self.states[v].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            while let Some(&w) = self.adjacency[v].get(frame.next_neighbor) {
                frame.next_neighbor += 1;
                frame.has_loop |= w == v;

                let w_state = self.states[w];
                if !w_state.visited {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v].try_lower_link(w_state.index);
                }
            }

            let Some(frame) = self.call_stack.pop() else {
                break;
            };
            let state = self.states[v];

            if let Some(parent) = frame.parent {
                self.states[parent].try_lower_link(state.low_link);
            }

            if state.is_root() {
                if !self.include_singletons
                    && self.path_stack.last() == Some(&v)
                    && !frame.has_loop
                {
                    // singleton without a loop: skip the descriptor but undo the stack
                    self.states[v].on_stack = false;
                    self.path_stack.pop();
                } else {
                    let component = self
                        .path_stack
                        .drain(frame.initial_stack_len..)
                        .collect_vec();

                    for &w in &component {
                        self.states[w].on_stack = false;
                    }

                    debug_assert_eq!(component.first(), Some(&v));

                    return Some(component.into_iter().map(|w| self.nodes[w]).collect());
                }
            }
        }

        None
    }
}

impl<'a, G> Iterator for StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Vec<&'a G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: DirectedAdjacencyList {}

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: usize,
    parent: Option<usize>,
    initial_stack_len: usize,
    first_call: bool,
    has_loop: bool,
    next_neighbor: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    on_stack: bool,
    index: usize,
    low_link: usize,
}

impl NodeState {
    fn visit(&mut self, u: usize) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: usize) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Clones and sorts the nodes in each component increasingly and then the components
/// themselves lexicographically.
pub fn sort_components<N, C>(components: impl IntoIterator<Item = C>) -> Vec<Vec<N>>
where
    N: NodeId + Ord,
    C: IntoIterator<Item = N>,
{
    components
        .into_iter()
        .map(|comp| comp.into_iter().sorted_unstable().collect_vec())
        .sorted()
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::gens::{GeneratorSubstructures, RandomGraph};

    fn owned<'a, N: NodeId + Ord + 'a>(
        components: impl IntoIterator<Item = Vec<&'a N>>,
    ) -> Vec<Vec<N>> {
        sort_components(
            components
                .into_iter()
                .map(|c| c.into_iter().cloned().collect_vec()),
        )
    }

    #[test]
    fn connected_components() {
        let mut graph = Graph::from_edges([(1, 2), (2, 3), (4, 5)]);
        graph.insert_nodes([0, 6]);

        {
            let ccs = owned(graph.connected_components_no_singletons());
            assert_eq!(ccs, vec![vec![1, 2, 3], vec![4, 5]]);
        }

        {
            let ccs = owned(graph.connected_components());
            assert_eq!(
                ccs,
                vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]
            );
        }

        {
            let ccs = owned(graph.connected_components().exclude_nodes([&2]));
            assert_eq!(
                ccs,
                vec![vec![0], vec![1], vec![3], vec![4, 5], vec![6]]
            );
        }

        assert_eq!(Graph::<u32>::new().connected_components().count(), 0);
    }

    #[test]
    fn scc() {
        let graph = DirectedGraph::from_edges([
            (0, 1),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 6),
            (2, 3),
            (3, 2),
            (3, 7),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 5),
            (7, 3),
            (7, 6),
        ]);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 3);
        assert!(sccs.iter().all(|c| !c.is_empty()));

        // {5, 6} is a sink of the condensation and must be emitted first
        assert_eq!(owned([sccs[0].clone()]), vec![vec![5, 6]]);

        let sccs = owned(sccs);
        assert_eq!(sccs[0], [0, 1, 4]);
        assert_eq!(sccs[1], [2, 3, 7]);
        assert_eq!(sccs[2], [5, 6]);
    }

    #[test]
    fn scc_singletons() {
        // two 2-cycles, a self-loop on 2, and 3 without edges
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 0), (2, 2), (4, 5), (5, 4)]);
        graph.insert_node(3);

        {
            let sccs = owned(graph.strongly_connected_components());
            assert_eq!(sccs.len(), 4);
            assert_eq!(sccs[0], [0, 1]);
            assert_eq!(sccs[1], [2]);
            assert_eq!(sccs[2], [3]); // 3 is included
            assert_eq!(sccs[3], [4, 5]);
        }

        {
            let sccs = owned(graph.strongly_connected_components_no_singletons());
            assert_eq!(sccs.len(), 3);
            assert_eq!(sccs[0], [0, 1]);
            assert_eq!(sccs[1], [2]);
            assert_eq!(sccs[2], [4, 5]);
        }
    }

    #[test]
    fn scc_tree() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);

        // trees are acyclic: one component per node
        let sccs = owned(graph.strongly_connected_components());
        assert_eq!(sccs.len(), 7);
        for (i, scc) in sccs.iter().enumerate() {
            assert_eq!(scc, &[i as i32]);
        }
    }

    #[test]
    fn scc_gnp() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for i in 0..10 {
            let n = 2000;
            let graph = DirectedGraph::gnp(rng, n, 0.5 / (n as f64) * (i as f64)).unwrap();
            assert_eq!(
                StronglyConnectedComponents::new(&graph)
                    .map(|x| x.len())
                    .sum::<usize>(),
                n
            );
        }
    }

    #[test]
    fn scc_long_cycle() {
        // deep searches must not overflow the stack
        let n = 10_000u32;
        let mut graph = DirectedGraph::new();
        graph.connect_cycle(0..n);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), n as usize);
    }

    #[test]
    fn scc_is_mutual_reachability() {
        let rng = &mut Pcg64::seed_from_u64(7);

        for _ in 0..5 {
            let graph = DirectedGraph::gnp(rng, 40, 0.04).unwrap();
            let map = graph.scc_map();

            assert_eq!(map.number_of_nodes(), graph.number_of_nodes());
            for u in graph.vertices() {
                for v in graph.vertices() {
                    let mutual = graph.shortest_path(u, v).is_some()
                        && graph.shortest_path(v, u).is_some();
                    assert_eq!(map.same_component(u, v), mutual);
                }
            }
        }
    }

    #[test]
    fn scc_map_trivial_inputs() {
        let graph = DirectedGraph::<&str>::new();
        assert!(graph.scc_map().is_empty());

        let mut graph = DirectedGraph::new();
        graph.insert_nodes(["x", "y", "z"]);
        let map = graph.scc_map();
        assert_eq!(map.number_of_components(), 3);
        assert!(map.components().iter().all(Component::is_singleton));
    }

    #[test]
    fn dagify_cycle() {
        let graph = DirectedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
        let dag = graph.dagify();

        assert_eq!(dag.number_of_nodes(), 1);
        assert_eq!(dag.number_of_edges(), 0);

        let component = dag.vertices().next().unwrap();
        assert_eq!(component.len(), 3);
        assert!(["a", "b", "c"].iter().all(|u| component.contains(u)));
    }

    #[test]
    fn dagify_merges_parallel_edges() {
        let graph = DirectedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "b"), ("a", "c")]);
        let dag = graph.dagify();

        let a: Component<_> = ["a"].into_iter().collect();
        let bc: Component<_> = ["b", "c"].into_iter().collect();

        assert_eq!(dag.number_of_nodes(), 2);
        assert_eq!(dag.number_of_edges(), 1);
        assert!(dag.has_edge(&a, &bc));
        assert!(!dag.has_edge(&bc, &a));
    }

    #[test]
    fn dagify_is_acyclic() {
        let rng = &mut Pcg64::seed_from_u64(99);

        for i in 1..8 {
            let n = 300;
            let graph = DirectedGraph::gnp(rng, n, i as f64 / n as f64).unwrap();
            let dag = graph.dagify();
            let map = graph.scc_map();

            assert!(dag.is_acyclic());
            assert!(!dag.contains_cycle());
            assert_eq!(dag.number_of_nodes(), map.number_of_components());
            assert_eq!(
                dag.vertices().map(Component::len).sum::<usize>(),
                graph.number_of_nodes()
            );
        }
    }

    #[test]
    fn contains_cycle() {
        assert!(!DirectedGraph::<u8>::new().contains_cycle());
        assert!(!DirectedGraph::from_edges([(0, 1), (1, 2), (0, 2)]).contains_cycle());
        assert!(DirectedGraph::from_edges([(0, 1), (1, 2), (2, 2)]).contains_cycle());
        assert!(DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]).contains_cycle());

        let rng = &mut Pcg64::seed_from_u64(3);
        for _ in 0..10 {
            let graph = DirectedGraph::gnp(rng, 30, 0.05).unwrap();
            assert_eq!(graph.contains_cycle(), !graph.is_acyclic());
        }
    }
}
