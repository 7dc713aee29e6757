/*!
# Weighted Graphs

Graphs whose weight parameter `W` is a [`Weight`] attach exactly one weight to every edge.
Inserting an edge that already exists overwrites its weight (it never creates a parallel edge).
In undirected graphs `{u, v}` and `{v, u}` share one weight.
*/

use num::Num;

use super::*;

/// Numeric edge weight. Implemented for every copyable numeric type.
pub trait Weight: Num + Copy {}

impl<T> Weight for T where T: Num + Copy {}

impl<N, Dir, D, W> AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
    W: Weight,
{
    /// Inserts the edge `(u, v)` with weight `weight`, inserting missing endpoints.
    /// If the edge already exists, its weight is overwritten and the previous weight returned.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut g = WeightedGraph::new();
    /// assert_eq!(g.insert_weighted_edge("a", "b", 3), None);
    /// assert_eq!(g.insert_weighted_edge("b", "a", 5), Some(3));
    ///
    /// assert_eq!(g.number_of_edges(), 1);
    /// assert_eq!(g.weight(&"a", &"b"), Some(5));
    /// ```
    pub fn insert_weighted_edge(&mut self, u: N, v: N, weight: W) -> Option<W>
    where
        D: Default,
    {
        self.link(u, v, weight)
    }

    /// Inserts all weighted edges in the collection
    pub fn insert_weighted_edges<I>(&mut self, edges: I)
    where
        D: Default,
        I: IntoIterator<Item = (N, N, W)>,
    {
        for (u, v, w) in edges {
            self.insert_weighted_edge(u, v, w);
        }
    }

    /// Creates a graph from weighted edges; the node set consists of all endpoints
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        D: Default,
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::default();
        graph.insert_weighted_edges(edges);
        graph
    }

    /// Returns the weight of the edge `(u, v)`, or `None` if there is no such edge
    pub fn weight(&self, u: &N, v: &N) -> Option<W> {
        self.edges.get(&Self::pair(u.clone(), v.clone())).copied()
    }

    /// Returns the weight of `edge`, or `None` if it is not part of the graph
    pub fn weight_of(&self, edge: &Dir::Pair<N>) -> Option<W> {
        self.edges.get(edge).copied()
    }

    /// Replaces the weight `w` of the edge `(u, v)` by `f(w)` and returns the new weight.
    /// Returns `None` and leaves the graph untouched if the edge does not exist.
    pub fn update_edge<F>(&mut self, u: &N, v: &N, f: F) -> Option<W>
    where
        F: FnOnce(W) -> W,
    {
        let weight = self.edges.get_mut(&Self::pair(u.clone(), v.clone()))?;
        *weight = f(*weight);
        Some(*weight)
    }

    /// Removes the edge `(u, v)` and returns its weight if it existed
    pub fn remove_weighted_edge(&mut self, u: &N, v: &N) -> Option<W> {
        self.unlink(u, v)
    }

    /// Returns an iterator over all edges together with their weights
    pub fn weighted_edges(&self) -> impl Iterator<Item = (&Dir::Pair<N>, W)> {
        self.edges.iter().map(|(e, w)| (e, *w))
    }

    /// Returns an iterator over the neighbors of `u` together with the weights of the
    /// connecting edges
    pub fn weighted_neighbors_of<'a>(&'a self, u: &'a N) -> impl Iterator<Item = (&'a N, W)> {
        self.neighbors_of(u).filter_map(move |v| Some((v, self.weight(u, v)?)))
    }

    /// Returns the sum of all edge weights (zero for graphs without edges)
    pub fn total_weight(&self) -> W {
        self.edges.values().fold(W::zero(), |acc, &w| acc + w)
    }

    /// Returns an unweighted copy of the graph with the same nodes, payloads and edges
    pub fn unweighted(&self) -> AdjGraph<N, Dir, D, ()>
    where
        D: Clone,
    {
        AdjGraph {
            nbs: self.nbs.clone(),
            edges: self.edges.keys().map(|e| (e.clone(), ())).collect(),
            _dir: PhantomData,
        }
    }

    /// Drops all weights, keeping nodes, payloads and edges
    pub fn into_unweighted(self) -> AdjGraph<N, Dir, D, ()> {
        AdjGraph {
            nbs: self.nbs,
            edges: self.edges.into_keys().map(|e| (e, ())).collect(),
            _dir: PhantomData,
        }
    }
}
