//! Node payloads.
//!
//! Every node carries a value of the payload type `D`. Nodes that come into existence
//! implicitly (as an endpoint of an inserted edge, or through
//! [`GraphNodeEditing::insert_node`]) receive `D::default()`.

use super::*;

impl<N, Dir, D, W> AdjGraph<N, Dir, D, W>
where
    N: NodeId,
    Dir: Direction,
{
    /// Inserts `u` carrying `data`. If `u` already exists, its payload is replaced and the
    /// previous payload returned; its edges are kept.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut g: DataGraph<&str, u32> = DataGraph::new();
    /// g.insert_edge("a", "b");
    ///
    /// assert_eq!(g.data_of(&"a"), Some(&0));
    /// assert_eq!(g.insert_node_with_data("a", 42), Some(0));
    /// assert_eq!(g.data_of(&"a"), Some(&42));
    /// assert!(g.has_edge(&"a", &"b"));
    /// ```
    pub fn insert_node_with_data(&mut self, u: N, data: D) -> Option<D> {
        match self.nbs.entry(u) {
            Entry::Occupied(mut entry) => Some(std::mem::replace(&mut entry.get_mut().data, data)),
            Entry::Vacant(entry) => {
                entry.insert(Neighborhood::new(data));
                None
            }
        }
    }

    /// Returns the payload of `u`, or `None` if `u` is not a node of the graph
    pub fn data_of(&self, u: &N) -> Option<&D> {
        self.nbs.get(u).map(|nb| &nb.data)
    }

    /// Returns a mutable reference to the payload of `u`
    pub fn data_of_mut(&mut self, u: &N) -> Option<&mut D> {
        self.nbs.get_mut(u).map(|nb| &mut nb.data)
    }

    /// Replaces the payload of an existing node and returns the previous one.
    /// Returns `None` and leaves the graph untouched if `u` is not a node of the graph.
    pub fn set_data(&mut self, u: &N, data: D) -> Option<D> {
        self.data_of_mut(u).map(|slot| std::mem::replace(slot, data))
    }

    /// Returns an iterator over all nodes together with their payloads
    pub fn nodes_with_data(&self) -> impl Iterator<Item = (&N, &D)> {
        self.nbs.iter().map(|(u, nb)| (u, &nb.data))
    }

    /// Returns a copy of the graph without payloads
    pub fn without_data(&self) -> AdjGraph<N, Dir, (), W>
    where
        W: Clone,
    {
        AdjGraph {
            nbs: self
                .nbs
                .iter()
                .map(|(u, nb)| (u.clone(), nb.clone_adjacency()))
                .collect(),
            edges: self.edges.clone(),
            _dir: PhantomData,
        }
    }

    /// Transforms every payload with `f`, keeping nodes and edges
    pub fn map_data<E, F>(self, mut f: F) -> AdjGraph<N, Dir, E, W>
    where
        F: FnMut(&N, D) -> E,
    {
        AdjGraph {
            nbs: self
                .nbs
                .into_iter()
                .map(|(u, nb)| {
                    let nb = nb.map_data(|data| f(&u, data));
                    (u, nb)
                })
                .collect(),
            edges: self.edges,
            _dir: PhantomData,
        }
    }
}
