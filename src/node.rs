/*!
# Node Representation

Nodes are opaque identifiers supplied by the caller. Anything that can be cloned,
compared for equality and hashed qualifies, e.g. `u32`, `&'static str`, `String`
or a user-defined key type.

Nodes are values, not owned objects: a graph stores its own copy of every node and
hands out references to it.
*/

use std::hash::Hash;

/// Bound satisfied by every type usable as a node identifier.
pub trait NodeId: Clone + Eq + Hash {}

impl<T> NodeId for T where T: Clone + Eq + Hash {}

/// Number of nodes in a graph
pub type NumNodes = usize;

/// Number of edges in a graph
pub type NumEdges = usize;
