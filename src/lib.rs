/*!
`lgraphs` is a graph data structure & algorithms library for **l**abelled graphs:
nodes are arbitrary caller-supplied identifiers instead of dense integer ranges.

# Representation

A **node** is any value that is `Clone + Eq + Hash` (see [`node::NodeId`]), e.g. `u32`,
`&'static str`, `String` or a user-defined key. The graph stores its own copy of every node.

**Edges** are endpoint pairs:

- In a **directed** graph, an edge is an [`OrderedPair`](crate::edge::OrderedPair) `(u, v)`;
  `(u, v)` and `(v, u)` are distinct.
- In an **undirected** graph, an edge is an [`UnorderedPair`](crate::edge::UnorderedPair) `{u, v}`;
  `{u, v}` and `{v, u}` are equal and hash identically.

### Available Representations

All graphs are backed by the hash-based adjacency structure [`AdjGraph`](crate::repr::AdjGraph),
parameterized over direction, node payload and edge weight. The [`repr`] module lists the
eight aliases, from [`Graph`](crate::repr::Graph) to
[`WeightedDirectedDataGraph`](crate::repr::WeightedDirectedDataGraph).

# Design

Graph functionality is split into small capability traits in [`ops`]; algorithms and generators
are written against these traits only. Algorithms are provided as configurable iterators that
can be altered using the *Builder* / *Setter* pattern, and as trait methods on the graph
itself for the common cases.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, all graph
  representations and all algorithm traits,
- [`algo`] includes breadth-first search, shortest unweighted paths, topological ordering,
  strongly connected components of directed graphs, connected components of undirected
  graphs and condensation,
- [`gens`] includes random `G(n,p)` graphs and deterministic substructures such as
  paths/cycles/cliques,
- [`utils`] includes container abstractions and hashing helpers.

In most use-cases, `use lgraphs::prelude::*;` suffices for your needs.

```rust
use lgraphs::prelude::*;

let mut g = DirectedGraph::new();
g.insert_edges([("a", "b"), ("b", "c"), ("c", "b"), ("c", "d")]);

assert_eq!(g.shortest_path(&"a", &"d"), Some(vec!["a", "b", "c", "d"]));
assert!(g.contains_cycle());

let dag = g.dagify();
assert_eq!(dag.number_of_nodes(), 3);
assert!(!dag.contains_cycle());
```

# Logging

Analyses emit [`tracing`] events (component counts, condensation sizes, failed topological
sorts). No subscriber is installed by this crate.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `lgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// all representations as well as the algorithm traits.
pub mod prelude {
    pub use super::{algo::*, edge::*, error::GraphError, node::*, ops::*, repr::*};
}
