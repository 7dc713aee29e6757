/*!
# Graph Algorithms

This module provides the analysis algorithms built on top of the capability traits in
[`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversal, shortest paths, topological ordering and component decompositions.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

Algorithms only read the graph and return derived values; the graph is never mutated
during an analysis.
*/

mod components;
mod connectivity;
mod traversal;

use fxhash::{FxHashMap, FxHashSet};

use crate::{error::*, prelude::*, utils::*};

pub use components::*;
pub use connectivity::*;
pub use traversal::*;
