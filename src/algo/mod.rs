/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in
this crate. All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest-path, and spanning-tree routines. Traversals are
provided as **iterators**, making it easy to consume results lazily; the other algorithms
return result structures that can be queried afterwards.
*/

mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::{prelude::*, utils::*};

pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
