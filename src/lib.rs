/*!
`graphprops` is a small analysis engine answering structural questions about finite, simple,
undirected graphs:

- Is the graph **connected**? What are its components, articulation points and bridges?
- Does it admit an **Eulerian** path or cycle, and what does one look like?
- Is a **Hamiltonian** cycle guaranteed by Dirac's or Ore's theorem, and can a Hamiltonian
  path or cycle be found by bounded exhaustive search?
- Is it a **tree**, and which vertices are its leaves?

# Representation

Vertices are `u32` values in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; `Edge(u, v)` and `Edge(v, u)`
describe the same undirected edge. Self-loops and parallel edges are not part of the model: the
provided representations merge duplicates on insertion and reject loops.

See the [`repr`] module for the storage backends ([`AdjArrayUndir`](crate::repr::AdjArrayUndir),
[`AdjMatrixUndir`](crate::repr::AdjMatrixUndir)). Any other type implementing the traits in
[`ops`] can be analyzed as well; its invariants are checked before every analysis.

# Design

Analyzers are exposed as traits implemented on every graph, e.g. `graph.analyze_eulerian()`.
Each call is a pure function of the borrowed graph and returns a freshly built report from
[`report`]; nothing is cached or shared between calls, so independent analyses can run on
different threads without coordination. Configurable algorithms (such as the bounded
Hamiltonian search) are additionally available as structs using the *Builder* / *Setter* pattern.

Failures are limited to malformed input, reported as [`InvalidGraphError`]. A graph without an
Eulerian or Hamiltonian path is a normal outcome and is reported as such.

# Usage

```rust
use graphprops::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

let euler = graph.analyze_eulerian().unwrap();
assert!(euler.has_cycle);

let circuit = graph.find_eulerian_path().unwrap().unwrap();
assert_eq!(circuit, vec![0, 1, 2, 3, 0]);

assert!(!graph.analyze_tree().unwrap().is_tree);
```

In most use-cases, `use graphprops::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod concepts;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod report;
pub(crate) mod testing;

pub use edge::*;
pub use error::InvalidGraphError;
pub use node::*;

/// `graphprops::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits, all implemented representations and the report types.
pub mod prelude {
    pub use super::{edge::*, error::InvalidGraphError, node::*, ops::*, repr::*, report::*};
}
