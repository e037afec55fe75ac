/*!
# Graph Generators

Helpers to build example and test graphs:

- [`GeneratorSubstructures`] adds paths, cycles, cliques and stars to an existing graph.
- [`Gnp`] is a builder for Erdős–Rényi `G(n,p)` edge lists; [`RandomGraph::gnp`] turns them
  into a graph directly.

```rust
use graphprops::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph = AdjArrayUndir::gnp(rng, 10, 1.0);
assert_eq!(graph.number_of_edges(), 45);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random normalized edges without self-loops.
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Edge>;
}

/// Creation of whole random graph instances
pub trait RandomGraph: Sized {
    /// Creates a `G(n,p)` graph: every possible edge `{u, v}` with `u != v` is present with
    /// probability `p`, independently of each other.
    /// ** Panics if `p` is not a probability **
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).generate(rng))
    }
}
