/*!
# Graph Generators

Random graphs and common substructures, mostly used to build test instances.

- [`Gnp`]: builder for Erdős–Rényi `G(n,p)` edge streams over nodes `0..n`.
- [`RandomGraph`]: constructs whole graph instances from the `G(n,p)` model.
- [`GeneratorSubstructures`]: adds paths, cycles and cliques to an existing graph.

Generators are configured builder-style:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters (e.g., `.nodes(n).prob(p)?`).
3. Generate edges via `stream()`.
*/

use rand::Rng;

use crate::{error::*, prelude::*};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for building full graph instances over nodes `0..n` from random models.
///
/// Every node of `0..n` is part of the result, including isolated ones.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] if `p` does not lie within `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    /// use rand_pcg::Pcg64Mcg;
    ///
    /// let rng = &mut Pcg64Mcg::seed_from_u64(1);
    /// let g = DirectedGraph::gnp(rng, 20, 0.1).unwrap();
    ///
    /// assert_eq!(g.number_of_nodes(), 20);
    /// ```
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphNew + GraphEdgeEditing + GraphType<Node = NumNodes>,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Ok(from_gnp(rng, Gnp::new().nodes(n).prob(p)?, n))
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Ok(from_gnp(rng, Gnp::new().nodes(n).prob(p)?.loops(false), n))
    }
}

fn from_gnp<G, R>(rng: &mut R, generator: Gnp, n: NumNodes) -> G
where
    G: GraphNew + GraphEdgeEditing + GraphType<Node = NumNodes>,
    R: Rng,
{
    let mut graph = G::with_capacity(n, 0);
    graph.insert_nodes(0..n);
    graph.insert_edges(
        generator
            .stream(rng)
            .filter(|(u, v)| G::is_directed() || u <= v),
    );
    graph
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn gnp_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let g = Graph::gnp(rng, 10, 1.0).unwrap();
        assert_eq!(g.number_of_nodes(), 10);
        assert_eq!(g.number_of_edges(), 55);

        let g = DirectedGraph::gnp_no_loops(rng, 10, 1.0).unwrap();
        assert_eq!(g.number_of_edges(), 90);
        assert!(g.vertices().all(|u| !g.has_self_loop(u)));

        let g = DirectedDataGraph::<usize, String>::gnp(rng, 7, 0.0).unwrap();
        assert_eq!(g.number_of_nodes(), 7);
        assert!(g.is_singleton_graph());

        assert!(Graph::gnp(rng, 10, 2.0).is_err());
    }
}
