use rand_distr::Geometric;

use crate::utils::GeometricSkips;

use super::*;

/// `G(n,p)` graphs generate every possible edge in a graph with nodes `0..n` with probability `p`
/// independent from each other.
///
/// The generator considers all `n * n` ordered pairs (including loops). Dropping the reverse
/// orientation for undirected graphs is up to the caller; see [`RandomGraph`].
///
/// # Examples
/// ```
/// use lgraphs::gens::Gnp;
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(3);
///
/// let edges: Vec<_> = Gnp::new().nodes(10).prob(0.5).unwrap().stream(rng).collect();
/// assert!(edges.iter().all(|&(u, v)| u < 10 && v < 10));
///
/// assert!(Gnp::new().prob(1.5).is_err());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    distr: Option<Geometric>,
    loops: bool,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            distr: None,
            loops: true,
        }
    }
}

impl Gnp {
    /// Creates a new `G(n,p)` generator without nodes and with `p = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates `p` directly.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] if `p` does not lie within `[0, 1]`.
    pub fn prob(mut self, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GraphError::InvalidProbability(p));
        }

        self.distr = if p > 0.0 {
            Some(Geometric::new(p).map_err(|_| GraphError::InvalidProbability(p))?)
        } else {
            None
        };
        Ok(self)
    }

    /// Updates `p` such that every node has `deg` outgoing edges in expectation, i.e. `p = deg/n`.
    /// Requires `n` to be set first.
    pub fn avg_deg(self, deg: f64) -> Result<Self> {
        let n = self.n as f64;
        self.prob(deg / n)
    }

    /// Whether self-loops may be generated (default: *true*)
    pub fn loops(mut self, allow: bool) -> Self {
        self.loops = allow;
        self
    }

    /// Creates a lazy iterator over random `G(n,p)` edges
    pub fn stream<R: Rng>(self, rng: &mut R) -> impl Iterator<Item = (NumNodes, NumNodes)> {
        let n = self.n as u64;
        let loops = self.loops;

        GeometricSkips::new(rng, self.distr, n.saturating_mul(n))
            .map(move |x| ((x / n) as NumNodes, (x % n) as NumNodes))
            .filter(move |(u, v)| loops || u != v)
    }
}
