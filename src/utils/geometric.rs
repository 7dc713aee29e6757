use rand::Rng;
use rand_distr::Geometric;

/// Iterates over the indices of successful trials among `end` independent Bernoulli trials.
///
/// Instead of drawing every trial, the gap to the next success is drawn from a geometric
/// distribution, so the cost is proportional to the number of successes.
#[derive(Debug)]
pub struct GeometricSkips<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    distr: Option<Geometric>,
    next: u64,
    end: u64,
}

impl<'a, R> GeometricSkips<'a, R>
where
    R: Rng,
{
    /// Creates the iterator over trials `0..end`. `None` models a success probability of zero.
    pub fn new(rng: &'a mut R, distr: Option<Geometric>, end: u64) -> Self {
        Self {
            rng,
            distr,
            next: 0,
            end,
        }
    }
}

impl<R> Iterator for GeometricSkips<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let distr = self.distr?;

        // number of failures before the next success
        let skip = self.rng.sample(distr);
        let x = self.next.saturating_add(skip);
        if x >= self.end {
            self.next = self.end;
            return None;
        }

        self.next = x + 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.end - self.next).ok())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let all: Vec<u64> = GeometricSkips::new(rng, Geometric::new(1.0).ok(), 10).collect();
        assert_eq!(all, (0..10).collect::<Vec<_>>());

        assert_eq!(GeometricSkips::new(rng, None, 10).count(), 0);
        assert_eq!(GeometricSkips::new(rng, Geometric::new(1.0).ok(), 0).count(), 0);
    }

    #[test]
    fn increasing_and_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let distr = Geometric::new(0.1).ok();

        let xs: Vec<u64> = GeometricSkips::new(rng, distr, 100_000).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!(xs.iter().all(|&x| x < 100_000));

        // expected 10_000 successes
        assert!((9_000..11_000).contains(&xs.len()));
    }
}
