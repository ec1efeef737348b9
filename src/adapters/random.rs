use crate::domain::ports::Chooser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same slot, clamped to the last one when the pool is shorter.
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser {
    index: usize,
}

impl FixedChooser {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Chooser for FixedChooser {
    fn pick(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_chooser_is_repeatable_and_in_range() {
        let mut a = RngChooser::seeded(42);
        let mut b = RngChooser::seeded(42);
        for len in 1..40 {
            let pick = a.pick(len);
            assert!(pick < len);
            assert_eq!(pick, b.pick(len));
        }
    }

    #[test]
    fn test_fixed_chooser_clamps() {
        let mut chooser = FixedChooser::new(3);
        assert_eq!(chooser.pick(10), 3);
        assert_eq!(chooser.pick(2), 1);
        assert_eq!(chooser.pick(1), 0);
    }
}
