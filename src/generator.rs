//! Random starting sequences
//!
//! The run controller only sees the [`SequenceSource`] trait; the default
//! [`RandomSequence`] draws keys uniformly from [`MIN_KEY`]`..=`[`MAX_KEY`].
//! Seeding it makes a whole session reproducible.

use crate::model::{Element, Key};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest generated key
pub const MIN_KEY: Key = 5;
/// Largest generated key
pub const MAX_KEY: Key = 100;

/// Produces fresh element sequences
pub trait SequenceSource {
    fn generate(&mut self, len: usize) -> Vec<Element>;
}

#[derive(Debug, Clone)]
pub struct RandomSequence {
    rng: StdRng,
}

impl RandomSequence {
    pub fn new() -> Self {
        RandomSequence {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomSequence {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceSource for RandomSequence {
    fn generate(&mut self, len: usize) -> Vec<Element> {
        (0..len)
            .map(|_| Element::new(self.rng.random_range(MIN_KEY..=MAX_KEY)))
            .collect()
    }
}
