//! rand-backed adapter for the random source port
//!
//! A single process-wide instance is shared by the generator and the outcome
//! resolver. The generator state sits behind a mutex so the adapter is safe
//! for concurrent use from request handlers.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::application::ports::outbound::RandomSourcePort;

/// Random source over a [`StdRng`]
pub struct StdRandomSource {
    rng: Mutex<StdRng>,
}

impl StdRandomSource {
    /// Entropy-seeded source for production use
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic source for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSourcePort for StdRandomSource {
    fn next_in(&self, low: i32, high: i32) -> i32 {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            // A panic while holding the lock cannot corrupt an RNG draw
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(low..high)
    }
}
