// Phrase selection
//
// Composer randomness sits behind `PhrasePicker` so tests can pin choices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index in `0..len` (`len` is never zero)
pub trait PhrasePicker: Send {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random selection
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl PhrasePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always the same index, clamped to the list
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Replays a sequence of indices, cycling when exhausted
pub struct ScriptedPicker {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedPicker {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl PhrasePicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let index = self.picks[self.next % self.picks.len()];
        self.next += 1;
        index % len
    }
}
