use rand::{Rng, seq::SliceRandom};

use crate::Exercise;

/// Pick up to `count` exercises by shuffling a copy of the input. The input
/// is never mutated and the result holds at most `min(count, len)` entries.
///
/// The random source is passed in so callers that need reproducibility can
/// supply a seeded generator.
#[must_use]
pub fn sample<R: Rng + ?Sized>(exercises: &[Exercise], count: usize, rng: &mut R) -> Vec<Exercise> {
    let mut shuffled = exercises.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
