// rewind-data/src/samplers/random_sampler.rs

use super::cursor::Cursor;
use super::traits::Sampler;
use crate::datasets::Dataset;
use rand::rngs::StdRng;
use rewind_core::rng::{is_permutation, permutation, seeded_rng};
use rewind_core::{SamplerError, SamplerState};

/// Samples every index of `0..len` exactly once per pass, in a uniformly
/// random order.
///
/// The order is drawn when the sampler is created and on every
/// [`Sampler::reset`]; [`Sampler::soft_reset`] replays it unchanged. The
/// sampler owns its generator, so a seeded sampler is fully reproducible.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    cursor: Cursor,
    permutation: Vec<usize>,
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a `RandomSampler` over `0..len`, seeded from system entropy.
    pub fn new(len: usize) -> Self {
        Self::with_rng(len, seeded_rng(None))
    }

    /// Creates a `RandomSampler` whose orders are determined by `seed`.
    pub fn with_seed(len: usize, seed: u64) -> Self {
        Self::with_rng(len, seeded_rng(Some(seed)))
    }

    /// Creates a `RandomSampler` drawing its orders from `rng`.
    pub fn with_rng(len: usize, mut rng: StdRng) -> Self {
        let permutation = permutation(len, &mut rng);
        RandomSampler {
            cursor: Cursor::new(len),
            permutation,
            rng,
        }
    }

    /// Creates a `RandomSampler` covering every item of `dataset`.
    pub fn from_dataset<D: Dataset + ?Sized>(dataset: &D) -> Self {
        Self::new(dataset.len())
    }

    /// The order of the current pass.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }
}

impl Sampler for RandomSampler {
    type Item = usize;

    fn advance(&mut self) -> Result<usize, SamplerError> {
        let position = self.cursor.step()?;
        Ok(self.permutation[position])
    }

    fn len(&self) -> usize {
        self.cursor.len()
    }

    fn cursor(&self) -> isize {
        self.cursor.position()
    }

    fn reset(&mut self) {
        self.permutation = permutation(self.cursor.len(), &mut self.rng);
        self.cursor.rewind();
    }

    fn soft_reset(&mut self) {
        self.cursor.rewind();
    }

    fn checkpoint(&self) -> SamplerState {
        SamplerState::new(self.cursor.position()).with_permutation(self.permutation.clone())
    }

    fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError> {
        let saved = state.require_permutation()?;
        if saved.len() != self.len() {
            return Err(SamplerError::invalid_checkpoint(format!(
                "permutation has length {} but the sampler has length {}",
                saved.len(),
                self.len()
            )));
        }
        if !is_permutation(saved, self.len()) {
            return Err(SamplerError::invalid_checkpoint(
                "permutation does not contain every index exactly once",
            ));
        }
        let position = self.cursor.validate(state.cursor)?;

        self.permutation = saved.to_vec();
        self.cursor.seek(position);
        Ok(())
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
