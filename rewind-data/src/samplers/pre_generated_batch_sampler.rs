// rewind-data/src/samplers/pre_generated_batch_sampler.rs

use super::batch_sampler::group_batches;
use super::cursor::Cursor;
use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rewind_core::rng::{is_permutation, permutation, seeded_rng};
use rewind_core::{SamplerError, SamplerState};
use std::fmt::Debug;

/// Iterates over a pre-generated list of batches, optionally in a random
/// batch order.
///
/// The batches themselves never change once the sampler is built. When
/// shuffling, only the order in which they are served is drawn again on
/// [`Sampler::reset`], independently of how the items inside each batch were
/// ordered when the batches were grouped.
#[derive(Debug, Clone)]
pub struct PreGeneratedBatchSampler<T = usize> {
    batches: Vec<Vec<T>>,
    batch_order: Option<Vec<usize>>,
    cursor: Cursor,
    rng: StdRng,
}

impl<T> PreGeneratedBatchSampler<T>
where
    T: Clone + Debug + Send + Sync,
{
    /// Creates a sampler over `batches`, seeded from system entropy when
    /// `shuffle` is set.
    pub fn new(batches: Vec<Vec<T>>, shuffle: bool) -> Self {
        Self::with_rng(batches, shuffle, seeded_rng(None))
    }

    pub fn with_seed(batches: Vec<Vec<T>>, shuffle: bool, seed: u64) -> Self {
        Self::with_rng(batches, shuffle, seeded_rng(Some(seed)))
    }

    pub fn with_rng(batches: Vec<Vec<T>>, shuffle: bool, mut rng: StdRng) -> Self {
        let batch_order = shuffle.then(|| permutation(batches.len(), &mut rng));
        PreGeneratedBatchSampler {
            cursor: Cursor::new(batches.len()),
            batches,
            batch_order,
            rng,
        }
    }

    /// Drains one pass of `sampler` into batches of `batch_size` and serves
    /// them, in a shuffled order if `shuffle_batches` is set.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::ConfigurationError` if `batch_size` is zero.
    pub fn from_sampler<S>(
        mut sampler: S,
        batch_size: usize,
        shuffle_batches: bool,
        drop_incomplete: bool,
    ) -> Result<Self, SamplerError>
    where
        S: Sampler<Item = T>,
    {
        let batches = group_batches(&mut sampler, batch_size, drop_incomplete)?;
        Ok(Self::new(batches, shuffle_batches))
    }

    pub fn batches(&self) -> &[Vec<T>] {
        &self.batches
    }

    /// The order batches are served in, `None` when not shuffling.
    pub fn batch_order(&self) -> Option<&[usize]> {
        self.batch_order.as_deref()
    }

    pub fn is_shuffled(&self) -> bool {
        self.batch_order.as_ref().is_some_and(|order| !order.is_empty())
    }
}

/// Maps a cursor saved over `saved_len` batches onto `current_len` batches,
/// keeping roughly the same fraction of the pass.
fn rescale_cursor(saved_cursor: isize, saved_len: usize, current_len: usize) -> isize {
    if saved_len == 0 {
        return Cursor::START;
    }
    let scaled = (saved_cursor as f64 / saved_len as f64 * current_len as f64).floor() as isize;
    scaled.clamp(Cursor::START, current_len as isize - 1)
}

impl<T> Sampler for PreGeneratedBatchSampler<T>
where
    T: Clone + Debug + Send + Sync,
{
    type Item = Vec<T>;

    fn advance(&mut self) -> Result<Vec<T>, SamplerError> {
        let position = self.cursor.step()?;
        let index = match &self.batch_order {
            Some(order) => order[position],
            None => position,
        };
        Ok(self.batches[index].clone())
    }

    fn len(&self) -> usize {
        self.batches.len()
    }

    fn cursor(&self) -> isize {
        self.cursor.position()
    }

    fn reset(&mut self) {
        if self.batch_order.is_some() {
            self.batch_order = Some(permutation(self.batches.len(), &mut self.rng));
        }
        self.cursor.rewind();
    }

    fn soft_reset(&mut self) {
        self.cursor.rewind();
    }

    fn checkpoint(&self) -> SamplerState {
        SamplerState::new(self.cursor.position()).with_batch_order(self.batch_order.clone())
    }

    fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError> {
        match &state.batch_order {
            Some(saved) if saved.len() != self.batches.len() => {
                // The batches were regenerated with a different size since the
                // snapshot was taken: keep the current order, resume at the
                // same fraction of the pass.
                let position = rescale_cursor(state.cursor, saved.len(), self.batches.len());
                warn!(
                    "Saved batch order has {} batches but the sampler has {}; it will not be loaded (cursor {} converted to {})",
                    saved.len(),
                    self.batches.len(),
                    state.cursor,
                    position
                );
                self.cursor.seek(position);
            }
            saved => {
                if let Some(order) = saved {
                    if !is_permutation(order, self.batches.len()) {
                        return Err(SamplerError::invalid_checkpoint(
                            "batch order does not contain every batch exactly once",
                        ));
                    }
                }
                let position = self.cursor.validate(state.cursor)?;
                self.batch_order = saved.clone();
                self.cursor.seek(position);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "pre_generated_batch_sampler_test.rs"]
mod tests;
