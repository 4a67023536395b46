//! # DataLoader
//!
//! Couples a [`Dataset`] with a batch sampler and fetches whole batches of
//! items. The loader keeps no position of its own: everything that moves is in
//! the sampler, so checkpointing the loader is checkpointing its sampler.
//!
//! ```rust
//! use rewind_data::{DataLoader, SamplerConfig, VecDataset};
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let config = SamplerConfig::default().batch_size(2).shuffle(false);
//! let mut loader = DataLoader::from_config(dataset, &config).unwrap();
//!
//! assert_eq!(loader.next_batch().unwrap(), Some(vec![1, 2]));
//! let state = loader.checkpoint();
//! assert_eq!(loader.next_batch().unwrap(), Some(vec![3, 4]));
//!
//! loader.restore(&state).unwrap();
//! assert_eq!(loader.next_batch().unwrap(), Some(vec![3, 4]));
//! ```

use crate::config::SamplerConfig;
use crate::datasets::Dataset;
use crate::samplers::{PreGeneratedBatchSampler, Sampler};
use rewind_core::{SamplerError, SamplerState};

/// Batches items of a [`Dataset`] in the order given by a batch sampler.
///
/// # Type Parameters
/// - `D`: the dataset the items come from.
/// - `S`: any sampler yielding batches of indices, usually a
///   [`PreGeneratedBatchSampler`].
#[derive(Debug)]
pub struct DataLoader<D, S = PreGeneratedBatchSampler<usize>>
where
    D: Dataset,
    S: Sampler<Item = Vec<usize>>,
{
    dataset: D,
    sampler: S,
}

impl<D, S> DataLoader<D, S>
where
    D: Dataset,
    S: Sampler<Item = Vec<usize>>,
{
    pub fn new(dataset: D, sampler: S) -> Self {
        Self { dataset, sampler }
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    pub fn into_parts(self) -> (D, S) {
        (self.dataset, self.sampler)
    }

    /// Fetches the items of the next batch.
    ///
    /// # Returns
    /// - `Ok(Some(batch))`: the items of the next batch, in batch order.
    /// - `Ok(None)`: the pass is over.
    /// - `Err(e)`: the sampler or the dataset failed.
    pub fn next_batch(&mut self) -> Result<Option<Vec<D::Item>>, SamplerError> {
        let indices = match self.sampler.advance() {
            Ok(indices) => indices,
            Err(SamplerError::Exhausted) => return Ok(None),
            Err(e) => return Err(e),
        };
        let batch = indices
            .into_iter()
            .map(|index| self.dataset.get(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(batch))
    }

    /// Number of batches in one pass.
    pub fn len(&self) -> usize {
        self.sampler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sampler.is_empty()
    }

    /// Starts a new pass with fresh randomness.
    pub fn reset(&mut self) {
        self.sampler.reset();
    }

    /// Replays the current pass from the start.
    pub fn soft_reset(&mut self) {
        self.sampler.soft_reset();
    }

    pub fn checkpoint(&self) -> SamplerState {
        self.sampler.checkpoint()
    }

    pub fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError> {
        self.sampler.restore(state)
    }
}

impl<D: Dataset> DataLoader<D, PreGeneratedBatchSampler<usize>> {
    /// Builds the batch sampler described by `config` over the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::ConfigurationError` if `config` is invalid.
    pub fn from_config(dataset: D, config: &SamplerConfig) -> Result<Self, SamplerError> {
        let sampler = config.build_batch_sampler(dataset.len())?;
        Ok(Self::new(dataset, sampler))
    }
}

impl<D, S> Iterator for DataLoader<D, S>
where
    D: Dataset,
    S: Sampler<Item = Vec<usize>>,
{
    type Item = Result<Vec<D::Item>, SamplerError>;

    /// Yields batches until the end of the pass. The loader is not reset
    /// afterwards; call [`DataLoader::reset`] to iterate another pass.
    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch().transpose()
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
