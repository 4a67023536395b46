// rewind-data/src/config.rs

use crate::samplers::{group_batches, PreGeneratedBatchSampler, RandomSampler, Sampler, SequentialSampler};
use rewind_core::rng::{derive_seed, seeded_rng};
use rewind_core::SamplerError;
use serde::{Deserialize, Serialize};

/// Everything needed to assemble the usual index → batch sampler stack.
///
/// Missing keys take their [`Default`] value when deserialized, so a host
/// configuration file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of indices per batch.
    pub batch_size: usize,
    /// Visit the indices in a random order before grouping them.
    pub shuffle: bool,
    /// Serve the grouped batches in a random order.
    pub shuffle_batches: bool,
    /// Drop the last batch if it has fewer than `batch_size` indices.
    pub drop_incomplete: bool,
    /// Seed for every generator in the stack. Entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            batch_size: 32,
            shuffle: true,
            shuffle_batches: false,
            drop_incomplete: false,
            seed: None,
        }
    }
}

impl SamplerConfig {
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn shuffle_batches(mut self, shuffle_batches: bool) -> Self {
        self.shuffle_batches = shuffle_batches;
        self
    }

    pub fn drop_incomplete(mut self, drop_incomplete: bool) -> Self {
        self.drop_incomplete = drop_incomplete;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.batch_size == 0 {
            return Err(SamplerError::configuration("batch_size must be at least 1"));
        }
        Ok(())
    }

    /// Builds the per-item sampler over `0..len`: random if `shuffle` is set,
    /// sequential otherwise.
    pub fn build_index_sampler(&self, len: usize) -> Box<dyn Sampler<Item = usize>> {
        if self.shuffle {
            Box::new(RandomSampler::with_rng(len, seeded_rng(derive_seed(self.seed, 0))))
        } else {
            Box::new(SequentialSampler::new(len))
        }
    }

    /// Groups one pass of the index sampler into batches and wraps them in a
    /// [`PreGeneratedBatchSampler`].
    ///
    /// The index order and the batch order draw from separate generators, both
    /// derived from `seed`, so a seeded configuration always rebuilds the same
    /// batches in the same order.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::ConfigurationError` if the configuration does
    /// not [`validate`](Self::validate).
    pub fn build_batch_sampler(&self, len: usize) -> Result<PreGeneratedBatchSampler<usize>, SamplerError> {
        self.validate()?;
        let mut indices = self.build_index_sampler(len);
        let batches = group_batches(&mut indices, self.batch_size, self.drop_incomplete)?;
        Ok(PreGeneratedBatchSampler::with_rng(
            batches,
            self.shuffle_batches,
            seeded_rng(derive_seed(self.seed, 1)),
        ))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
