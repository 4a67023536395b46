// rewind-data/src/samplers/sequential_sampler.rs

use super::cursor::Cursor;
use super::traits::Sampler;
use crate::datasets::Dataset;
use rewind_core::{SamplerError, SamplerState};

/// Samples elements sequentially, always in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialSampler {
    cursor: Cursor,
}

impl SequentialSampler {
    /// Creates a `SequentialSampler` over `0..len`.
    pub fn new(len: usize) -> Self {
        SequentialSampler {
            cursor: Cursor::new(len),
        }
    }

    /// Creates a `SequentialSampler` covering every item of `dataset`.
    pub fn from_dataset<D: Dataset + ?Sized>(dataset: &D) -> Self {
        Self::new(dataset.len())
    }
}

impl Sampler for SequentialSampler {
    type Item = usize;

    fn advance(&mut self) -> Result<usize, SamplerError> {
        self.cursor.step()
    }

    fn len(&self) -> usize {
        self.cursor.len()
    }

    fn cursor(&self) -> isize {
        self.cursor.position()
    }

    fn reset(&mut self) {
        self.cursor.rewind();
    }

    fn soft_reset(&mut self) {
        self.cursor.rewind();
    }

    fn checkpoint(&self) -> SamplerState {
        SamplerState::new(self.cursor.position())
    }

    fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError> {
        let position = self.cursor.validate(state.cursor)?;
        self.cursor.seek(position);
        Ok(())
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
