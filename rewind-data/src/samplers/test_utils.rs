// rewind-data/src/samplers/test_utils.rs

use super::{Sampler, SequentialSampler};
use rewind_core::{SamplerError, SamplerState};

/// Sequential sampler that fails once, with a non-exhaustion error, when asked
/// for the item at `fail_at`.
#[derive(Debug)]
pub(crate) struct FlakySampler {
    inner: SequentialSampler,
    fail_at: Option<usize>,
}

impl FlakySampler {
    pub(crate) fn new(len: usize, fail_at: usize) -> Self {
        FlakySampler {
            inner: SequentialSampler::new(len),
            fail_at: Some(fail_at),
        }
    }
}

impl Sampler for FlakySampler {
    type Item = usize;

    fn advance(&mut self) -> Result<usize, SamplerError> {
        let next = (self.inner.cursor() + 1) as usize;
        if self.fail_at == Some(next) {
            self.fail_at = None;
            return Err(SamplerError::IndexOutOfBounds {
                index: next,
                len: self.inner.len(),
            });
        }
        self.inner.advance()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn cursor(&self) -> isize {
        self.inner.cursor()
    }

    fn reset(&mut self) {
        self.inner.reset()
    }

    fn soft_reset(&mut self) {
        self.inner.soft_reset()
    }

    fn checkpoint(&self) -> SamplerState {
        self.inner.checkpoint()
    }

    fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError> {
        self.inner.restore(state)
    }
}
