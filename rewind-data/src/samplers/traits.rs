// rewind-data/src/samplers/traits.rs

use rewind_core::{SamplerError, SamplerState};
use std::fmt::Debug;

/// A resumable, pull-based source of sample indices (or batches of them).
///
/// A sampler walks a *pass* of [`Sampler::len`] items. Each call to
/// [`Sampler::advance`] produces the next item until the pass is over, after
/// which it keeps returning [`SamplerError::Exhausted`] without moving.
///
/// The position and any randomness materialized for the pass can be captured
/// with [`Sampler::checkpoint`] and handed back to [`Sampler::restore`], on
/// this instance or a freshly constructed one, to replay exactly the same
/// remaining items.
pub trait Sampler: Debug + Send + Sync {
    /// The type produced by one step: an index, a batch, a combined tuple...
    type Item;

    /// Produces the next item of the pass.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::Exhausted` once `len()` items have been produced.
    /// The cursor does not move on failure.
    fn advance(&mut self) -> Result<Self::Item, SamplerError>;

    /// Number of items produced per pass.
    fn len(&self) -> usize;

    /// Returns true if a pass produces no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the last produced item, `-1` at the start of a pass.
    fn cursor(&self) -> isize;

    /// Items left before the pass is exhausted.
    fn remaining(&self) -> usize {
        (self.len() as isize - 1 - self.cursor()).max(0) as usize
    }

    /// Starts a new pass with freshly generated randomness.
    /// The new pass is not guaranteed to repeat any earlier one.
    fn reset(&mut self);

    /// Starts a new pass that replays the current order exactly.
    fn soft_reset(&mut self);

    /// Captures everything needed to resume the current pass.
    fn checkpoint(&self) -> SamplerState;

    /// Resumes from a snapshot produced by [`Sampler::checkpoint`].
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidCheckpoint` if the snapshot is missing
    /// fields or contradicts this sampler's length. The sampler is left
    /// unchanged in that case.
    fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError>;

    /// Borrows the sampler as an iterator over the rest of the current pass.
    fn iter(&mut self) -> SamplerIter<'_, Self>
    where
        Self: Sized,
    {
        SamplerIter {
            sampler: self,
            error: None,
        }
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Result<Self::Item, SamplerError> {
        (**self).advance()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn cursor(&self) -> isize {
        (**self).cursor()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn soft_reset(&mut self) {
        (**self).soft_reset()
    }

    fn checkpoint(&self) -> SamplerState {
        (**self).checkpoint()
    }

    fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError> {
        (**self).restore(state)
    }
}

/// Iterator returned by [`Sampler::iter`].
///
/// Ends at the end of the pass. Any other error also ends it and is kept
/// aside, see [`SamplerIter::take_error`].
#[derive(Debug)]
pub struct SamplerIter<'a, S: Sampler> {
    sampler: &'a mut S,
    error: Option<SamplerError>,
}

impl<S: Sampler> SamplerIter<'_, S> {
    /// Returns the error that stopped the iteration early, if any.
    pub fn take_error(&mut self) -> Option<SamplerError> {
        self.error.take()
    }
}

impl<S: Sampler> Iterator for SamplerIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        match self.sampler.advance() {
            Ok(item) => Some(item),
            Err(SamplerError::Exhausted) => None,
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.error.is_some() {
            return (0, Some(0));
        }
        (0, Some(self.sampler.remaining()))
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
