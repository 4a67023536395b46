use rewind_core::SamplerError;

/// Position within a pass of fixed length.
///
/// Holds `-1 <= position < len`; `-1` means nothing has been produced yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    position: isize,
    len: usize,
}

impl Cursor {
    pub(crate) const START: isize = -1;

    pub(crate) fn new(len: usize) -> Self {
        Cursor {
            position: Self::START,
            len,
        }
    }

    pub(crate) fn position(&self) -> isize {
        self.position
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.position + 1 >= self.len as isize
    }

    pub(crate) fn remaining(&self) -> usize {
        (self.len as isize - 1 - self.position).max(0) as usize
    }

    /// Moves one step forward and returns the new position.
    /// Leaves the cursor untouched once the pass is over.
    pub(crate) fn step(&mut self) -> Result<usize, SamplerError> {
        if self.is_exhausted() {
            return Err(SamplerError::Exhausted);
        }
        self.position += 1;
        Ok(self.position as usize)
    }

    pub(crate) fn rewind(&mut self) {
        self.position = Self::START;
    }

    /// Checks that `position` is a legal cursor for this pass length.
    pub(crate) fn validate(&self, position: isize) -> Result<isize, SamplerError> {
        if position < Self::START || position >= self.len as isize {
            return Err(SamplerError::invalid_checkpoint(format!(
                "cursor {} is out of range for a sampler of length {}",
                position, self.len
            )));
        }
        Ok(position)
    }

    /// Sets a position previously checked with [`Cursor::validate`].
    pub(crate) fn seek(&mut self, position: isize) {
        debug_assert!(position >= Self::START && position < self.len as isize);
        self.position = position;
    }
}
