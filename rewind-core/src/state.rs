use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Snapshot of a sampler's position within its current pass.
///
/// Every sampler records its `cursor`; the optional fields carry whatever
/// randomness the sampler materialized for the pass:
///
/// * `permutation` - the item order of a `RandomSampler`.
/// * `batch_order` - the batch order of a shuffled `PreGeneratedBatchSampler`
///   (absent when batches are served in their stored order).
/// * `children` - the snapshots of a `MultiSampler`'s children, in order.
///
/// The struct serializes as a mapping with the keys `cursor`, `permutation`,
/// `batch_order` and `children`; absent fields are omitted. How the mapping
/// is persisted is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerState {
    /// Position of the last produced item, `-1` before the first one.
    pub cursor: isize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permutation: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_order: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SamplerState>>,
}

impl SamplerState {
    /// Creates a snapshot holding only a cursor.
    pub fn new(cursor: isize) -> Self {
        SamplerState {
            cursor,
            permutation: None,
            batch_order: None,
            children: None,
        }
    }

    pub fn with_permutation(mut self, permutation: Vec<usize>) -> Self {
        self.permutation = Some(permutation);
        self
    }

    pub fn with_batch_order(mut self, batch_order: Option<Vec<usize>>) -> Self {
        self.batch_order = batch_order;
        self
    }

    pub fn with_children(mut self, children: Vec<SamplerState>) -> Self {
        self.children = Some(children);
        self
    }

    /// Returns the permutation, or `InvalidCheckpoint` if the snapshot has none.
    pub fn require_permutation(&self) -> Result<&[usize], SamplerError> {
        self.permutation
            .as_deref()
            .ok_or_else(|| SamplerError::invalid_checkpoint("missing field `permutation`"))
    }

    /// Returns the child snapshots, or `InvalidCheckpoint` if the snapshot has none.
    pub fn require_children(&self) -> Result<&[SamplerState], SamplerError> {
        self.children
            .as_deref()
            .ok_or_else(|| SamplerError::invalid_checkpoint("missing field `children`"))
    }
}

impl Default for SamplerState {
    fn default() -> Self {
        SamplerState::new(-1)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
