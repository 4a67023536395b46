// rewind-data/src/samplers/multi_sampler.rs

use super::traits::Sampler;
use rewind_core::{SamplerError, SamplerState};
use std::fmt::Debug;

/// How a [`MultiSampler`] merges the items its children produced in one step.
pub trait Combine<I>: Debug + Send + Sync {
    type Output;

    /// Merges one item per child, in child order.
    fn combine(&self, items: Vec<I>) -> Self::Output;
}

/// Children yield scalars: one step produces one item per child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarChildren;

impl<I> Combine<I> for ScalarChildren {
    type Output = Vec<I>;

    fn combine(&self, items: Vec<I>) -> Vec<I> {
        items
    }
}

/// Children yield sequences (typically batches): one step produces the
/// sequences zipped element-wise, row `k` holding the `k`-th element of every
/// child. Shorter sequences are padded with `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredChildren;

impl<T> Combine<Vec<T>> for StructuredChildren {
    type Output = Vec<Vec<Option<T>>>;

    fn combine(&self, items: Vec<Vec<T>>) -> Self::Output {
        let rows = items.iter().map(Vec::len).max().unwrap_or(0);
        let mut columns: Vec<_> = items.into_iter().map(Vec::into_iter).collect();
        (0..rows)
            .map(|_| columns.iter_mut().map(Iterator::next).collect())
            .collect()
    }
}

/// Drives several samplers in lockstep.
///
/// The pass lasts as long as the longest child, the *pace-setter*. A shorter
/// child that runs out mid-pass is soft-reset and wraps around, replaying the
/// order it already holds; only the pace-setter running out ends the pass.
///
/// The sampler's own cursor only counts combined items. It follows the
/// pace-setter on [`Sampler::restore`], so a child that rescales its position
/// (a regrouped [`PreGeneratedBatchSampler`](super::PreGeneratedBatchSampler))
/// carries the combined pass along with it.
///
/// ```
/// use rewind_data::samplers::{MultiSampler, RandomSampler, Sampler, SequentialSampler};
///
/// let children: Vec<Box<dyn Sampler<Item = usize>>> = vec![
///     Box::new(RandomSampler::new(5)),
///     Box::new(SequentialSampler::new(2)),
/// ];
/// let mut pairs = MultiSampler::scalar(children).unwrap();
/// assert_eq!(pairs.len(), 5);
/// let targets: Vec<usize> = pairs.iter().map(|pair| pair[1]).collect();
/// assert_eq!(targets, vec![0, 1, 0, 1, 0]);
/// ```
#[derive(Debug)]
pub struct MultiSampler<I, C = ScalarChildren> {
    children: Vec<Box<dyn Sampler<Item = I>>>,
    pace_setter: usize,
    position: isize,
    combine: C,
}

impl<I, C> MultiSampler<I, C>
where
    I: 'static,
    C: Combine<I>,
{
    /// Combines `children`, merging each step's items with `combine`.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::ConfigurationError` if there are no children, or
    /// if an empty child would have to wrap around inside a non-empty pass.
    pub fn new(children: Vec<Box<dyn Sampler<Item = I>>>, combine: C) -> Result<Self, SamplerError> {
        if children.is_empty() {
            return Err(SamplerError::configuration("MultiSampler needs at least one child"));
        }
        let mut pace_setter = 0;
        for (i, child) in children.iter().enumerate() {
            if child.len() > children[pace_setter].len() {
                pace_setter = i;
            }
        }
        let len = children[pace_setter].len();
        if len > 0 {
            if let Some(i) = children.iter().position(|child| child.is_empty()) {
                return Err(SamplerError::configuration(format!(
                    "child {} is empty and cannot be paired with a pass of length {}",
                    i, len
                )));
            }
        }
        Ok(MultiSampler {
            children,
            pace_setter,
            position: -1,
            combine,
        })
    }

    /// Index of the child whose exhaustion ends the pass.
    pub fn pace_setter(&self) -> usize {
        self.pace_setter
    }

    pub fn children(&self) -> &[Box<dyn Sampler<Item = I>>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Sampler<Item = I>>] {
        &mut self.children
    }
}

impl<I: 'static> MultiSampler<I, ScalarChildren> {
    pub fn scalar(children: Vec<Box<dyn Sampler<Item = I>>>) -> Result<Self, SamplerError> {
        Self::new(children, ScalarChildren)
    }
}

impl<T: 'static> MultiSampler<Vec<T>, StructuredChildren> {
    pub fn structured(children: Vec<Box<dyn Sampler<Item = Vec<T>>>>) -> Result<Self, SamplerError> {
        Self::new(children, StructuredChildren)
    }
}

impl<I, C> Sampler for MultiSampler<I, C>
where
    I: Debug + 'static,
    C: Combine<I>,
{
    type Item = C::Output;

    fn advance(&mut self) -> Result<C::Output, SamplerError> {
        // The pace-setter goes first so an ended pass leaves every child as is.
        let lead = self.children[self.pace_setter].advance()?;

        let mut items = Vec::with_capacity(self.children.len());
        for (i, child) in self.children.iter_mut().enumerate() {
            if i == self.pace_setter {
                continue;
            }
            // Any other failure leaves the children advanced so far one step
            // ahead of the combined cursor; restore a checkpoint to recover.
            let item = match child.advance() {
                Err(SamplerError::Exhausted) => {
                    child.soft_reset();
                    child.advance()?
                }
                other => other?,
            };
            items.push(item);
        }
        items.insert(self.pace_setter, lead);

        self.position += 1;
        Ok(self.combine.combine(items))
    }

    fn len(&self) -> usize {
        self.children[self.pace_setter].len()
    }

    fn cursor(&self) -> isize {
        self.position
    }

    fn reset(&mut self) {
        self.position = -1;
        for child in &mut self.children {
            child.reset();
        }
    }

    fn soft_reset(&mut self) {
        self.position = -1;
        for child in &mut self.children {
            child.soft_reset();
        }
    }

    fn checkpoint(&self) -> SamplerState {
        SamplerState::new(self.position)
            .with_children(self.children.iter().map(|child| child.checkpoint()).collect())
    }

    fn restore(&mut self, state: &SamplerState) -> Result<(), SamplerError> {
        let saved = state.require_children()?;
        if saved.len() != self.children.len() {
            return Err(SamplerError::invalid_checkpoint(format!(
                "checkpoint has {} children but the sampler has {}",
                saved.len(),
                self.children.len()
            )));
        }

        let previous: Vec<SamplerState> = self.children.iter().map(|child| child.checkpoint()).collect();
        for i in 0..self.children.len() {
            if let Err(err) = self.children[i].restore(&saved[i]) {
                // Roll back the children restored so far. A sampler always
                // accepts its own checkpoint.
                for (child, prev) in self.children.iter_mut().zip(&previous).take(i) {
                    let rolled_back = child.restore(prev);
                    debug_assert!(rolled_back.is_ok(), "sampler rejected its own checkpoint");
                }
                return Err(err);
            }
        }
        // The saved combined cursor is not trusted: the pace-setter may have
        // rescaled its own position.
        self.position = self.children[self.pace_setter].cursor();
        Ok(())
    }
}

#[cfg(test)]
#[path = "multi_sampler_test.rs"]
mod tests;
