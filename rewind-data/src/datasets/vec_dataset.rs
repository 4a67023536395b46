use super::traits::Dataset;
use rewind_core::SamplerError;

/// A simple dataset that wraps a `Vec` of items.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone + Send + 'static> From<Vec<T>> for VecDataset<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at `index`.
    fn get(&self, index: usize) -> Result<T, SamplerError> {
        self.data.get(index).cloned().ok_or(SamplerError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
