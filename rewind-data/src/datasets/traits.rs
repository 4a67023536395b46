use rewind_core::SamplerError;

/// Represents a dataset that can be accessed by index.
///
/// Samplers only ever look at [`Dataset::len`]; the items themselves are
/// fetched by whoever consumes the sampled indices, typically a
/// [`DataLoader`](crate::DataLoader).
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, SamplerError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
