// rewind-data/src/samplers/batch_sampler.rs

//! Grouping of a sampler's output into fixed-size batches.
//!
//! Grouping happens once, eagerly: the resulting batch list is handed to a
//! [`PreGeneratedBatchSampler`](super::PreGeneratedBatchSampler), which can
//! then shuffle the batch order independently of the item order.

use super::traits::Sampler;
use rewind_core::SamplerError;

/// Number of batches `len` items make with the given policy.
pub fn batch_count(len: usize, batch_size: usize, drop_incomplete: bool) -> usize {
    if batch_size == 0 {
        return 0;
    }
    if drop_incomplete {
        len / batch_size
    } else {
        len.div_ceil(batch_size)
    }
}

/// Runs one full pass of `sampler` and groups consecutive items into batches
/// of `batch_size`.
///
/// The sampler is soft-reset first, so the pass starts from its first item
/// and follows whatever order it currently holds. A final batch shorter than
/// `batch_size` is dropped if `drop_incomplete` is set and kept otherwise.
///
/// # Errors
///
/// Returns `SamplerError::ConfigurationError` if `batch_size` is zero, and
/// forwards any sampler error other than the end-of-pass signal.
pub fn group_batches<S>(
    sampler: &mut S,
    batch_size: usize,
    drop_incomplete: bool,
) -> Result<Vec<Vec<S::Item>>, SamplerError>
where
    S: Sampler + ?Sized,
{
    if batch_size == 0 {
        return Err(SamplerError::configuration("batch_size must be at least 1"));
    }

    sampler.soft_reset();
    let mut batches = Vec::with_capacity(batch_count(sampler.len(), batch_size, drop_incomplete));
    let mut current = Vec::with_capacity(batch_size);
    loop {
        match sampler.advance() {
            Ok(item) => {
                current.push(item);
                if current.len() == batch_size {
                    batches.push(std::mem::replace(&mut current, Vec::with_capacity(batch_size)));
                }
            }
            Err(SamplerError::Exhausted) => break,
            Err(e) => return Err(e),
        }
    }
    if !current.is_empty() && !drop_incomplete {
        batches.push(current);
    }
    Ok(batches)
}

#[cfg(test)]
#[path = "batch_sampler_test.rs"]
mod tests;
