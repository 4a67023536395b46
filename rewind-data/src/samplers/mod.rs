mod cursor;

pub mod batch_sampler;
pub mod multi_sampler;
pub mod pre_generated_batch_sampler;
pub mod random_sampler;
pub mod sequential_sampler;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_utils;

pub use batch_sampler::{batch_count, group_batches};
pub use multi_sampler::{Combine, MultiSampler, ScalarChildren, StructuredChildren};
pub use pre_generated_batch_sampler::PreGeneratedBatchSampler;
pub use random_sampler::RandomSampler;
pub use sequential_sampler::SequentialSampler;
pub use traits::{Sampler, SamplerIter};
