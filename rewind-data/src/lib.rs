//! Stateful, resumable samplers.
//!
//! A [`Sampler`](samplers::Sampler) hands out one item at a time (an index, a
//! batch of indices, or a combination of several samplers' items) and can
//! snapshot its position into a [`SamplerState`] at any point. Restoring that
//! snapshot into a freshly built sampler resumes the pass exactly where it
//! stopped, so a long training run can be interrupted and picked up again
//! without visiting any sample twice.

pub mod config;
pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use config::SamplerConfig;
pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use rewind_core::{SamplerError, SamplerState};
pub use samplers::{
    MultiSampler, PreGeneratedBatchSampler, RandomSampler, Sampler, SequentialSampler,
};
