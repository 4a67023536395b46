// examples/resumable_training_loop.rs
//!
//! Simulates a training run that is interrupted halfway through an epoch and
//! resumed from a checkpoint written to disk as JSON. The resumed run sees
//! exactly the batches the interrupted one had not reached yet.

use rewind_data::{DataLoader, SamplerConfig, SamplerError, SamplerState, VecDataset};
use std::fs;

fn build_loader(config: &SamplerConfig) -> Result<DataLoader<VecDataset<(f32, f32)>>, SamplerError> {
    // y = 2x + 1 on a small grid
    let data: Vec<(f32, f32)> = (0..50)
        .map(|i| {
            let x = i as f32 / 10.0;
            (x, 2.0 * x + 1.0)
        })
        .collect();
    DataLoader::from_config(VecDataset::new(data), config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SamplerConfig::default().batch_size(8).shuffle_batches(true).seed(42);
    let checkpoint_path = std::env::temp_dir().join("rewind_sampler_state.json");

    // --- First run: interrupted after 3 batches ---
    let mut loader = build_loader(&config)?;
    println!("Epoch has {} batches", loader.len());
    for step in 0..3 {
        let batch = loader.next_batch()?.ok_or("epoch ended early")?;
        let mean_x: f32 = batch.iter().map(|(x, _)| x).sum::<f32>() / batch.len() as f32;
        println!("run 1, step {}: {} samples, mean x = {:.2}", step, batch.len(), mean_x);
    }
    fs::write(&checkpoint_path, serde_json::to_string_pretty(&loader.checkpoint())?)?;
    println!("Checkpoint written to {}", checkpoint_path.display());
    drop(loader);

    // --- Second run: rebuilt from the same configuration, then restored ---
    let state: SamplerState = serde_json::from_str(&fs::read_to_string(&checkpoint_path)?)?;
    let mut loader = build_loader(&config)?;
    loader.restore(&state)?;
    let mut step = 3;
    while let Some(batch) = loader.next_batch()? {
        println!("run 2, step {}: {} samples, first = {:?}", step, batch.len(), batch[0]);
        step += 1;
    }

    // Next epoch: new batch order, same batches.
    loader.reset();
    println!("Next epoch starts with {:?}", loader.next_batch()?.map(|batch| batch[0]));

    fs::remove_file(&checkpoint_path)?;
    Ok(())
}
