// rewind-data/src/dataloader_test.rs

use super::*;
use crate::datasets::VecDataset;

fn sequential_loader(data: Vec<i32>, batch_size: usize, drop_incomplete: bool) -> DataLoader<VecDataset<i32>> {
    let config = SamplerConfig::default()
        .batch_size(batch_size)
        .shuffle(false)
        .drop_incomplete(drop_incomplete);
    DataLoader::from_config(VecDataset::new(data), &config).unwrap()
}

#[test]
fn test_dataloader_sequential() {
    let loader = sequential_loader(vec![1, 2, 3, 4, 5, 6], 2, false);
    assert_eq!(loader.len(), 3);
    let batches: Vec<Vec<i32>> = loader.map(|batch| batch.expect("Batch should not error")).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
}

#[test]
fn test_dataloader_drop_incomplete() {
    let loader = sequential_loader(vec![1, 2, 3, 4, 5], 2, true);
    let batches: Vec<Vec<i32>> = loader.map(|batch| batch.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_dataloader_keeps_incomplete() {
    let mut loader = sequential_loader(vec![1, 2, 3, 4, 5], 2, false);
    let batches: Vec<Vec<i32>> = loader.by_ref().map(|batch| batch.unwrap()).collect();
    assert_eq!(batches.last(), Some(&vec![5]));
    assert_eq!(loader.next_batch(), Ok(None));
}

#[test]
fn test_dataloader_soft_reset_replays_pass() {
    let config = SamplerConfig::default().batch_size(3).shuffle_batches(true);
    let mut loader = DataLoader::from_config(VecDataset::new((0..30).collect::<Vec<i32>>()), &config).unwrap();
    let first: Vec<Vec<i32>> = loader.by_ref().map(|batch| batch.unwrap()).collect();
    loader.soft_reset();
    let second: Vec<Vec<i32>> = loader.by_ref().map(|batch| batch.unwrap()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
}

#[test]
fn test_dataloader_resumes_from_checkpoint() {
    let config = SamplerConfig::default().batch_size(4).shuffle_batches(true);
    let mut loader = DataLoader::from_config(VecDataset::new((0..40).collect::<Vec<i32>>()), &config).unwrap();
    for _ in 0..3 {
        loader.next_batch().unwrap();
    }
    let state = loader.checkpoint();
    let expected: Vec<Vec<i32>> = loader.by_ref().map(|batch| batch.unwrap()).collect();
    assert_eq!(expected.len(), 7);

    let (dataset, sampler) = loader.into_parts();
    let mut resumed = DataLoader::new(dataset, sampler);
    resumed.restore(&state).unwrap();
    let replayed: Vec<Vec<i32>> = resumed.map(|batch| batch.unwrap()).collect();
    assert_eq!(replayed, expected);
}

#[test]
fn test_dataloader_reports_dataset_errors() {
    let sampler = PreGeneratedBatchSampler::new(vec![vec![0, 1], vec![2, 7]], false);
    let mut loader = DataLoader::new(VecDataset::new(vec!['a', 'b', 'c']), sampler);
    assert_eq!(loader.next_batch(), Ok(Some(vec!['a', 'b'])));
    assert_eq!(
        loader.next_batch(),
        Err(SamplerError::IndexOutOfBounds { index: 7, len: 3 })
    );
}

#[test]
fn test_dataloader_empty_dataset() {
    let mut loader = sequential_loader(Vec::new(), 4, false);
    assert!(loader.is_empty());
    assert_eq!(loader.next_batch(), Ok(None));
}
