//! Training Loop Example - feeding a model from a TableDataset.
//!
//! This example demonstrates the three access patterns:
//! 1. Infinite shuffled sample stream (bounded with `take`)
//! 2. One epoch of mini-batches as column views
//! 3. Animation (frame-group) iteration for sequence data
//!
//! Run with: `cargo run --example training_loop`

use ndarray::{ArrayD, IxDyn};
use rustydata::{AnimationOptions, MiniBatchOptions, SamplerOptions, TableDataset};

fn main() {
    println!("=== RustyData Training Loop Example ===\n");

    // Generate a toy table: 60 samples of 8 features, labels 0/1/2
    let n = 60;
    let data: Vec<f32> = (0..n * 8).map(|i| (i % 17) as f32 / 17.0).collect();
    let class: Vec<f32> = (0..n).map(|i| (i % 3) as f32).collect();

    let dataset = TableDataset::from_arrays(
        ArrayD::from_shape_vec(IxDyn(&[n, 8]), data).unwrap(),
        ArrayD::from_shape_vec(IxDyn(&[n]), class).unwrap(),
    )
    .with_name("toy")
    .with_classes(vec!["a".into(), "b".into(), "c".into()])
    .with_animation(6, 10);

    println!(
        "Dataset '{}': {} samples of shape {:?} ({} values each)\n",
        dataset.name().unwrap(),
        dataset.size(),
        dataset.dimensions(),
        dataset.n_dimensions()
    );

    // 1. Per-sample SGD style: two shuffled epochs from the infinite stream
    let mut seen = 0;
    for sample in dataset.sampler(SamplerOptions::default().seed(1)).take(2 * dataset.size()) {
        let _features = &sample["data"];
        seen += 1;
    }
    println!("Sample stream: consumed {} samples (2 epochs)", seen);

    // 2. Mini-batch training: one epoch of shuffled batch windows
    let options = MiniBatchOptions::default().size(16).seed(2);
    for (step, batch) in dataset.mini_batches(options).enumerate() {
        let columns = batch.columns();
        println!(
            "  step {}: batch at offset {:>2}, data view {:?}",
            step,
            batch.start(),
            columns["data"].shape()
        );
    }
    println!("Mini-batches: 60 / 16 = 3 full windows, remainder dropped");

    // 3. Frame groups: every animation is a lazy run of 6 consecutive samples
    let mut n_animations = 0;
    let mut n_frames = 0;
    for frames in dataset
        .animations(AnimationOptions::default().shuffled(false))
        .unwrap()
    {
        n_animations += 1;
        n_frames += frames.count();
    }
    println!(
        "Animations: iterated {} groups, {} frames total",
        n_animations, n_frames
    );
}
