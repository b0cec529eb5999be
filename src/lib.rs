//! # RustyData: Table-backed Datasets for Training Loops
//!
//! **RustyData** is a small data-handling library: it wraps a table of
//! parallel `ndarray` arrays (e.g. `data`, `class`) into a dataset object
//! with indexed access, shuffled sampling, mini-batching, and animation
//! (sequential-frame) grouping.
//!
//! Everything sequence-shaped here is a lazy, pull-based iterator: the
//! infinite sampler re-permutes indices at every epoch boundary, mini-batch
//! windows materialize as column views or per-sample streams only on demand,
//! and nothing copies the backing arrays.
//!
//! ## Key Components
//!
//! - [`TableDataset`]: dataset over a column table with size/shape introspection
//! - [`TableDataset::sampler`]: infinite shuffled/ordered sample stream
//! - [`TableDataset::mini_batches`]: one epoch of non-overlapping batch windows
//! - [`TableDataset::animations`]: fixed-length frame groups of consecutive samples
//! - [`Sampler`]: index-ordering strategies (sequential, random, cycled)
//!
//! ## Usage Example
//!
//! ```
//! use ndarray::ArrayD;
//! use rustydata::{MiniBatchOptions, SamplerOptions, TableDataset};
//!
//! // 1. Build a dataset from parallel arrays
//! let data = ArrayD::from_shape_vec(
//!     ndarray::IxDyn(&[6, 2]),
//!     (0..12).map(|x| x as f32).collect(),
//! ).unwrap();
//! let class = ArrayD::from_shape_vec(
//!     ndarray::IxDyn(&[6]),
//!     vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
//! ).unwrap();
//! let dataset = TableDataset::from_arrays(data, class).with_name("toy");
//!
//! // 2. Two full shuffled passes over the samples
//! for sample in dataset.sampler(SamplerOptions::default()).take(2 * dataset.size()) {
//!     let _features = &sample["data"];
//! }
//!
//! // 3. One epoch of mini-batches, as column views
//! for batch in dataset.mini_batches(MiniBatchOptions::default().size(2)) {
//!     let columns = batch.columns();
//!     assert_eq!(columns["data"].shape(), &[2, 2]);
//! }
//! ```

// Declare public modules that constitute the core library API.
pub mod animation;
pub mod batch;
pub mod dataset;
pub mod sampler;

pub use animation::{AnimationError, AnimationIterator, AnimationLayout, AnimationOptions};
pub use batch::{MiniBatch, MiniBatchIterator, MiniBatchOptions, SampleRange};
pub use dataset::{Sample, TableDataset, DATA_COLUMN};
pub use sampler::{
    CycleSampler, RandomSampler, SampleIterator, Sampler, SamplerOptions, SequentialSampler,
};
