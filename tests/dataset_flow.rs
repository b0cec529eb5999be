//! Интеграционный тест полного цикла работы с датасетом:
//! сэмплирование, мини-батчи и анимации поверх одной таблицы.

use ndarray::{ArrayD, IxDyn};
use std::collections::HashSet;

use rustydata::{
    AnimationOptions, MiniBatchOptions, Sample, SamplerOptions, TableDataset,
};

const FRAMES: usize = 4;
const ANIMATIONS: usize = 6;
const SIZE: usize = FRAMES * ANIMATIONS; // 24

/// Строит таблицу, в которой метка образца равна его индексу.
fn build_dataset() -> TableDataset {
    let data = ArrayD::from_shape_vec(
        IxDyn(&[SIZE, 2, 3]),
        (0..SIZE * 6).map(|x| x as f32).collect(),
    )
    .unwrap();
    let class = ArrayD::from_shape_vec(
        IxDyn(&[SIZE]),
        (0..SIZE).map(|x| x as f32).collect(),
    )
    .unwrap();

    TableDataset::from_arrays(data, class)
        .with_name("flow")
        .with_classes((0..SIZE).map(|i| format!("c{}", i)).collect())
        .with_animation(FRAMES, ANIMATIONS)
}

fn index_of(sample: &Sample) -> usize {
    *sample["class"].first().unwrap() as usize
}

#[test]
fn introspection_matches_backing_table() {
    let dataset = build_dataset();

    assert_eq!(dataset.size(), SIZE);
    assert_eq!(dataset.dimensions(), vec![2, 3]);
    assert_eq!(dataset.n_dimensions(), 6);
    assert_eq!(dataset.name(), Some("flow"));
    assert_eq!(dataset.classes().len(), SIZE);
}

#[test]
fn sampler_cycles_with_fresh_permutations() {
    let dataset = build_dataset();

    let indices: Vec<usize> = dataset
        .sampler(SamplerOptions::default().seed(17))
        .take(3 * SIZE)
        .map(|sample| index_of(&sample))
        .collect();

    // Каждая из трех эпох - перестановка всех индексов
    for epoch in indices.chunks(SIZE) {
        let unique: HashSet<_> = epoch.iter().collect();
        assert_eq!(unique.len(), SIZE);
    }

    // Эпохи перемешаны независимо
    assert_ne!(indices[..SIZE], indices[SIZE..2 * SIZE]);
    assert_ne!(indices[SIZE..2 * SIZE], indices[2 * SIZE..]);
}

#[test]
fn unshuffled_sampler_is_two_ascending_passes() {
    let dataset = build_dataset();

    let indices: Vec<usize> = dataset
        .sampler(SamplerOptions::default().shuffled(false))
        .take(2 * SIZE)
        .map(|sample| index_of(&sample))
        .collect();

    let expected: Vec<usize> = (0..SIZE).chain(0..SIZE).collect();
    assert_eq!(indices, expected);
}

#[test]
fn mini_batch_epoch_partitions_the_prefix() {
    let dataset = build_dataset();
    let batch_size = 5; // 24 / 5 = 4 батча, хвост из 4 образцов отбрасывается

    let mut covered: Vec<usize> = Vec::new();
    for batch in dataset.mini_batches(
        MiniBatchOptions::default().size(batch_size).seed(23),
    ) {
        let columns = batch.columns();
        assert_eq!(columns["data"].shape(), &[batch_size, 2, 3]);
        assert_eq!(columns["class"].shape(), &[batch_size]);

        for sample in batch.samples() {
            covered.push(index_of(&sample));
        }
    }

    assert_eq!(covered.len(), 20);
    covered.sort_unstable();
    assert_eq!(covered, (0..20).collect::<Vec<_>>());
}

#[test]
fn tensor_form_matches_sequence_form() {
    let dataset = build_dataset();
    let batch = dataset.mini_batch(8, 3);

    let columns = batch.columns();
    for (offset, sample) in batch.samples().enumerate() {
        let from_view = columns["data"]
            .index_axis(ndarray::Axis(0), offset)
            .to_owned();
        assert_eq!(sample["data"], from_view);
    }
}

#[test]
fn animations_group_consecutive_frames() {
    let dataset = build_dataset();

    let mut starts = Vec::new();
    for frames in dataset
        .animations(AnimationOptions::default().seed(31))
        .unwrap()
    {
        let indices: Vec<usize> = frames.map(|sample| index_of(&sample)).collect();
        assert_eq!(indices.len(), FRAMES);
        // Кадры внутри анимации строго последовательны
        for pair in indices.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
        assert_eq!(indices[0] % FRAMES, 0);
        starts.push(indices[0]);
    }

    starts.sort_unstable();
    let expected: Vec<usize> = (0..ANIMATIONS).map(|i| i * FRAMES).collect();
    assert_eq!(starts, expected);
}

#[test]
fn independent_iterators_do_not_interfere() {
    let dataset = build_dataset();

    let mut ordered = dataset.sampler(SamplerOptions::default().shuffled(false));
    let mut shuffled = dataset.sampler(SamplerOptions::default().seed(41));

    // Поочередное потребление двух потоков над одной таблицей
    let mut ordered_indices = Vec::new();
    for _ in 0..SIZE {
        ordered_indices.push(index_of(&ordered.next().unwrap()));
        let _ = shuffled.next().unwrap();
    }

    assert_eq!(ordered_indices, (0..SIZE).collect::<Vec<_>>());
}

#[test]
fn seeded_runs_are_reproducible_across_datasets() {
    let first: Vec<usize> = build_dataset()
        .sampler(SamplerOptions::default().seed(53))
        .take(2 * SIZE)
        .map(|sample| index_of(&sample))
        .collect();
    let second: Vec<usize> = build_dataset()
        .sampler(SamplerOptions::default().seed(53))
        .take(2 * SIZE)
        .map(|sample| index_of(&sample))
        .collect();

    assert_eq!(first, second);
}
