// --- Файл: src/sampler.rs ---

//! Стратегии сэмплирования: порядок индексов и бесконечный поток образцов.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::dataset::{Sample, TableDataset};

/// Трейт для сэмплеров - генераторов порядка индексов.
pub trait Sampler: Iterator<Item = usize> {
    /// Возвращает длину одной эпохи (количество индексов).
    fn len(&self) -> usize;

    /// Проверяет, пуст ли сэмплер.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Сбрасывает сэмплер к началу новой эпохи.
    fn reset(&mut self);
}

/// Последовательный сэмплер - возвращает индексы по порядку.
pub struct SequentialSampler {
    len: usize,
    current: usize,
}

impl SequentialSampler {
    /// Создает последовательный сэмплер для датасета заданного размера.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }
}

impl Iterator for SequentialSampler {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.len {
            let index = self.current;
            self.current += 1;
            Some(index)
        } else {
            None
        }
    }
}

impl Sampler for SequentialSampler {
    fn len(&self) -> usize {
        self.len
    }

    fn reset(&mut self) {
        self.current = 0;
    }
}

/// Случайный сэмплер - равномерная случайная перестановка индексов.
///
/// Генератор случайных чисел создается один раз и переиспользуется:
/// каждый `reset` дает независимую перестановку, а фиксированный seed
/// воспроизводит всю последовательность эпох целиком.
pub struct RandomSampler {
    indices: Vec<usize>,
    current: usize,
    rng: StdRng,
}

impl RandomSampler {
    /// Создает случайный сэмплер для датасета заданного размера.
    pub fn new(len: usize) -> Self {
        Self::with_rng(len, StdRng::from_entropy())
    }

    /// Создает случайный сэмплер с фиксированным seed для воспроизводимости.
    pub fn with_seed(len: usize, seed: u64) -> Self {
        Self::with_rng(len, StdRng::seed_from_u64(seed))
    }

    fn with_rng(len: usize, rng: StdRng) -> Self {
        let mut sampler = Self {
            indices: (0..len).collect(),
            current: 0,
            rng,
        };
        sampler.indices.shuffle(&mut sampler.rng);
        sampler
    }
}

impl Iterator for RandomSampler {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.indices.len() {
            let index = self.indices[self.current];
            self.current += 1;
            Some(index)
        } else {
            None
        }
    }
}

impl Sampler for RandomSampler {
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn reset(&mut self) {
        self.current = 0;
        self.indices.shuffle(&mut self.rng);
    }
}

/// Бесконечный сэмплер: исчерпав внутренний, сбрасывает его и продолжает.
///
/// Каждая эпоха получает свежий порядок индексов от `reset` внутреннего
/// сэмплера. Пустой внутренний сэмплер дает пустой поток, а не зависание.
pub struct CycleSampler<S: Sampler> {
    inner: S,
}

impl<S: Sampler> CycleSampler<S> {
    /// Оборачивает сэмплер в бесконечный цикл эпох.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Sampler> Iterator for CycleSampler<S> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(index) = self.inner.next() {
            return Some(index);
        }
        if self.inner.is_empty() {
            return None;
        }
        self.inner.reset();
        self.inner.next()
    }
}

/// Enum для выбора порядка обхода без параметризации типом сэмплера.
pub(crate) enum SamplerEnum {
    Sequential(SequentialSampler),
    Random(RandomSampler),
}

impl SamplerEnum {
    pub(crate) fn new(len: usize, shuffled: bool, seed: Option<u64>) -> Self {
        if shuffled {
            match seed {
                Some(seed) => SamplerEnum::Random(RandomSampler::with_seed(len, seed)),
                None => SamplerEnum::Random(RandomSampler::new(len)),
            }
        } else {
            SamplerEnum::Sequential(SequentialSampler::new(len))
        }
    }
}

impl Iterator for SamplerEnum {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SamplerEnum::Sequential(sampler) => sampler.next(),
            SamplerEnum::Random(sampler) => sampler.next(),
        }
    }
}

impl Sampler for SamplerEnum {
    fn len(&self) -> usize {
        match self {
            SamplerEnum::Sequential(sampler) => sampler.len(),
            SamplerEnum::Random(sampler) => sampler.len(),
        }
    }

    fn reset(&mut self) {
        match self {
            SamplerEnum::Sequential(sampler) => sampler.reset(),
            SamplerEnum::Random(sampler) => sampler.reset(),
        }
    }
}

/// Настройки бесконечного потока образцов.
#[derive(Debug, Clone)]
pub struct SamplerOptions {
    /// Перемешивать ли индексы в каждой эпохе.
    pub shuffled: bool,
    /// Seed для воспроизводимости.
    pub seed: Option<u64>,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            shuffled: true,
            seed: None,
        }
    }
}

impl SamplerOptions {
    /// Включает/выключает перемешивание.
    pub fn shuffled(mut self, shuffled: bool) -> Self {
        self.shuffled = shuffled;
        self
    }

    /// Устанавливает seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Бесконечный ленивый поток образцов датасета.
pub struct SampleIterator<'a> {
    dataset: &'a TableDataset,
    order: CycleSampler<SamplerEnum>,
}

impl<'a> Iterator for SampleIterator<'a> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.next()?;
        Some(self.dataset.sample(index))
    }
}

impl TableDataset {
    /// Создает бесконечный поток образцов.
    ///
    /// Каждая эпоха - полный проход по всем индексам датасета: случайная
    /// перестановка при `shuffled`, иначе возрастающий порядок. Исчерпав
    /// эпоху, поток генерирует новый порядок и продолжается без ограничений;
    /// потребитель сам ограничивает выборку (`take`).
    ///
    /// # Пример
    ///
    /// ```rust,ignore
    /// for sample in dataset.sampler(SamplerOptions::default()).take(1000) {
    ///     // Обучение на одном образце
    /// }
    /// ```
    pub fn sampler(&self, options: SamplerOptions) -> SampleIterator<'_> {
        let order = SamplerEnum::new(self.size(), options.shuffled, options.seed);
        SampleIterator {
            dataset: self,
            order: CycleSampler::new(order),
        }
    }
}
