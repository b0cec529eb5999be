// --- Файл: src/batch.rs ---

//! Мини-батчи: ленивые окна по оси образцов.

use ndarray::{ArrayViewD, Axis, Slice};
use std::collections::HashMap;

use crate::dataset::{Sample, TableDataset};
use crate::sampler::SamplerEnum;

/// Настройки нарезки датасета на мини-батчи.
#[derive(Debug, Clone)]
pub struct MiniBatchOptions {
    /// Перемешивать ли порядок батчей.
    pub shuffled: bool,
    /// Размер одного батча.
    pub size: usize,
    /// Seed для воспроизводимости.
    pub seed: Option<u64>,
}

impl Default for MiniBatchOptions {
    fn default() -> Self {
        Self {
            shuffled: true,
            size: 10,
            seed: None,
        }
    }
}

impl MiniBatchOptions {
    /// Включает/выключает перемешивание порядка батчей.
    pub fn shuffled(mut self, shuffled: bool) -> Self {
        self.shuffled = shuffled;
        self
    }

    /// Устанавливает размер батча.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Устанавливает seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Мини-батч - ленивое окно из `len()` подряд идущих образцов.
///
/// Само по себе окно данных не извлекает; данные материализуются тем
/// способом, который выберет потребитель:
/// - [`MiniBatch::columns`] - тензорная форма, узкие представления колонок;
/// - [`MiniBatch::samples`] - последовательная форма, образцы по одному.
#[derive(Debug, Clone, Copy)]
pub struct MiniBatch<'a> {
    dataset: &'a TableDataset,
    start: usize,
    size: usize,
}

impl<'a> MiniBatch<'a> {
    pub(crate) fn new(dataset: &'a TableDataset, start: usize, size: usize) -> Self {
        Self {
            dataset,
            start,
            size,
        }
    }

    /// Начальный индекс окна по оси образцов.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Количество образцов в окне.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Проверяет, пусто ли окно.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Тензорная форма: для каждой колонки - непрерывное представление
    /// длины `len()` по оси образцов, без копирования данных.
    ///
    /// # Паника
    ///
    /// Паникует, если окно выходит за пределы оси образцов.
    pub fn columns(&self) -> HashMap<String, ArrayViewD<'a, f32>> {
        let range = Slice::from(self.start..self.start + self.size);
        self.dataset
            .columns()
            .iter()
            .map(|(name, array)| (name.clone(), array.slice_axis(Axis(0), range)))
            .collect()
    }

    /// Последовательная форма: ленивый итератор образцов окна.
    pub fn samples(&self) -> SampleRange<'a> {
        SampleRange {
            dataset: self.dataset,
            current: self.start,
            end: self.start + self.size,
        }
    }
}

/// Ленивый итератор образцов в диапазоне `[current, end)`.
pub struct SampleRange<'a> {
    dataset: &'a TableDataset,
    current: usize,
    end: usize,
}

impl<'a> Iterator for SampleRange<'a> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }
        let sample = self.dataset.sample(self.current);
        self.current += 1;
        Some(sample)
    }
}

/// Конечный итератор мини-батчей одной эпохи.
pub struct MiniBatchIterator<'a> {
    dataset: &'a TableDataset,
    order: SamplerEnum,
    size: usize,
}

impl<'a> Iterator for MiniBatchIterator<'a> {
    type Item = MiniBatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch_index = self.order.next()?;
        Some(MiniBatch::new(
            self.dataset,
            batch_index * self.size,
            self.size,
        ))
    }
}

impl TableDataset {
    /// Возвращает ленивое окно `[start, start + size)`.
    ///
    /// Границы не проверяются: окно, выходящее за ось образцов, приведет
    /// к панике при материализации любой из форм.
    pub fn mini_batch(&self, start: usize, size: usize) -> MiniBatch<'_> {
        MiniBatch::new(self, start, size)
    }

    /// Нарезает датасет на `size() / options.size` непересекающихся
    /// мини-батчей и перебирает их в случайном или возрастающем порядке.
    ///
    /// Батчи непрерывны в исходном порядке образцов; перемешивается только
    /// порядок самих батчей. Остаток `size() % options.size` в эпоху не
    /// попадает. В отличие от [`TableDataset::sampler`], итератор конечен:
    /// одна эпоха - и всё.
    ///
    /// # Паника
    ///
    /// Паникует при `options.size == 0`.
    pub fn mini_batches(&self, options: MiniBatchOptions) -> MiniBatchIterator<'_> {
        let n_batches = self.size() / options.size;
        let order = SamplerEnum::new(n_batches, options.shuffled, options.seed);
        MiniBatchIterator {
            dataset: self,
            order,
            size: options.size,
        }
    }
}
