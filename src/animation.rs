// --- Файл: src/animation.rs ---

//! Анимации: группы подряд идущих образцов фиксированной длины.

use thiserror::Error;

use crate::batch::SampleRange;
use crate::dataset::TableDataset;
use crate::sampler::SamplerEnum;

/// Ошибки анимационных операций.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Анимационная разметка не задана. Вызовите TableDataset::with_animation, прежде чем обращаться к анимациям.")]
    LayoutNotConfigured,
}

/// Разметка датасета на анимации.
///
/// Датасет из `base_size * frames` образцов трактуется как `base_size`
/// анимаций по `frames` подряд идущих кадров каждая.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationLayout {
    /// Количество кадров (образцов) в одной анимации.
    pub frames: usize,
    /// Количество анимаций в датасете.
    pub base_size: usize,
}

/// Настройки перебора анимаций.
#[derive(Debug, Clone)]
pub struct AnimationOptions {
    /// Перемешивать ли порядок анимаций.
    pub shuffled: bool,
    /// Seed для воспроизводимости.
    pub seed: Option<u64>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            shuffled: true,
            seed: None,
        }
    }
}

impl AnimationOptions {
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

/// Конечный итератор анимаций; каждая анимация - ленивая
/// последовательность кадров.
pub struct AnimationIterator<'a> {
    dataset: &'a TableDataset,
    order: SamplerEnum,
    frames: usize,
}

impl<'a> Iterator for AnimationIterator<'a> {
    type Item = SampleRange<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.next()?;
        Some(
            self.dataset
                .mini_batch(index * self.frames, self.frames)
                .samples(),
        )
    }
}

impl TableDataset {
    /// Возвращает `index`-ю анимацию: ленивую последовательность из
    /// `frames` подряд идущих образцов начиная с `index * frames`.
    pub fn animation(&self, index: usize) -> Result<SampleRange<'_>, AnimationError> {
        let layout = self
            .animation_layout()
            .ok_or(AnimationError::LayoutNotConfigured)?;
        Ok(self
            .mini_batch(index * layout.frames, layout.frames)
            .samples())
    }

    /// Перебирает все `base_size` анимаций в случайном или возрастающем
    /// порядке.
    pub fn animations(
        &self,
        options: AnimationOptions,
    ) -> Result<AnimationIterator<'_>, AnimationError> {
        let layout = self
            .animation_layout()
            .ok_or(AnimationError::LayoutNotConfigured)?;
        let order = SamplerEnum::new(layout.base_size, options.shuffled, options.seed);
        Ok(AnimationIterator {
            dataset: self,
            order,
            frames: layout.frames,
        })
    }
}
