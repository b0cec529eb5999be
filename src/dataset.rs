// --- Файл: src/dataset.rs ---

//! Определение TableDataset - датасета поверх таблицы параллельных массивов.

use ndarray::{ArrayD, Axis};
use std::collections::HashMap;
use std::sync::Arc;

use crate::animation::AnimationLayout;

/// Имя колонки, по которой определяются размер и форма датасета.
pub const DATA_COLUMN: &str = "data";

/// Один образец: отображение имени колонки в её срез по оси образцов.
pub type Sample = HashMap<String, ArrayD<f32>>;

/// Датасет поверх таблицы "имя колонки -> массив".
///
/// Первая ось каждого массива - ось образцов; все колонки обязаны иметь
/// одинаковую длину по этой оси. Массивы хранятся за `Arc`, поэтому
/// клонирование датасета разделяет данные, а не копирует их.
#[derive(Debug, Clone)]
pub struct TableDataset {
    columns: HashMap<String, Arc<ArrayD<f32>>>,
    name: Option<String>,
    classes: Vec<String>,
    animation: Option<AnimationLayout>,
}

impl TableDataset {
    /// Создает датасет из таблицы колонок.
    ///
    /// # Паника
    ///
    /// Паникует, если колонки различаются длиной по оси образцов.
    pub fn new(columns: HashMap<String, ArrayD<f32>>) -> Self {
        {
            let mut lengths = columns.iter().map(|(name, array)| (name, array.shape()[0]));
            if let Some((first_name, first_len)) = lengths.next() {
                for (name, len) in lengths {
                    assert_eq!(
                        len, first_len,
                        "Column '{}' has {} samples, but column '{}' has {}",
                        name, len, first_name, first_len
                    );
                }
            }
        }

        let columns = columns
            .into_iter()
            .map(|(name, array)| (name, Arc::new(array)))
            .collect();

        Self {
            columns,
            name: None,
            classes: Vec::new(),
            animation: None,
        }
    }

    /// Создает датасет из пары массивов `data`/`class`.
    ///
    /// # Аргументы
    ///
    /// * `data` - Массив признаков формы [num_samples, ...]
    /// * `class` - Массив меток формы [num_samples, ...]
    pub fn from_arrays(data: ArrayD<f32>, class: ArrayD<f32>) -> Self {
        let mut columns = HashMap::new();
        columns.insert(DATA_COLUMN.to_string(), data);
        columns.insert("class".to_string(), class);
        Self::new(columns)
    }

    /// Устанавливает имя датасета.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Устанавливает список имен классов.
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    /// Задает анимационную разметку: число кадров в одной анимации
    /// и общее число анимаций.
    pub fn with_animation(mut self, frames: usize, base_size: usize) -> Self {
        self.animation = Some(AnimationLayout { frames, base_size });
        self
    }

    /// Возвращает количество образцов - длину колонки `data` по оси 0.
    ///
    /// # Паника
    ///
    /// Паникует, если в таблице нет колонки `data`.
    pub fn size(&self) -> usize {
        self.data_column().shape()[0]
    }

    /// Проверяет, пуст ли датасет.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Возвращает форму одного образца колонки `data` (без оси образцов).
    pub fn dimensions(&self) -> Vec<usize> {
        self.data_column().shape()[1..].to_vec()
    }

    /// Возвращает число элементов в одном образце колонки `data`.
    ///
    /// Например, образец формы [1, 28, 28] дает 784.
    pub fn n_dimensions(&self) -> usize {
        self.dimensions().iter().product()
    }

    /// Возвращает имена классов (возможно, пустой список).
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Возвращает имя датасета, если оно задано.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Возвращает анимационную разметку, если она задана.
    pub fn animation_layout(&self) -> Option<AnimationLayout> {
        self.animation
    }

    /// Возвращает колонку по имени.
    pub fn column(&self, name: &str) -> Option<&ArrayD<f32>> {
        self.columns.get(name).map(|array| array.as_ref())
    }

    /// Возвращает имена всех колонок таблицы.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(|name| name.as_str())
    }

    /// Извлекает образец по индексу: из каждой колонки берется срез
    /// по оси образцов.
    ///
    /// # Паника
    ///
    /// Паникует, если `index` выходит за пределы оси образцов.
    pub fn sample(&self, index: usize) -> Sample {
        self.columns
            .iter()
            .map(|(name, array)| {
                (name.clone(), array.index_axis(Axis(0), index).to_owned())
            })
            .collect()
    }

    pub(crate) fn data_column(&self) -> &ArrayD<f32> {
        match self.columns.get(DATA_COLUMN) {
            Some(array) => array,
            None => panic!("TableDataset: column '{}' is missing", DATA_COLUMN),
        }
    }

    pub(crate) fn columns(&self) -> &HashMap<String, Arc<ArrayD<f32>>> {
        &self.columns
    }
}
