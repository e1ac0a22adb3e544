use crate::shared::catalog::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};

/// Категория (или отрасль) для фильтра каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Ключ категории, совпадает с `category`/`industry` у элементов
    pub id: String,
    /// Отображаемое название кнопки фильтра
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Зарезервированная категория "все"
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORIES
    }
}
