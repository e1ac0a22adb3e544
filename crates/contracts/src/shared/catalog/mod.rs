//! Общее состояние каталожных страниц: фильтр по категории, выбранный элемент
//! для модального окна и активная вкладка.
//!
//! Страницы продуктов, решений и кейсов используют одни и те же типы,
//! параметризованные типом элемента каталога.

pub mod filter;
pub mod selection;
pub mod tabs;

pub use filter::{filter_by_category, FilterState, FilteredItems, ALL_CATEGORIES};
pub use selection::SelectionState;
pub use tabs::TabState;

/// Элемент каталога, который можно отфильтровать по категории
pub trait CatalogItem {
    /// Уникальный (в пределах коллекции) идентификатор
    fn item_id(&self) -> u32;

    /// Ключ категории/отрасли, по которому выполняется фильтрация
    fn category_key(&self) -> &str;
}

/// Первый повторившийся id в последовательности идентификаторов
pub fn find_duplicate(ids: impl IntoIterator<Item = u32>) -> Option<u32> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

/// Проверяет уникальность идентификаторов в коллекции каталога.
pub fn find_duplicate_id<T: CatalogItem>(items: &[T]) -> Option<u32> {
    find_duplicate(items.iter().map(CatalogItem::item_id))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::CatalogItem;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Item {
        pub id: u32,
        pub category: String,
    }

    impl CatalogItem for Item {
        fn item_id(&self) -> u32 {
            self.id
        }

        fn category_key(&self) -> &str {
            &self.category
        }
    }

    pub fn item(id: u32, category: &str) -> Item {
        Item {
            id,
            category: category.to_string(),
        }
    }

    /// `[{1, sensors}, {2, industrial}, {3, sensors}]`
    pub fn sample_catalog() -> Vec<Item> {
        vec![
            item(1, "sensors"),
            item(2, "industrial"),
            item(3, "sensors"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{item, sample_catalog};
    use super::*;

    #[test]
    fn test_no_duplicates_in_sample() {
        assert_eq!(find_duplicate_id(&sample_catalog()), None);
    }

    #[test]
    fn test_duplicate_is_reported() {
        let items = vec![item(1, "a"), item(2, "b"), item(1, "c")];
        assert_eq!(find_duplicate_id(&items), Some(1));
    }

    #[test]
    fn test_find_duplicate_over_plain_ids() {
        assert_eq!(find_duplicate([1, 2, 3]), None);
        assert_eq!(find_duplicate([4, 2, 4, 2]), Some(4));
        assert_eq!(find_duplicate(Vec::new()), None);
    }
}
