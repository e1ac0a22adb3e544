use super::CatalogItem;
use crate::domain::common::Category;

/// Зарезервированный ключ "без фильтра". Всегда допустим, даже если в
/// каталоге нет ни одного элемента.
pub const ALL_CATEGORIES: &str = "all";

/// Возвращает элементы выбранной категории в исходном порядке.
///
/// Для `"all"` возвращается весь список без изменений. Неизвестная категория
/// даёт пустой результат, это не ошибка.
pub fn filter_by_category<T: CatalogItem + Clone>(items: &[T], active_category: &str) -> Vec<T> {
    if active_category == ALL_CATEGORIES {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.category_key() == active_category)
        .cloned()
        .collect()
}

/// Результат применения фильтра.
///
/// Пустой список при применённом фильтре и пустой каталог без фильтра
/// различаются через `filter_applied`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredItems<T> {
    pub items: Vec<T>,
    pub filter_applied: bool,
}

impl<T> FilteredItems<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Фильтр применён, но ничего не найдено: показываем заглушку
    /// с кнопкой "показать все".
    pub fn is_empty_state(&self) -> bool {
        self.filter_applied && self.items.is_empty()
    }
}

/// Состояние фильтра страницы.
///
/// `active_category` всегда либо `"all"`, либо один из ключей списка категорий.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_category: String,
    known_categories: Vec<String>,
}

impl FilterState {
    pub fn new(categories: &[Category]) -> Self {
        let known_categories = categories
            .iter()
            .filter(|c| !c.is_all())
            .map(|c| c.id.clone())
            .collect();

        Self {
            active_category: ALL_CATEGORIES.to_string(),
            known_categories,
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn is_filtering(&self) -> bool {
        self.active_category != ALL_CATEGORIES
    }

    pub fn is_known(&self, key: &str) -> bool {
        key == ALL_CATEGORIES || self.known_categories.iter().any(|k| k == key)
    }

    /// Переключает активную категорию. Ключ вне списка категорий отклоняется.
    pub fn set_active(&mut self, key: &str) -> bool {
        if !self.is_known(key) {
            return false;
        }
        if self.active_category != key {
            self.active_category = key.to_string();
        }
        true
    }

    /// Сброс на "все категории"
    pub fn reset(&mut self) {
        self.active_category = ALL_CATEGORIES.to_string();
    }

    pub fn apply<T: CatalogItem + Clone>(&self, items: &[T]) -> FilteredItems<T> {
        FilteredItems {
            items: filter_by_category(items, &self.active_category),
            filter_applied: self.is_filtering(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::test_support::{item, sample_catalog, Item};

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("all", "All Products"),
            Category::new("sensors", "Sensors & Data Collection"),
            Category::new("industrial", "Industrial Automation"),
            Category::new("custom", "Custom Solutions"),
        ]
    }

    #[test]
    fn test_filter_keeps_matching_items_in_order() {
        let result = filter_by_category(&sample_catalog(), "sensors");
        assert_eq!(ids(&result), vec![1, 3]);
        assert!(result.iter().all(|i| i.category == "sensors"));
    }

    #[test]
    fn test_filter_all_is_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter_by_category(&catalog, ALL_CATEGORIES), catalog);

        let empty: Vec<Item> = Vec::new();
        assert!(filter_by_category(&empty, ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_by_category(&sample_catalog(), "nonexistent").is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let _ = filter_by_category(&catalog, "industrial");
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_filter_every_present_category() {
        let catalog = vec![
            item(10, "b"),
            item(4, "a"),
            item(7, "b"),
            item(2, "c"),
            item(9, "a"),
        ];
        for key in ["a", "b", "c"] {
            let result = filter_by_category(&catalog, key);
            let expected: Vec<u32> = catalog
                .iter()
                .filter(|i| i.category == key)
                .map(|i| i.id)
                .collect();
            assert_eq!(ids(&result), expected, "category {key}");
        }
    }

    #[test]
    fn test_state_starts_at_all() {
        let state = FilterState::new(&categories());
        assert_eq!(state.active_category(), ALL_CATEGORIES);
        assert!(!state.is_filtering());

        let filtered = state.apply(&sample_catalog());
        assert_eq!(filtered.len(), 3);
        assert!(!filtered.filter_applied);
        assert!(!filtered.is_empty_state());
    }

    #[test]
    fn test_state_rejects_unknown_key() {
        let mut state = FilterState::new(&categories());
        assert!(state.set_active("industrial"));
        assert!(!state.set_active("nonexistent"));
        assert_eq!(state.active_category(), "industrial");
        assert!(!state.set_active(""));
        assert_eq!(state.active_category(), "industrial");
    }

    #[test]
    fn test_all_is_valid_without_explicit_entry() {
        let mut state = FilterState::new(&[Category::new("sensors", "Sensors")]);
        assert!(state.set_active("sensors"));
        assert!(state.set_active(ALL_CATEGORIES));
        assert_eq!(state.active_category(), ALL_CATEGORIES);
    }

    #[test]
    fn test_empty_state_when_category_has_no_items() {
        let mut state = FilterState::new(&categories());
        assert!(state.set_active("custom"));

        let filtered = state.apply(&sample_catalog());
        assert!(filtered.is_empty());
        assert!(filtered.is_empty_state());

        state.reset();
        assert_eq!(state.active_category(), ALL_CATEGORIES);
        assert_eq!(state.apply(&sample_catalog()).len(), 3);
    }

    #[test]
    fn test_empty_catalog_without_filter_is_not_empty_state() {
        let state = FilterState::new(&categories());
        let empty: Vec<Item> = Vec::new();
        let filtered = state.apply(&empty);
        assert!(filtered.is_empty());
        assert!(!filtered.is_empty_state());
    }
}
