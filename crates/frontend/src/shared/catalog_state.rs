//! Реактивные обёртки над состоянием каталога из `contracts::shared::catalog`.
//!
//! Каждая страница создаёт своё состояние при монтировании; при уходе со
//! страницы оно уничтожается вместе с владельцем сигналов.

use contracts::domain::common::Category;
use contracts::shared::catalog::{CatalogItem, FilterState, FilteredItems, SelectionState, TabState};
use leptos::prelude::*;

// ============================================================================
// Category filter
// ============================================================================

#[derive(Clone, Copy)]
pub struct CategoryFilter {
    state: RwSignal<FilterState>,
}

impl CategoryFilter {
    pub fn new(categories: &[Category]) -> Self {
        Self {
            state: RwSignal::new(FilterState::new(categories)),
        }
    }

    pub fn active(&self) -> String {
        self.state.with(|s| s.active_category().to_string())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.state.with(|s| s.active_category() == key)
    }

    /// Отклонённый ключ не уведомляет подписчиков
    pub fn select(&self, key: &str) -> bool {
        let mut accepted = false;
        self.state.maybe_update(|s| {
            accepted = s.set_active(key);
            accepted
        });
        if accepted {
            log::debug!("category filter: {}", key);
        } else {
            log::warn!("category filter: unknown category '{}' ignored", key);
        }
        accepted
    }

    pub fn reset(&self) {
        self.state.update(FilterState::reset);
    }

    /// Отфильтрованный список; отслеживает активную категорию
    pub fn apply<T: CatalogItem + Clone>(&self, items: &[T]) -> FilteredItems<T> {
        self.state.with(|s| s.apply(items))
    }
}

// ============================================================================
// Selection (detail modal)
// ============================================================================

pub struct Selection<T: Send + Sync + 'static> {
    state: RwSignal<SelectionState<T>>,
}

impl<T: Send + Sync + 'static> Clone for Selection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Selection<T> {}

impl<T: Clone + Send + Sync + 'static> Selection<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SelectionState::new()),
        }
    }

    pub fn select(&self, item: T) {
        self.state.update(|s| s.select(item));
    }

    pub fn close(&self) {
        self.state.update(SelectionState::close);
    }

    pub fn is_visible(&self) -> bool {
        self.state.with(SelectionState::is_visible)
    }

    /// Элемент для модального окна, пока оно открыто
    pub fn displayed(&self) -> Option<T> {
        self.state.with(|s| s.displayed().cloned())
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tabs
// ============================================================================

#[derive(Clone, Copy)]
pub struct Tabs {
    state: RwSignal<TabState>,
}

impl Tabs {
    pub fn new(len: usize) -> Self {
        Self {
            state: RwSignal::new(TabState::new(len)),
        }
    }

    pub fn active_index(&self) -> usize {
        self.state.with(TabState::active_index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.state.with(|s| s.is_active(index))
    }

    pub fn set_active(&self, index: usize) -> bool {
        let mut applied = false;
        self.state.maybe_update(|s| {
            applied = s.set_active(index);
            applied
        });
        if !applied {
            log::warn!("tabs: index {} out of range", index);
        }
        applied
    }

    pub fn active<T: Clone>(&self, list: &[T]) -> Option<T> {
        self.state.with(|s| s.active(list).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn categories() -> Vec<Category> {
        vec![Category::new("sensors", "Sensors"), Category::new("industrial", "Industrial")]
    }

    #[test]
    fn test_unknown_category_does_not_recompute_dependents() {
        Owner::new().with(|| {
            let filter = CategoryFilter::new(&categories());
            let runs = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&runs);
            let active = Memo::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                filter.active()
            });

            assert_eq!(active.get(), "all");
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            assert!(!filter.select("robots"));
            assert_eq!(active.get(), "all");
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            assert!(filter.select("sensors"));
            assert_eq!(active.get(), "sensors");
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_out_of_range_tab_does_not_recompute_dependents() {
        Owner::new().with(|| {
            let tabs = Tabs::new(3);
            let runs = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&runs);
            let active = Memo::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                tabs.active_index()
            });

            assert_eq!(active.get(), 0);
            assert!(!tabs.set_active(3));
            assert_eq!(active.get(), 0);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            assert!(tabs.set_active(2));
            assert_eq!(active.get(), 2);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
