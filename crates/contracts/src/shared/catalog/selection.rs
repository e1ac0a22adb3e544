/// Выбранный элемент каталога и видимость окна с подробностями.
///
/// `visible == true` возможно только при выбранном элементе.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<T> {
    selected: Option<T>,
    visible: bool,
}

impl<T> Default for SelectionState<T> {
    fn default() -> Self {
        Self {
            selected: None,
            visible: false,
        }
    }
}

impl<T> SelectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выбрать элемент и показать окно
    pub fn select(&mut self, item: T) {
        self.selected = Some(item);
        self.visible = true;
    }

    /// Скрыть окно. Последний выбранный элемент сохраняется.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Скрыть окно и забыть элемент
    pub fn clear(&mut self) {
        self.selected = None;
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Элемент для отображения в окне: `None`, пока окно скрыто
    pub fn displayed(&self) -> Option<&T> {
        if self.visible {
            self.selected.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::test_support::{item, Item};

    #[test]
    fn test_default_is_hidden_and_empty() {
        let state: SelectionState<Item> = SelectionState::new();
        assert!(!state.is_visible());
        assert!(state.selected().is_none());
        assert!(state.displayed().is_none());
    }

    #[test]
    fn test_select_shows_item() {
        let mut state = SelectionState::new();
        state.select(item(2, "industrial"));
        assert!(state.is_visible());
        assert_eq!(state.selected(), Some(&item(2, "industrial")));
        assert_eq!(state.displayed(), Some(&item(2, "industrial")));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = SelectionState::new();
        state.select(item(1, "sensors"));
        let once = state.clone();
        state.select(item(1, "sensors"));
        assert_eq!(state, once);
    }

    #[test]
    fn test_select_replaces_previous_item() {
        let mut state = SelectionState::new();
        state.select(item(1, "sensors"));
        state.select(item(3, "sensors"));
        assert_eq!(state.selected().map(|i| i.id), Some(3));
    }

    #[test]
    fn test_close_hides_and_keeps_item() {
        let mut state = SelectionState::new();
        state.select(item(1, "sensors"));
        state.close();
        assert!(!state.is_visible());
        assert!(state.displayed().is_none());
        assert_eq!(state.selected().map(|i| i.id), Some(1));
    }

    #[test]
    fn test_close_without_selection() {
        let mut state: SelectionState<Item> = SelectionState::new();
        state.close();
        assert!(!state.is_visible());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_clear_drops_item() {
        let mut state = SelectionState::new();
        state.select(item(1, "sensors"));
        state.clear();
        assert!(!state.is_visible());
        assert!(state.selected().is_none());
    }
}
