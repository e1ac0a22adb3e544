/// Активная вкладка в фиксированном упорядоченном списке категорий.
///
/// Индекс меняется только на допустимый: `0 <= index < len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active_index: usize,
    len: usize,
}

impl TabState {
    pub fn new(len: usize) -> Self {
        Self {
            active_index: 0,
            len,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.active_index == index
    }

    /// Переключить вкладку. Индекс вне диапазона игнорируется.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active_index = index;
        true
    }

    /// Запись активной вкладки: `list[active_index]`
    pub fn active<'a, T>(&self, list: &'a [T]) -> Option<&'a T> {
        list.get(self.active_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_tab() {
        let tabs = TabState::new(5);
        assert_eq!(tabs.active_index(), 0);
        assert!(tabs.is_active(0));
        assert!(!tabs.is_active(1));
    }

    #[test]
    fn test_set_active_in_range() {
        let mut tabs = TabState::new(5);
        assert!(tabs.set_active(4));
        assert_eq!(tabs.active_index(), 4);
        assert!(tabs.set_active(0));
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut tabs = TabState::new(3);
        tabs.set_active(2);
        assert!(!tabs.set_active(3));
        assert!(!tabs.set_active(usize::MAX));
        assert_eq!(tabs.active_index(), 2);
    }

    #[test]
    fn test_active_record_lookup() {
        let titles = ["Predictive Analytics", "Process Automation", "Computer Vision"];
        let mut tabs = TabState::new(titles.len());
        assert_eq!(tabs.active(&titles), Some(&"Predictive Analytics"));
        tabs.set_active(2);
        assert_eq!(tabs.active(&titles), Some(&"Computer Vision"));
    }

    #[test]
    fn test_empty_list_rejects_everything() {
        let mut tabs = TabState::new(0);
        assert!(tabs.is_empty());
        assert!(!tabs.set_active(0));
        assert!(!tabs.is_active(0));
        let list: [u8; 0] = [];
        assert_eq!(tabs.active(&list), None);
    }
}
