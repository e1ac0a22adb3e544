/// Раскрытый пункт FAQ. Одновременно открыт не более одного пункта.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Открыть пункт или закрыть, если он уже открыт
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut acc = AccordionState::new();
        assert_eq!(acc.open_index(), None);

        acc.toggle(1);
        assert!(acc.is_open(1));

        acc.toggle(1);
        assert!(!acc.is_open(1));
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn test_opening_other_closes_previous() {
        let mut acc = AccordionState::new();
        acc.toggle(0);
        acc.toggle(3);
        assert!(!acc.is_open(0));
        assert!(acc.is_open(3));

        acc.collapse();
        assert_eq!(acc.open_index(), None);
    }
}
