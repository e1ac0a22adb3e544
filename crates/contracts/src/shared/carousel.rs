/// Текущий слайд карусели отзывов с переходом по кругу.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Переход к слайду по точке-индикатору. Индекс вне диапазона игнорируется.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    pub fn current<'a, T>(&self, slides: &'a [T]) -> Option<&'a T> {
        slides.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        let mut c = CarouselState::new(3);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut c = CarouselState::new(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.prev();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_go_to_bounds() {
        let mut c = CarouselState::new(3);
        assert!(c.go_to(1));
        assert!(!c.go_to(3));
        assert_eq!(c.index(), 1);
        assert_eq!(c.current(&["a", "b", "c"]), Some(&"b"));
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = CarouselState::new(0);
        c.next();
        c.prev();
        assert!(!c.go_to(0));
        assert_eq!(c.index(), 0);
        let slides: [u8; 0] = [];
        assert_eq!(c.current(&slides), None);
    }
}
