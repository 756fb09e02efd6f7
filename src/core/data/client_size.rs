/// Size of a window's client area, or of a surface, in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClientSize {
    pub width: u32,
    pub height: u32,
}

impl ClientSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, e.g. for a minimised window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sided_sizes_are_empty() {
        assert!(ClientSize::new(0, 10).is_empty());
        assert!(ClientSize::new(10, 0).is_empty());
        assert!(ClientSize::default().is_empty());
        assert!(!ClientSize::new(1, 1).is_empty());
    }

    #[test]
    fn area_does_not_overflow_u32() {
        let size = ClientSize::new(100_000, 100_000);
        assert_eq!(size.area(), 10_000_000_000);
    }
}
