/// Ordering key between handlers of the same message.
///
/// Handlers with a higher priority run first. Any `i16` is legal, the named
/// tiers are conventions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i16);

impl Priority {
    pub const LOWEST: Self = Self(-2);
    pub const LOWER: Self = Self(-1);
    pub const NORMAL: Self = Self(0);
    pub const HIGHER: Self = Self(1);
    pub const HIGHEST: Self = Self(2);

    #[must_use]
    pub fn value(self) -> i16 {
        self.0
    }
}

impl From<i16> for Priority {
    fn from(value: i16) -> Self {
        Self(value)
    }
}
