use core::fmt;

/// A (period, thread) coordinate identifying one scheduling unit.
///
/// Ordering is period-major, thread-minor, which the derived `Ord` yields
/// from the field order. Async message validity windows are inclusive ranges
/// over this ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub period: u64,
    pub thread: u8,
}

impl Slot {
    pub fn new(period: u64, thread: u8) -> Self {
        Self { period, thread }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(period {}, thread {})", self.period, self.thread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_period_major() {
        assert!(Slot::new(1, 31) < Slot::new(2, 0));
        assert!(Slot::new(5, 0) < Slot::new(5, 1));
        assert!(Slot::new(10, 0) > Slot::new(5, 0));
        assert_eq!(Slot::new(3, 3), Slot::new(3, 3));
    }
}
