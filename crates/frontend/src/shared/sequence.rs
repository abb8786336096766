use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonically increasing id source
///
/// Values are scoped to the process lifetime and never reused. The pricing
/// editor draws its local row ids from here; they exist only to track UI
/// selection and are never persisted.
#[derive(Debug, Default)]
pub struct Sequence(AtomicI64);

impl Sequence {
    pub const fn new() -> Self {
        Self(AtomicI64::new(0))
    }

    pub fn nextval(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Process-wide instance backing the edit session
pub static SEQUENCE: Sequence = Sequence::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_distinct_and_strictly_increasing() {
        let seq = Sequence::new();
        let values: Vec<i64> = (0..5).map(|_| seq.nextval()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }
}
