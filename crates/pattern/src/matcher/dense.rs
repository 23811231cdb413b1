//! Dense membership matcher for small bounded fields.

use cronpat_core::Field;

/// Bitset over one field's `[min, max]` range, indexed by `value - min`.
///
/// Every dense field spans at most 60 values, so one `u64` holds the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatcher {
    min: i32,
    bits: u64,
}

impl DenseMatcher {
    /// Build from already-normalized values of `field`.
    pub fn new(field: Field, values: &[i32]) -> Self {
        debug_assert!(field.span() <= 64, "{field} is too wide for a dense matcher");
        let min = field.min();
        let mut bits = 0u64;
        for &value in values {
            let offset = value - min;
            if (0..64).contains(&offset) {
                bits |= 1 << offset;
            }
        }
        Self { min, bits }
    }

    pub fn matches(&self, value: i32) -> bool {
        let offset = value - self.min;
        (0..64).contains(&offset) && self.bits & (1 << offset) != 0
    }

    /// Member values in ascending order.
    pub fn values(&self) -> Vec<i32> {
        (0..64)
            .filter(|offset| self.bits & (1u64 << offset) != 0)
            .map(|offset| offset + self.min)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_offset_by_min() {
        let m = DenseMatcher::new(Field::Month, &[1, 6, 12]);
        assert!(m.matches(1));
        assert!(m.matches(6));
        assert!(m.matches(12));
        assert!(!m.matches(2));
        assert!(!m.matches(0));
        assert!(!m.matches(13));
        assert_eq!(m.values(), vec![1, 6, 12]);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn full_second_range_fits() {
        let all: Vec<i32> = (0..=59).collect();
        let m = DenseMatcher::new(Field::Second, &all);
        assert_eq!(m.len(), 60);
        assert!(m.matches(59));
        assert!(!m.matches(60));
        assert!(!m.matches(-1));
    }

    #[test]
    fn duplicates_collapse() {
        let m = DenseMatcher::new(Field::Hour, &[3, 3, 3]);
        assert_eq!(m.values(), vec![3]);
        assert!(!m.is_empty());
    }
}
