/// Returns the mask necessary to access the bit at `index` in a [u64].
///
/// # Example
///
/// ```
/// # use trilogic::data_structures::mask_64;
/// assert_eq!(0b100u64 & mask_64(2), 0b100);
/// ```
pub fn mask_64(index: usize) -> u64 {
    debug_assert!(index < 64, "Bit index out of range:{}", index);
    1 << index
}

/// Data structure that iterates over the lowest `width` bits of a [u64],
/// least significant bit first.
///
/// # Example
/// ```
/// # use trilogic::data_structures::BitIter;
/// let mut bits = BitIter::new(0b101u64, 4);
///
/// assert_eq!(bits.next(), Some(true));
/// assert_eq!(bits.next(), Some(false));
/// assert_eq!(bits.next(), Some(true));
/// assert_eq!(bits.next(), Some(false));
///
/// assert_eq!(bits.next(), None);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BitIter {
    item: u64,
    width: usize,
    i: usize,
}
impl BitIter {
    /// Returns a new [BitIter] which will yield `width` bits of `item`.
    ///
    /// Widths over 64 are clamped to 64.
    pub fn new(item: u64, width: usize) -> Self {
        Self {
            item,
            width: width.min(64),
            i: 0,
        }
    }

    /// Returns true if every bit that will be yielded is 0.
    ///
    /// # Example
    /// ```
    /// # use trilogic::data_structures::BitIter;
    /// assert_eq!(BitIter::new(0b1000, 3).is_zero(), true);
    /// assert_eq!(BitIter::new(0b1000, 4).is_zero(), false);
    /// ```
    pub fn is_zero(&self) -> bool {
        (self.i..self.width).all(|i| self.item & mask_64(i) == 0)
    }
}

impl Iterator for BitIter {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.width {
            return None;
        }

        let result = self.item & mask_64(self.i) != 0;
        self.i += 1;

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.width - self.i;
        (left, Some(left))
    }
}
impl ExactSizeIterator for BitIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        let result = [false, true, true];
        let bits: Vec<_> = BitIter::new(0b110, 3).collect();
        assert_eq!(bits, result);

        assert_eq!(BitIter::new(u64::MAX, 100).len(), 64);
        assert_eq!(BitIter::new(u64::MAX, 0).next(), None);
    }

    #[test]
    fn test_high_bit() {
        let bits: Vec<_> = BitIter::new(1 << 63, 64).collect();
        assert_eq!(bits[63], true);
        assert!(bits[..63].iter().all(|b| !b));
    }
}
