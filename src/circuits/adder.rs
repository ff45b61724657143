use super::FullAdder;
use crate::graph::*;
use tracing::{debug, trace};

/// Widest [Adder] usable with [Adder::compute_u64], the carry out takes the 64th bit.
pub const MAX_U64_WIDTH: usize = 63;

/// Ripple carry adder made of a chain of [FullAdders](FullAdder).
///
/// Operands and the sum are little endian: index 0 is the least significant bit.
/// The carry of bit `i` is the carry in of bit `i + 1`, and the carry of the last bit is
/// the carry out of the whole adder.
///
/// # Example
/// ```
/// # use trilogic::{Adder, LogicLevel::*};
/// let mut adder = Adder::new(3).unwrap();
///
/// // 5 + 5
/// adder.compute(&[High, Low, High], &[High, Low, High], Low).unwrap();
/// assert_eq!(adder.sum(), vec![Low, High, Low]);
/// assert_eq!(adder.carry(), High);
///
/// assert_eq!(adder.compute_u64(6, 3, false).unwrap(), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct Adder {
    bits: Vec<FullAdder>,
}

impl Adder {
    /// Returns a new [Adder] of `width` bits using the default [NetworkConfig].
    pub fn new(width: usize) -> Result<Self> {
        Self::with_config(width, Default::default())
    }

    /// Returns a new [Adder] of `width` bits whose networks enforce `config`.
    ///
    /// # Errors
    ///
    /// Returns [NetworkError::EmptyAdder] if `width` is 0.
    pub fn with_config(width: usize, config: NetworkConfig) -> Result<Self> {
        if width == 0 {
            return Err(NetworkError::EmptyAdder);
        }
        let bits = (0..width)
            .map(|_| FullAdder::with_config(config))
            .collect::<Result<Vec<_>>>()?;
        debug!(width, "ripple carry adder created");
        Ok(Adder { bits })
    }

    /// Re-initializes every full adder.
    pub fn init(&mut self) -> Result<()> {
        for bit in &mut self.bits {
            bit.init()?;
        }
        Ok(())
    }

    /// Computes `a + b + cin`, one bit at a time starting from bit 0.
    ///
    /// # Errors
    ///
    /// Returns [NetworkError::WidthMismatch] if `a` or `b` is not exactly [width](Adder::width) bits long.
    pub fn compute(&mut self, a: &[LogicLevel], b: &[LogicLevel], cin: LogicLevel) -> Result<()> {
        for operand in [a, b].iter() {
            if operand.len() != self.bits.len() {
                return Err(NetworkError::WidthMismatch {
                    expected: self.bits.len(),
                    got: operand.len(),
                });
            }
        }

        let mut carry = cin;
        for (i, bit) in self.bits.iter_mut().enumerate() {
            bit.compute(a[i], b[i], carry)?;
            carry = bit.carry();
            trace!(bit = i, sum = %bit.sum(), %carry, "adder bit computed");
        }
        Ok(())
    }

    /// Computes `a + b + cin` on the lowest [width](Adder::width) bits of `a` and `b`
    /// and returns the sum including the carry out as the top bit.
    ///
    /// Returns Ok(None) if any output is undefined, which can't happen with defined inputs.
    ///
    /// # Errors
    ///
    /// Returns [NetworkError::AdderTooWide] if the adder is wider than [MAX_U64_WIDTH] bits,
    /// [NetworkError::OperandOverflow] if `a` or `b` doesn't fit in [width](Adder::width) bits.
    pub fn compute_u64(&mut self, a: u64, b: u64, cin: bool) -> Result<Option<u64>> {
        let width = self.width();
        if width > MAX_U64_WIDTH {
            return Err(NetworkError::AdderTooWide {
                width,
                max: MAX_U64_WIDTH,
            });
        }
        for value in [a, b].iter().copied() {
            if value >> width != 0 {
                return Err(NetworkError::OperandOverflow { width, value });
            }
        }
        self.compute(&levels(a, width), &levels(b, width), cin.into())?;

        let mut out = self.sum();
        out.push(self.carry());
        Ok(collect_u64(&out))
    }

    /// Returns the sum bits, least significant first.
    pub fn sum(&self) -> Vec<LogicLevel> {
        self.bits.iter().map(FullAdder::sum).collect()
    }

    /// Returns the sum bit at index `bit`, or None if `bit` >= [width](Adder::width).
    pub fn sum_bit(&self, bit: usize) -> Option<LogicLevel> {
        self.bits.get(bit).map(FullAdder::sum)
    }

    /// Returns the carry out of the most significant bit.
    pub fn carry(&self) -> LogicLevel {
        // Never empty, checked at construction.
        self.bits
            .last()
            .map_or(LogicLevel::Undefined, FullAdder::carry)
    }

    /// Returns the number of bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use LogicLevel::*;

    #[test]
    fn test_five_plus_five() {
        let mut adder = Adder::new(3).unwrap();
        adder
            .compute(&[High, Low, High], &[High, Low, High], Low)
            .unwrap();
        assert_eq!(adder.sum(), vec![Low, High, Low]);
        assert_eq!(adder.carry(), High);
        assert_eq!(adder.sum_bit(1), Some(High));
        assert_eq!(adder.sum_bit(3), None);
    }

    #[test]
    fn test_carry_ripples() {
        let mut adder = Adder::new(4).unwrap();
        assert_eq!(adder.compute_u64(0b1111, 0, true).unwrap(), Some(0b10000));
        assert_eq!(adder.sum(), vec![Low; 4]);
        assert_eq!(adder.carry(), High);
    }

    #[test]
    fn test_width_mismatch() {
        let mut adder = Adder::new(2).unwrap();
        assert_eq!(
            adder.compute(&[High, Low], &[High], Low),
            Err(NetworkError::WidthMismatch {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(Adder::new(0).unwrap_err(), NetworkError::EmptyAdder);
    }

    #[test]
    fn test_operand_overflow() {
        let mut adder = Adder::new(3).unwrap();
        assert_eq!(
            adder.compute_u64(9, 1, false),
            Err(NetworkError::OperandOverflow { width: 3, value: 9 })
        );
        assert_eq!(
            adder.compute_u64(7, 8, true),
            Err(NetworkError::OperandOverflow { width: 3, value: 8 })
        );
        assert_eq!(adder.compute_u64(7, 7, true).unwrap(), Some(15));
    }

    #[test]
    fn test_too_wide_for_u64() {
        let mut adder = Adder::new(MAX_U64_WIDTH + 1).unwrap();
        assert_eq!(
            adder.compute_u64(1, 1, false),
            Err(NetworkError::AdderTooWide {
                width: 64,
                max: MAX_U64_WIDTH
            })
        );

        let mut adder = Adder::new(MAX_U64_WIDTH).unwrap();
        let max = u64::MAX >> 1;
        assert_eq!(adder.compute_u64(max, max, true).unwrap(), Some(u64::MAX));
    }

    #[test]
    fn test_before_compute() {
        let adder = Adder::new(2).unwrap();
        assert_eq!(adder.sum(), vec![Undefined, Undefined]);
        assert_eq!(adder.carry(), Low);
    }

    proptest! {
        #[test]
        fn prop_matches_integer_addition(a in 0u64..256, b in 0u64..256, cin: bool) {
            let mut adder = Adder::new(8).unwrap();
            let expected = a + b + cin as u64;
            prop_assert_eq!(adder.compute_u64(a, b, cin).unwrap(), Some(expected));
        }

        #[test]
        fn prop_recompute_is_idempotent(a in 0u64..16, b in 0u64..16) {
            let mut adder = Adder::new(4).unwrap();
            let first = adder.compute_u64(a, b, false).unwrap();
            let first_bits = adder.sum();
            let second = adder.compute_u64(a, b, false).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first_bits, adder.sum());
        }
    }
}
