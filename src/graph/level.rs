use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{self, Display, Formatter};
use strum_macros::EnumIter;

/// Tri-state level of a logic line.
///
/// [Undefined](LogicLevel::Undefined) models an unresolved line, not a third voltage.
/// The numeric values are the ones printed in truth table reports.
///
/// # Example
/// ```
/// # use trilogic::LogicLevel;
/// assert_eq!(i8::from(LogicLevel::Undefined), -1);
/// assert_eq!(LogicLevel::from(true), LogicLevel::High);
/// assert_eq!(LogicLevel::High.to_string(), "1");
/// ```
#[repr(i8)]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive, EnumIter,
)]
pub enum LogicLevel {
    Undefined = -1,
    Low = 0,
    High = 1,
}
use LogicLevel::*;

impl LogicLevel {
    /// Returns true if `self` is [High].
    #[inline(always)]
    pub fn is_high(&self) -> bool {
        *self == High
    }

    /// Returns true if `self` is [Low].
    #[inline(always)]
    pub fn is_low(&self) -> bool {
        *self == Low
    }

    /// Returns true if `self` is not [Undefined].
    #[inline(always)]
    pub fn is_defined(&self) -> bool {
        *self != Undefined
    }

    /// Returns Some(true) for [High], Some(false) for [Low] and None for [Undefined].
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            High => Some(true),
            Low => Some(false),
            Undefined => None,
        }
    }
}

impl Default for LogicLevel {
    fn default() -> Self {
        Undefined
    }
}

impl From<bool> for LogicLevel {
    fn from(b: bool) -> Self {
        if b {
            High
        } else {
            Low
        }
    }
}

impl Display for LogicLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i8::from(*self))
    }
}

/// Returns the little endian [LogicLevel]s of the lowest `width` bits of `value`.
///
/// # Example
/// ```
/// # use trilogic::{levels, LogicLevel::*};
/// assert_eq!(levels(0b110, 3), vec![Low, High, High]);
/// ```
pub fn levels(value: u64, width: usize) -> Vec<LogicLevel> {
    crate::data_structures::BitIter::new(value, width)
        .map(LogicLevel::from)
        .collect()
}

/// Collects little endian `levels` back into a [u64].
///
/// Returns None if any level is [Undefined] or there are more than 64 levels.
///
/// # Example
/// ```
/// # use trilogic::{collect_u64, LogicLevel::*};
/// assert_eq!(collect_u64(&[Low, High, High]), Some(6));
/// assert_eq!(collect_u64(&[Low, Undefined]), None);
/// ```
pub fn collect_u64(levels: &[LogicLevel]) -> Option<u64> {
    if levels.len() > 64 {
        return None;
    }
    let mut output = 0;
    let mut mask = 1;
    for level in levels {
        if level.to_bool()? {
            output |= mask
        }
        mask <<= 1;
    }
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numeric_round_trip() {
        for level in LogicLevel::iter() {
            assert_eq!(LogicLevel::try_from(i8::from(level)).unwrap(), level);
        }
        assert!(LogicLevel::try_from(2i8).is_err());
    }

    #[test]
    fn test_default_is_undefined() {
        assert_eq!(LogicLevel::default(), Undefined);
        assert_eq!(Undefined.to_bool(), None);
        assert!(!Undefined.is_defined());
    }

    #[test]
    fn test_collect() {
        assert_eq!(collect_u64(&levels(10, 4)), Some(10));
        assert_eq!(collect_u64(&[]), Some(0));
        assert_eq!(collect_u64(&vec![Low; 65]), None);
    }
}
