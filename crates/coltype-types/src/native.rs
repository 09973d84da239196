//! Native integer storage for decimal values
//!
//! Each decimal width is backed by a signed integer holding the value scaled by
//! `10^scale`. The [`NativeDecimal`] trait gives the generic descriptor what it
//! needs from that integer: width constants and overflow-checked arithmetic.

use crate::DecimalValue;
use ethnum::I256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::ops::{Div, Neg, Rem};

/// Storage width of a decimal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DecimalWidth {
    Decimal32,
    Decimal64,
    Decimal128,
    Decimal256,
}

impl DecimalWidth {
    /// All widths, narrowest first
    pub const ALL: [DecimalWidth; 4] = [
        DecimalWidth::Decimal32,
        DecimalWidth::Decimal64,
        DecimalWidth::Decimal128,
        DecimalWidth::Decimal256,
    ];

    /// Bits of the backing signed integer
    pub const fn bits(self) -> u32 {
        match self {
            DecimalWidth::Decimal32 => 32,
            DecimalWidth::Decimal64 => 64,
            DecimalWidth::Decimal128 => 128,
            DecimalWidth::Decimal256 => 256,
        }
    }

    /// Number of decimal digits that always fit in the backing integer
    pub const fn max_precision(self) -> u32 {
        match self {
            DecimalWidth::Decimal32 => 9,
            DecimalWidth::Decimal64 => 18,
            DecimalWidth::Decimal128 => 38,
            DecimalWidth::Decimal256 => 76,
        }
    }

    /// Narrowest width able to hold `precision` digits
    pub fn for_precision(precision: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|width| precision <= width.max_precision())
    }

    /// Type family name, e.g. `Decimal64`
    pub const fn family_name(self) -> &'static str {
        match self {
            DecimalWidth::Decimal32 => "Decimal32",
            DecimalWidth::Decimal64 => "Decimal64",
            DecimalWidth::Decimal128 => "Decimal128",
            DecimalWidth::Decimal256 => "Decimal256",
        }
    }
}

impl fmt::Display for DecimalWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family_name())
    }
}

/// Signed integer that can back a decimal type
pub trait NativeDecimal:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    const WIDTH: DecimalWidth;
    const MAX_PRECISION: u32 = Self::WIDTH.max_precision();
    /// Size of the little-endian binary form
    const BYTES: usize;
    const ZERO: Self;
    const ONE: Self;
    const TEN: Self;

    fn from_digit(digit: u8) -> Self;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_neg(self) -> Option<Self>;
    fn is_negative(self) -> bool;

    fn write_le_bytes(self, out: &mut Vec<u8>);
    /// `bytes` must be exactly [`Self::BYTES`] long
    fn read_le_bytes(bytes: &[u8]) -> Option<Self>;

    fn into_value(self) -> DecimalValue;
    fn from_value(value: &DecimalValue) -> Option<Self>;
}

macro_rules! impl_native_decimal {
    ($native:ty, $width:ident) => {
        impl NativeDecimal for $native {
            const WIDTH: DecimalWidth = DecimalWidth::$width;
            const BYTES: usize = std::mem::size_of::<$native>();
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TEN: Self = 10;

            #[inline]
            fn from_digit(digit: u8) -> Self {
                <$native>::from(digit)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$native>::checked_mul(self, rhs)
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$native>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_neg(self) -> Option<Self> {
                <$native>::checked_neg(self)
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            fn write_le_bytes(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn read_le_bytes(bytes: &[u8]) -> Option<Self> {
                bytes.try_into().ok().map(<$native>::from_le_bytes)
            }

            fn into_value(self) -> DecimalValue {
                DecimalValue::$width(self)
            }

            fn from_value(value: &DecimalValue) -> Option<Self> {
                match value {
                    DecimalValue::$width(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

impl_native_decimal!(i32, Decimal32);
impl_native_decimal!(i64, Decimal64);
impl_native_decimal!(i128, Decimal128);

impl NativeDecimal for I256 {
    const WIDTH: DecimalWidth = DecimalWidth::Decimal256;
    const BYTES: usize = 32;
    const ZERO: Self = I256::ZERO;
    const ONE: Self = I256::ONE;
    const TEN: Self = I256::new(10);

    #[inline]
    fn from_digit(digit: u8) -> Self {
        I256::new(i128::from(digit))
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        I256::checked_mul(self, rhs)
    }

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        I256::checked_add(self, rhs)
    }

    #[inline]
    fn checked_neg(self) -> Option<Self> {
        I256::checked_neg(self)
    }

    #[inline]
    fn is_negative(self) -> bool {
        I256::is_negative(self)
    }

    fn write_le_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le_bytes(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(I256::from_le_bytes)
    }

    fn into_value(self) -> DecimalValue {
        DecimalValue::Decimal256(self)
    }

    fn from_value(value: &DecimalValue) -> Option<Self> {
        match value {
            DecimalValue::Decimal256(v) => Some(*v),
            _ => None,
        }
    }
}

/// `10^scale` in the native type, or `None` if it does not fit
pub fn scale_multiplier<T: NativeDecimal>(scale: u32) -> Option<T> {
    (0..scale).try_fold(T::ONE, |acc, _| acc.checked_mul(T::TEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_precision_strictly_increasing() {
        let precisions: Vec<u32> = DecimalWidth::ALL.iter().map(|w| w.max_precision()).collect();
        assert_eq!(precisions, vec![9, 18, 38, 76]);
        assert!(precisions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_for_precision_picks_narrowest() {
        assert_eq!(DecimalWidth::for_precision(1), Some(DecimalWidth::Decimal32));
        assert_eq!(DecimalWidth::for_precision(9), Some(DecimalWidth::Decimal32));
        assert_eq!(DecimalWidth::for_precision(10), Some(DecimalWidth::Decimal64));
        assert_eq!(DecimalWidth::for_precision(38), Some(DecimalWidth::Decimal128));
        assert_eq!(DecimalWidth::for_precision(39), Some(DecimalWidth::Decimal256));
        assert_eq!(DecimalWidth::for_precision(77), None);
    }

    #[test]
    fn test_max_precision_multiplier_fits() {
        assert_eq!(scale_multiplier::<i32>(9), Some(1_000_000_000));
        assert_eq!(scale_multiplier::<i32>(10), None);
        assert_eq!(scale_multiplier::<i64>(18), Some(10i64.pow(18)));
        assert_eq!(scale_multiplier::<i64>(19), None);
        assert_eq!(scale_multiplier::<i128>(38), Some(10i128.pow(38)));
        assert_eq!(scale_multiplier::<i128>(39), None);
        assert!(scale_multiplier::<I256>(76).is_some());
        assert!(scale_multiplier::<I256>(77).is_none());
    }

    #[test]
    fn test_byte_round_trip_uses_full_width() {
        let mut out = Vec::new();
        (-2i64).write_le_bytes(&mut out);
        assert_eq!(out.len(), <i64 as NativeDecimal>::BYTES);
        assert_eq!(<i64 as NativeDecimal>::read_le_bytes(&out), Some(-2));
        assert_eq!(<i64 as NativeDecimal>::read_le_bytes(&out[..4]), None);

        let mut out = Vec::new();
        I256::new(-7).write_le_bytes(&mut out);
        assert_eq!(out.len(), 32);
        assert_eq!(<I256 as NativeDecimal>::read_le_bytes(&out), Some(I256::new(-7)));
    }

    #[test]
    fn test_value_width_must_match() {
        assert_eq!(i32::from_value(&DecimalValue::Decimal32(5)), Some(5));
        assert_eq!(i64::from_value(&DecimalValue::Decimal32(5)), None);
    }
}
