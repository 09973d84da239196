//! The fixed-point decimal data type

use crate::native::{scale_multiplier, DecimalWidth, NativeDecimal};
use crate::read_text::parse_decimal_text;
use crate::serialization::{SerializationDecimal, SerializationPtr};
use crate::DecimalType;
use coltype_diagnostics::{Result, TypeError, DEC0103};
use ethnum::I256;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

/// Widest precision MySQL accepts for `DECIMAL(M, D)`
pub const SQL_COMPATIBLE_MAX_PRECISION: u32 = 65;
/// Widest scale MySQL accepts for `DECIMAL(M, D)`
pub const SQL_COMPATIBLE_MAX_SCALE: u32 = 30;

/// Fixed-point decimal type backed by the native integer `T`
///
/// Values are stored as `T` scaled by `10^scale`. Precision is the maximum
/// number of significant digits, `1 ..= T::MAX_PRECISION`; scale is the number
/// of digits after the point, `0 ..= precision`.
///
/// **Equality ignores precision.** Two descriptors are equal when they have the
/// same width and the same scale, so `Decimal(10, 2)` and `Decimal(18, 2)` (both
/// `Decimal64`) compare equal: they are interchangeable for scale-aligned
/// arithmetic. `Hash` follows the same rule.
#[derive(Clone, Copy)]
pub struct DataTypeDecimal<T: NativeDecimal> {
    precision: u32,
    scale: u32,
    native: PhantomData<T>,
}

pub type DataTypeDecimal32 = DataTypeDecimal<i32>;
pub type DataTypeDecimal64 = DataTypeDecimal<i64>;
pub type DataTypeDecimal128 = DataTypeDecimal<i128>;
pub type DataTypeDecimal256 = DataTypeDecimal<I256>;

impl<T: NativeDecimal> DataTypeDecimal<T> {
    /// Create a descriptor, checking `1 <= precision <= max` and `scale <= precision`
    pub fn new(precision: u32, scale: u32) -> Result<Self> {
        if precision < 1 || precision > T::MAX_PRECISION {
            return Err(TypeError::declaration(
                DEC0103,
                format!(
                    "Precision {precision} is out of bounds (precision range: [1, {}])",
                    T::MAX_PRECISION
                ),
            ));
        }
        if scale > precision {
            return Err(TypeError::declaration(
                DEC0103,
                format!("Scale {scale} is out of bounds (max scale: {precision})"),
            ));
        }
        Ok(Self::from_parts(precision, scale))
    }

    /// Caller guarantees the invariants checked by [`Self::new`]
    pub(crate) const fn from_parts(precision: u32, scale: u32) -> Self {
        Self {
            precision,
            scale,
            native: PhantomData,
        }
    }

    /// Widest precision of this width
    pub const fn max_precision() -> u32 {
        T::MAX_PRECISION
    }

    pub const fn width() -> DecimalWidth {
        T::WIDTH
    }

    pub const fn precision(&self) -> u32 {
        self.precision
    }

    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Canonical name, `Decimal(P, S)`
    pub fn name(&self) -> String {
        format!("Decimal({}, {})", self.precision, self.scale)
    }

    /// Name understood by other SQL systems
    ///
    /// `DECIMAL(P, S)` while precision and scale stay within MySQL's limits
    /// (65 and 30), `TEXT` beyond them.
    pub fn sql_compatible_name(&self) -> String {
        if self.precision > SQL_COMPATIBLE_MAX_PRECISION || self.scale > SQL_COMPATIBLE_MAX_SCALE {
            return "TEXT".to_string();
        }
        format!("DECIMAL({}, {})", self.precision, self.scale)
    }

    /// Same scale at a width that leaves room for arithmetic
    ///
    /// Widths up to 128 bits become `Decimal(38, S)` on `Decimal128`; 256-bit
    /// types become `Decimal(76, S)` on `Decimal256`. Never narrows.
    pub fn promote_numeric_type(&self) -> DecimalType {
        if T::WIDTH <= DecimalWidth::Decimal128 {
            DecimalType::Decimal128(DataTypeDecimal128::from_parts(
                DataTypeDecimal128::max_precision(),
                self.scale,
            ))
        } else {
            DecimalType::Decimal256(DataTypeDecimal256::from_parts(
                DataTypeDecimal256::max_precision(),
                self.scale,
            ))
        }
    }

    /// Parse a literal into the native value at this type's scale
    ///
    /// `"123.45"` as `Decimal(10, 4)` gives `1234500`.
    pub fn parse_from_string(&self, text: &str) -> Result<T> {
        parse_decimal_text::<T>(text, self.precision, self.scale)
    }

    pub fn default_serialization(&self) -> SerializationPtr {
        Arc::new(SerializationDecimal::for_type(*self))
    }

    /// `10^scale`
    pub fn scale_multiplier(&self) -> T {
        match scale_multiplier::<T>(self.scale) {
            Some(multiplier) => multiplier,
            None => unreachable!("scale {} exceeds {} digits", self.scale, T::MAX_PRECISION),
        }
    }

    /// Integer part of a stored value, truncated toward zero
    pub fn whole_part(&self, x: T) -> T {
        x / self.scale_multiplier()
    }

    /// Digits after the point of a stored value, without sign
    pub fn fractional_part(&self, x: T) -> T {
        let rem = x % self.scale_multiplier();
        if rem.is_negative() { -rem } else { rem }
    }

    pub fn default_value(&self) -> T {
        T::ZERO
    }
}

impl<T: NativeDecimal, U: NativeDecimal> PartialEq<DataTypeDecimal<U>> for DataTypeDecimal<T> {
    fn eq(&self, other: &DataTypeDecimal<U>) -> bool {
        T::WIDTH == U::WIDTH && self.scale == other.scale
    }
}

impl<T: NativeDecimal> Eq for DataTypeDecimal<T> {}

impl<T: NativeDecimal> Hash for DataTypeDecimal<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        T::WIDTH.hash(state);
        self.scale.hash(state);
    }
}

impl<T: NativeDecimal> fmt::Debug for DataTypeDecimal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTypeDecimal")
            .field("width", &T::WIDTH)
            .field("precision", &self.precision)
            .field("scale", &self.scale)
            .finish()
    }
}

impl<T: NativeDecimal> fmt::Display for DataTypeDecimal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, {})", self.precision, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invariants() {
        assert!(DataTypeDecimal32::new(9, 9).is_ok());
        assert_eq!(DataTypeDecimal32::new(10, 0).unwrap_err().code(), DEC0103);
        assert_eq!(DataTypeDecimal64::new(0, 0).unwrap_err().code(), DEC0103);
        assert_eq!(DataTypeDecimal64::new(5, 6).unwrap_err().code(), DEC0103);
        assert!(DataTypeDecimal256::new(76, 76).is_ok());
    }

    #[test]
    fn test_equality_ignores_precision() {
        let narrow = DataTypeDecimal32::new(5, 2).unwrap();
        let wide = DataTypeDecimal32::new(9, 2).unwrap();
        assert_eq!(narrow, wide);
        assert_ne!(narrow, DataTypeDecimal32::new(9, 3).unwrap());
        assert_ne!(narrow, DataTypeDecimal64::new(9, 2).unwrap());

        let set: HashSet<_> = [narrow, wide].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_whole_and_fractional_parts() {
        let ty = DataTypeDecimal64::new(10, 2).unwrap();
        assert_eq!(ty.scale_multiplier(), 100);
        assert_eq!(ty.whole_part(-12_345), -123);
        assert_eq!(ty.fractional_part(-12_345), 45);
        assert_eq!(ty.default_value(), 0);
    }

    #[test]
    fn test_debug_shows_width() {
        let ty = DataTypeDecimal128::new(20, 4).unwrap();
        assert_eq!(
            format!("{ty:?}"),
            "DataTypeDecimal { width: Decimal128, precision: 20, scale: 4 }"
        );
        assert_eq!(ty.to_string(), "Decimal(20, 4)");
    }
}
