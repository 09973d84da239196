//! Width-erased decimal types and values

use crate::decimal::{
    DataTypeDecimal, DataTypeDecimal128, DataTypeDecimal256, DataTypeDecimal32,
    DataTypeDecimal64,
};
use crate::native::{DecimalWidth, NativeDecimal};
use crate::serialization::SerializationPtr;
use coltype_diagnostics::{Result, TypeError, DEC0103};
use ethnum::I256;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a resolved data type
pub type DataTypePtr = Arc<DecimalType>;

/// A decimal data type of any width
///
/// Equality follows [`DataTypeDecimal`]: same width and same scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalType {
    Decimal32(DataTypeDecimal32),
    Decimal64(DataTypeDecimal64),
    Decimal128(DataTypeDecimal128),
    Decimal256(DataTypeDecimal256),
}

macro_rules! with_decimal_type {
    ($self:expr, $ty:ident => $body:expr) => {
        match $self {
            DecimalType::Decimal32($ty) => $body,
            DecimalType::Decimal64($ty) => $body,
            DecimalType::Decimal128($ty) => $body,
            DecimalType::Decimal256($ty) => $body,
        }
    };
}

impl DecimalType {
    pub const fn width(&self) -> DecimalWidth {
        match self {
            Self::Decimal32(_) => DecimalWidth::Decimal32,
            Self::Decimal64(_) => DecimalWidth::Decimal64,
            Self::Decimal128(_) => DecimalWidth::Decimal128,
            Self::Decimal256(_) => DecimalWidth::Decimal256,
        }
    }

    pub fn precision(&self) -> u32 {
        with_decimal_type!(self, ty => ty.precision())
    }

    pub fn scale(&self) -> u32 {
        with_decimal_type!(self, ty => ty.scale())
    }

    pub const fn max_precision(&self) -> u32 {
        self.width().max_precision()
    }

    /// Canonical name, `Decimal(P, S)`
    pub fn name(&self) -> String {
        with_decimal_type!(self, ty => ty.name())
    }

    pub fn sql_compatible_name(&self) -> String {
        with_decimal_type!(self, ty => ty.sql_compatible_name())
    }

    pub fn promote_numeric_type(&self) -> DecimalType {
        with_decimal_type!(self, ty => ty.promote_numeric_type())
    }

    pub fn parse_from_string(&self, text: &str) -> Result<DecimalValue> {
        with_decimal_type!(self, ty => ty.parse_from_string(text).map(NativeDecimal::into_value))
    }

    pub fn default_serialization(&self) -> SerializationPtr {
        with_decimal_type!(self, ty => ty.default_serialization())
    }

    pub fn default_value(&self) -> DecimalValue {
        with_decimal_type!(self, ty => ty.default_value().into_value())
    }
}

impl fmt::Display for DecimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_decimal_type!(self, ty => fmt::Display::fmt(ty, f))
    }
}

macro_rules! impl_from_descriptor {
    ($native:ty, $variant:ident) => {
        impl From<DataTypeDecimal<$native>> for DecimalType {
            fn from(ty: DataTypeDecimal<$native>) -> Self {
                Self::$variant(ty)
            }
        }
    };
}

impl_from_descriptor!(i32, Decimal32);
impl_from_descriptor!(i64, Decimal64);
impl_from_descriptor!(i128, Decimal128);
impl_from_descriptor!(I256, Decimal256);

/// A stored decimal: the native integer scaled by `10^scale`
///
/// The scale itself lives in the type, so `Decimal64(12345)` reads as `123.45`
/// only next to a type of scale 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalValue {
    Decimal32(i32),
    Decimal64(i64),
    Decimal128(i128),
    Decimal256(I256),
}

impl DecimalValue {
    pub const fn width(&self) -> DecimalWidth {
        match self {
            Self::Decimal32(_) => DecimalWidth::Decimal32,
            Self::Decimal64(_) => DecimalWidth::Decimal64,
            Self::Decimal128(_) => DecimalWidth::Decimal128,
            Self::Decimal256(_) => DecimalWidth::Decimal256,
        }
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal32(v) => write!(f, "{v}"),
            Self::Decimal64(v) => write!(f, "{v}"),
            Self::Decimal128(v) => write!(f, "{v}"),
            Self::Decimal256(v) => write!(f, "{v}"),
        }
    }
}

/// Decimal type of the narrowest width that holds `precision` digits
pub fn create_decimal(precision: u64, scale: u64) -> Result<DecimalType> {
    let max = u64::from(DecimalWidth::Decimal256.max_precision());
    if precision < 1 || precision > max {
        return Err(TypeError::declaration(
            DEC0103,
            format!("Wrong precision: it must be between 1 and {max}"),
        ));
    }
    if scale > precision {
        return Err(TypeError::declaration(
            DEC0103,
            "Negative scales and scales larger than precision are not supported",
        ));
    }

    // Both fit in u32 after the checks above
    let (precision, scale) = (precision as u32, scale as u32);
    let ty = match DecimalWidth::for_precision(precision) {
        Some(DecimalWidth::Decimal32) => DataTypeDecimal32::from_parts(precision, scale).into(),
        Some(DecimalWidth::Decimal64) => DataTypeDecimal64::from_parts(precision, scale).into(),
        Some(DecimalWidth::Decimal128) => DataTypeDecimal128::from_parts(precision, scale).into(),
        Some(DecimalWidth::Decimal256) | None => {
            DataTypeDecimal256::from_parts(precision, scale).into()
        }
    };
    debug!("created {ty:?} for Decimal({precision}, {scale})");
    Ok(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_decimal_picks_width() {
        let cases = [
            (1, DecimalWidth::Decimal32),
            (9, DecimalWidth::Decimal32),
            (10, DecimalWidth::Decimal64),
            (18, DecimalWidth::Decimal64),
            (19, DecimalWidth::Decimal128),
            (38, DecimalWidth::Decimal128),
            (39, DecimalWidth::Decimal256),
            (76, DecimalWidth::Decimal256),
        ];
        for (precision, width) in cases {
            let ty = create_decimal(precision, 0).unwrap();
            assert_eq!(ty.width(), width, "precision {precision}");
            assert_eq!(ty.precision() as u64, precision);
        }
    }

    #[test]
    fn test_create_decimal_rejects_bad_arguments() {
        let err = create_decimal(0, 0).unwrap_err();
        assert_eq!(err.code(), DEC0103);
        assert_eq!(err.message(), "Wrong precision: it must be between 1 and 76");

        assert!(create_decimal(77, 0).is_err());

        let err = create_decimal(5, 6).unwrap_err();
        assert_eq!(
            err.message(),
            "Negative scales and scales larger than precision are not supported"
        );
    }

    #[test]
    fn test_dispatch_matches_descriptor() {
        let ty = create_decimal(12, 3).unwrap();
        assert_eq!(ty.name(), "Decimal(12, 3)");
        assert_eq!(ty.to_string(), "Decimal(12, 3)");
        assert_eq!(ty.max_precision(), 18);
        assert_eq!(ty.parse_from_string("1.5").unwrap(), DecimalValue::Decimal64(1500));
        assert_eq!(ty.default_value(), DecimalValue::Decimal64(0));
    }

    #[test]
    fn test_value_display_is_raw() {
        assert_eq!(DecimalValue::Decimal256(I256::new(-42)).to_string(), "-42");
        assert_eq!(DecimalValue::Decimal32(7).width(), DecimalWidth::Decimal32);
    }
}
