//! Text and binary encodings of decimal values

use crate::decimal::DataTypeDecimal;
use crate::native::NativeDecimal;
use crate::DecimalValue;
use coltype_diagnostics::{Result, TypeError, DEC0202, DEC0400};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Output options for text serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Keep zeros at the end of the fractional part, `1.50` rather than `1.5`
    pub decimal_trailing_zeros: bool,
}

/// Encoder/decoder for the values of one data type
pub trait Serialization: fmt::Debug + Send + Sync {
    fn serialize_text(&self, value: &DecimalValue, settings: &FormatSettings) -> Result<String>;
    fn deserialize_text(&self, text: &str) -> Result<DecimalValue>;
    /// Append the fixed-size little-endian form of `value` to `out`
    fn serialize_binary(&self, value: &DecimalValue, out: &mut Vec<u8>) -> Result<()>;
    fn deserialize_binary(&self, bytes: &[u8]) -> Result<DecimalValue>;
}

pub type SerializationPtr = Arc<dyn Serialization>;

/// Serialization of `DataTypeDecimal<T>` values
pub struct SerializationDecimal<T: NativeDecimal> {
    ty: DataTypeDecimal<T>,
}

impl<T: NativeDecimal> SerializationDecimal<T> {
    /// Serialization for `Decimal(precision, scale)` stored as `T`
    ///
    /// Fails with the same bounds errors as [`DataTypeDecimal::new`].
    pub fn new(precision: u32, scale: u32) -> Result<Self> {
        DataTypeDecimal::new(precision, scale).map(Self::for_type)
    }

    pub(crate) fn for_type(ty: DataTypeDecimal<T>) -> Self {
        Self { ty }
    }

    fn native(&self, value: &DecimalValue) -> Result<T> {
        T::from_value(value).ok_or_else(|| {
            TypeError::system(
                DEC0400,
                format!("Expected {} value, got {}", T::WIDTH, value.width()),
            )
        })
    }

    /// Render `x` with `scale` digits after the point
    pub fn format(&self, x: T, trailing_zeros: bool) -> String {
        let ty = &self.ty;
        let scale = ty.scale() as usize;
        let whole = ty.whole_part(x).to_string();
        let mut out = String::with_capacity(whole.len() + scale + 2);
        if x.is_negative() {
            out.push('-');
        }
        out.push_str(whole.trim_start_matches('-'));
        if scale == 0 {
            return out;
        }

        let digits = ty.fractional_part(x).to_string();
        let mut fraction = "0".repeat(scale.saturating_sub(digits.len()));
        fraction.push_str(&digits);
        if !trailing_zeros {
            fraction.truncate(fraction.trim_end_matches('0').len());
        }
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out
    }
}

impl<T: NativeDecimal> Serialization for SerializationDecimal<T> {
    fn serialize_text(&self, value: &DecimalValue, settings: &FormatSettings) -> Result<String> {
        let x = self.native(value)?;
        Ok(self.format(x, settings.decimal_trailing_zeros))
    }

    fn deserialize_text(&self, text: &str) -> Result<DecimalValue> {
        self.ty.parse_from_string(text).map(T::into_value)
    }

    fn serialize_binary(&self, value: &DecimalValue, out: &mut Vec<u8>) -> Result<()> {
        self.native(value)?.write_le_bytes(out);
        Ok(())
    }

    fn deserialize_binary(&self, bytes: &[u8]) -> Result<DecimalValue> {
        T::read_le_bytes(bytes).map(T::into_value).ok_or_else(|| {
            TypeError::value(
                DEC0202,
                format!(
                    "Cannot read binary {} value: expected {} bytes, got {}",
                    T::WIDTH,
                    T::BYTES,
                    bytes.len()
                ),
            )
        })
    }
}

impl<T: NativeDecimal> fmt::Debug for SerializationDecimal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializationDecimal")
            .field("width", &T::WIDTH)
            .field("precision", &self.ty.precision())
            .field("scale", &self.ty.scale())
            .finish()
    }
}
