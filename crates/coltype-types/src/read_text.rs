//! Reading decimal literals from text
//!
//! Parsing happens in two steps. [`read_decimal_text`] reads the digits and
//! enforces the precision (too many significant digits is an error). It returns
//! the raw integer plus the part of the scale the literal did not spell out.
//! [`apply_unread_scale`] then multiplies that missing scale back in, and is the
//! only place a value can overflow the backing integer.

use crate::native::{scale_multiplier, NativeDecimal};
use coltype_diagnostics::{Result, TypeError, DEC0003, DEC0200, DEC0201};
use log::trace;

fn cannot_parse(text: &str, reason: &str) -> TypeError {
    TypeError::value(DEC0003, format!("Cannot parse decimal literal: {reason}")).with_context(text)
}

fn overflow(text: &str) -> TypeError {
    TypeError::value(DEC0200, "Decimal math overflow").with_context(text)
}

/// Read the digits of `text` as a decimal with the given precision and scale
///
/// Returns the raw integer together with the unread scale: the number of
/// powers of ten still owed to bring the raw value to `scale` digits after the
/// point. `"1.5"` read with scale 4 gives `(15, 3)`.
///
/// Accepted syntax is `[+-]digits[.digits][(e|E)[+-]digits]`; either the
/// integer or the fractional digits may be empty, but not both. Fractional
/// digits beyond the precision are cut off without rounding.
pub fn read_decimal_text<T: NativeDecimal>(text: &str, precision: u32, scale: u32) -> Result<(T, u32)> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut negative = false;
    match bytes.first() {
        Some(b'-') => {
            negative = true;
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }

    let mut x = T::ZERO;
    let mut digits: u32 = 0;
    // Zeros seen but not yet multiplied in, plus the current digit
    let mut places: u32 = 0;
    let mut exponent: i64 = 0;
    let mut leading_zeros = true;
    let mut after_point = false;
    let mut seen_digit = false;

    while pos < bytes.len() {
        let byte = bytes[pos];
        match byte {
            b'.' => {
                if after_point {
                    return Err(cannot_parse(text, "more than one decimal point"));
                }
                after_point = true;
                leading_zeros = false;
            }
            b'0' if leading_zeros => seen_digit = true,
            b'0' if after_point => {
                seen_digit = true;
                places += 1;
            }
            b'0'..=b'9' => {
                seen_digit = true;
                leading_zeros = false;
                places += 1;
                if digits + places > precision {
                    if after_point {
                        pos += 1;
                        continue;
                    }
                    return Err(TypeError::value(
                        DEC0201,
                        format!("Too many digits ({} > {precision}) in decimal value", digits + places),
                    )
                    .with_context(text));
                }
                digits += places;
                if after_point {
                    exponent -= i64::from(places);
                }
                x = scale_multiplier::<T>(places)
                    .and_then(|shift| x.checked_mul(shift))
                    .and_then(|v| v.checked_add(T::from_digit(byte - b'0')))
                    .ok_or_else(|| overflow(text))?;
                places = 0;
            }
            b'e' | b'E' => {
                if !seen_digit {
                    return Err(cannot_parse(text, "exponent without digits"));
                }
                let addition: i32 = text[pos + 1..]
                    .parse()
                    .map_err(|_| cannot_parse(text, "invalid exponent"))?;
                exponent += i64::from(addition);
                break;
            }
            _ => return Err(cannot_parse(text, "unexpected symbol")),
        }
        pos += 1;
    }

    if !seen_digit {
        return Err(cannot_parse(text, "no digits"));
    }
    if negative {
        x = x.checked_neg().ok_or_else(|| overflow(text))?;
    }
    trace!("read {text:?}: raw={x} digits={digits} exponent={exponent} (precision {precision}, scale {scale})");

    if i64::from(digits) + exponent > i64::from(precision) - i64::from(scale) {
        return Err(TypeError::value(
            DEC0201,
            format!(
                "Decimal value is too big: {digits} digits were read: {x}e{exponent}. \
                 Expected to read decimal with scale {scale} and precision {precision}"
            ),
        )
        .with_context(text));
    }

    let shift = i64::from(scale) + exponent;
    if shift < 0 {
        // More fractional digits than the scale keeps; drop the excess
        let divisor_exp = -shift;
        if divisor_exp >= i64::from(T::MAX_PRECISION) {
            return Ok((T::ZERO, 0));
        }
        let divisor = u32::try_from(divisor_exp)
            .ok()
            .and_then(scale_multiplier::<T>)
            .ok_or_else(|| overflow(text))?;
        return Ok((x / divisor, 0));
    }

    let unread_scale = u32::try_from(shift).map_err(|_| overflow(text))?;
    Ok((x, unread_scale))
}

/// Multiply `value` by `10^unread_scale`, failing instead of wrapping around
pub fn apply_unread_scale<T: NativeDecimal>(value: T, unread_scale: u32) -> Result<T> {
    scale_multiplier::<T>(unread_scale)
        .and_then(|multiplier| value.checked_mul(multiplier))
        .ok_or_else(|| TypeError::value(DEC0200, "Decimal math overflow"))
}

/// Parse `text` into the native representation at exactly `scale` digits
pub fn parse_decimal_text<T: NativeDecimal>(text: &str, precision: u32, scale: u32) -> Result<T> {
    let (raw, unread_scale) = read_decimal_text::<T>(text, precision, scale)?;
    apply_unread_scale(raw, unread_scale).map_err(|e| e.with_context(text))
}
