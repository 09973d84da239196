//! Decimal entries of the data type factory

use crate::decimal::DataTypeDecimal;
use crate::factory::{Case, Creator, DataTypeFactory};
use crate::native::NativeDecimal;
use crate::{create_decimal, DataTypePtr, DecimalType};
use coltype_ast::{Literal, Spanned, TypeArgument, TypeArguments};
use coltype_diagnostics::{Result, TypeError, DEC0101, DEC0102, DEC0103};
use ethnum::I256;
use std::sync::Arc;

const DEFAULT_PRECISION: u64 = 10;
const DEFAULT_SCALE: u64 = 0;

fn literal(arg: &Spanned<TypeArgument>) -> Option<&Literal> {
    arg.inner.as_literal()
}

fn negative_scale() -> TypeError {
    TypeError::declaration(
        DEC0103,
        "Negative scales and scales larger than precision are not supported",
    )
}

/// Scale argument: any integer literal, signed or unsigned
fn scale_argument(arg: &Spanned<TypeArgument>, invalid: &str) -> Result<u64> {
    let value = literal(arg)
        .filter(|lit| lit.is_integer())
        .and_then(Literal::as_i128)
        .ok_or_else(|| TypeError::declaration(DEC0102, invalid))?;
    u64::try_from(value).map_err(|_| negative_scale())
}

/// `Decimal`, `Decimal()`, `Decimal(P)` or `Decimal(P, S)`
///
/// Precision must be an unsigned integer literal. Without arguments the type is
/// `Decimal(10, 0)`.
pub fn create(arguments: Option<&TypeArguments>) -> Result<DataTypePtr> {
    let (precision, scale) = match arguments.map(|args| args.as_slice()) {
        None | Some([]) => (DEFAULT_PRECISION, DEFAULT_SCALE),
        Some([precision]) => (precision_argument(precision)?, DEFAULT_SCALE),
        Some([precision, scale]) => (
            precision_argument(precision)?,
            scale_argument(scale, "Decimal argument scale is invalid")?,
        ),
        Some(_) => {
            return Err(TypeError::declaration(
                DEC0101,
                "Decimal data type family must have precision and optional scale arguments",
            ));
        }
    };
    create_decimal(precision, scale).map(Arc::new)
}

fn precision_argument(arg: &Spanned<TypeArgument>) -> Result<u64> {
    match literal(arg) {
        Some(Literal::UInt64(precision)) => Ok(*precision),
        _ => Err(TypeError::declaration(
            DEC0102,
            "Decimal argument precision is invalid",
        )),
    }
}

/// `Decimal32(S)` .. `Decimal256(S)`: the width's full precision with scale `S`
pub fn create_exact<T>(arguments: Option<&TypeArguments>) -> Result<DataTypePtr>
where
    T: NativeDecimal,
    DecimalType: From<DataTypeDecimal<T>>,
{
    let [scale] = arguments.map(|args| args.as_slice()).unwrap_or_default() else {
        return Err(TypeError::declaration(
            DEC0101,
            "Decimal32 | Decimal64 | Decimal128 | Decimal256 data type family must have exactly one arguments: scale",
        ));
    };
    let scale = scale_argument(
        scale,
        "Decimal32 | Decimal64 | Decimal128 | Decimal256 data type family must have a one number as its argument",
    )?;
    let scale = u32::try_from(scale).map_err(|_| {
        TypeError::declaration(
            DEC0103,
            format!("Scale {scale} is out of bounds (max scale: {})", T::MAX_PRECISION),
        )
    })?;
    let ty = DataTypeDecimal::<T>::new(T::MAX_PRECISION, scale)?;
    Ok(Arc::new(ty.into()))
}

/// Register `Decimal`, `Decimal32` .. `Decimal256` and the `DEC`, `NUMERIC`
/// and `FIXED` aliases, all case-insensitive
pub fn register_data_type_decimal(factory: &mut DataTypeFactory) -> Result<()> {
    let exact: [(&str, Creator); 4] = [
        ("Decimal32", Arc::new(create_exact::<i32>)),
        ("Decimal64", Arc::new(create_exact::<i64>)),
        ("Decimal128", Arc::new(create_exact::<i128>)),
        ("Decimal256", Arc::new(create_exact::<I256>)),
    ];
    for (name, creator) in exact {
        factory.register_data_type(name, creator, Case::Insensitive)?;
    }

    factory.register_data_type("Decimal", Arc::new(create), Case::Insensitive)?;
    for alias in ["DEC", "NUMERIC", "FIXED"] {
        factory.register_alias(alias, "Decimal", Case::Insensitive)?;
    }
    Ok(())
}
