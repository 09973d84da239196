//! Fixed-point decimal data types
//!
//! This crate defines the decimal type family of a columnar engine:
//! - [`DataTypeDecimal`], the descriptor generic over the backing integer
//! - [`DecimalType`] and [`DecimalValue`], width-erased types and values
//! - literal parsing with precision and overflow checks
//! - text and binary serialization
//! - [`DataTypeFactory`], resolving declarations like `Decimal(10, 2)` to types

pub mod data_type;
pub mod decimal;
pub mod factory;
pub mod native;
pub mod read_text;
pub mod registration;
pub mod serialization;

pub use data_type::*;
pub use decimal::*;
pub use factory::{Case, Creator, DataTypeFactory};
pub use native::{scale_multiplier, DecimalWidth, NativeDecimal};
pub use read_text::{apply_unread_scale, parse_decimal_text, read_decimal_text};
pub use registration::register_data_type_decimal;
pub use serialization::{FormatSettings, Serialization, SerializationDecimal, SerializationPtr};

pub use ethnum::I256;
