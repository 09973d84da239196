//! Parsing benchmarks using divan
//!
//! Declaration resolution and literal parsing across the decimal widths.

use coltype::{DataTypeFactory, DecimalType, create_decimal, parse_type_declaration};

fn main() {
    divan::main();
}

// === Declaration Benchmarks ===

mod declarations {
    use super::*;

    #[divan::bench]
    fn parse_bare_name(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_type_declaration(divan::black_box("Decimal")));
    }

    #[divan::bench]
    fn parse_with_arguments(bencher: divan::Bencher) {
        bencher.bench_local(|| parse_type_declaration(divan::black_box("Decimal(38, 10)")));
    }

    #[divan::bench(args = ["Decimal(10, 2)", "numeric(20, 5)", "Decimal256(40)"])]
    fn resolve(bencher: divan::Bencher, declaration: &str) {
        let factory = DataTypeFactory::with_decimal_types().unwrap();
        bencher.bench_local(|| factory.get(divan::black_box(declaration)));
    }
}

// === Literal Benchmarks ===

mod literals {
    use super::*;

    fn decimal(precision: u64, scale: u64) -> DecimalType {
        create_decimal(precision, scale).unwrap()
    }

    #[divan::bench(args = [9, 18, 38, 76])]
    fn short_literal(bencher: divan::Bencher, precision: u64) {
        let ty = decimal(precision, 2);
        bencher.bench_local(|| ty.parse_from_string(divan::black_box("123.45")));
    }

    #[divan::bench]
    fn exponent_literal(bencher: divan::Bencher) {
        let ty = decimal(38, 10);
        bencher.bench_local(|| ty.parse_from_string(divan::black_box("-1.2345e12")));
    }

    #[divan::bench]
    fn truncated_fraction(bencher: divan::Bencher) {
        let ty = decimal(18, 2);
        bencher.bench_local(|| ty.parse_from_string(divan::black_box("0.123456789012345")));
    }

    #[divan::bench]
    fn wide_literal(bencher: divan::Bencher) {
        let ty = decimal(76, 20);
        let text = "12345678901234567890123456789012345678901234567890.12345678901234567890";
        bencher.bench_local(|| ty.parse_from_string(divan::black_box(text)));
    }
}

// === Formatting Benchmarks ===

mod formatting {
    use super::*;
    use coltype::FormatSettings;

    #[divan::bench(args = [false, true])]
    fn serialize_text(bencher: divan::Bencher, trailing_zeros: bool) {
        let ty = decimal_type();
        let serialization = ty.default_serialization();
        let value = ty.parse_from_string("-98765.4321").unwrap();
        let settings = FormatSettings { decimal_trailing_zeros: trailing_zeros };
        bencher.bench_local(|| serialization.serialize_text(divan::black_box(&value), &settings));
    }

    fn decimal_type() -> DecimalType {
        create_decimal(18, 6).unwrap()
    }
}
