/// Exact powers of ten. Every entry is representable without rounding.
const POWERS_OF_TEN: [f64; 20] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19,
];

/// Fraction digits past this many can't move a u64 accumulator, and are well
/// below f64 precision anyway.
const MAX_FRACTION_DIGITS: usize = 19;

const fn digit(c: u8) -> u64 {
    (c - b'0') as u64
}

/// Converts the text of an `Integer` or `Double` token into its value.
///
/// Grammar: an optional leading '-', digits, then optionally a '.' followed by
/// more digits. No exponents. The integer part is accumulated digit by digit;
/// the fraction digits are accumulated as an integer and scaled down once by
/// the matching power of ten, which keeps short decimals like `2.25` exact.
///
/// Only meant for spans the tokenizer has already classified as numeric.
/// Bytes outside `[0-9.-]` are skipped rather than rejected.
#[must_use]
pub fn parse_double(span: &[u8]) -> f64 {
    let (negative, rest) = match span.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, span),
    };

    let (integer_digits, fraction_digits) = match rest.iter().position(|&c| c == b'.') {
        None => (rest, &rest[rest.len()..]),
        Some(dot) => (&rest[..dot], &rest[dot + 1..]),
    };

    let mut integer_part = 0f64;
    for &c in integer_digits {
        if c.is_ascii_digit() {
            integer_part = integer_part * 10.0 + digit(c) as f64;
        }
    }

    let mut fraction: u64 = 0;
    let mut scale = 0;
    for &c in fraction_digits {
        if scale == MAX_FRACTION_DIGITS {
            break;
        }
        if c.is_ascii_digit() {
            fraction = fraction * 10 + digit(c);
            scale += 1;
        }
    }
    let fractional_part = fraction as f64 / POWERS_OF_TEN[scale];

    let value = integer_part + fractional_part;
    if negative {
        -value
    } else {
        value
    }
}
