//! Format-argument counting for localized values.
//!
//! Only complete printf-style placeholders are recognized:
//! `%[<index>$][<flags>][<width>][.<precision>][<length>]<specifier>`, where
//! the specifier is one of the integer, unsigned, float, string, object,
//! pointer or character conversions. `%%` is a literal percent sign and is
//! never counted. A `*` width or precision is not counted as an extra
//! argument.
//!
//! The space flag is not accepted, so prose such as `50% off` does not read
//! as `% o`.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(
        r"%%|%(?:(\d+)\$)?[-+#0']*(?:\d+|\*)?(?:\.(?:\d+|\*))?(?:hh|ll|[hlqztjL])?[@dDiuUxXoOfFeEgGaAsScCpP]"
    )
    .unwrap();
}

/// Returns the number of distinct arguments `value` substitutes.
///
/// Positional placeholders referring to the same index count once.
pub fn count_arguments(value: &str) -> usize {
    let mut sequential = 0;
    let mut positions = BTreeSet::new();

    for captures in PLACEHOLDER_REGEX.captures_iter(value) {
        if &captures[0] == "%%" {
            continue;
        }
        match captures.get(1).and_then(|m| m.as_str().parse::<usize>().ok()) {
            Some(index) => {
                positions.insert(index);
            }
            None => sequential += 1,
        }
    }

    sequential + positions.len()
}
