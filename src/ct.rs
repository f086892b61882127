//! Constant-time byte comparison.

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte slices without branching on their contents.
///
/// A length mismatch returns `false` immediately; lengths are public in every
/// caller of this crate. Equal-length inputs are compared over their full
/// length, AND-accumulating per-byte equality.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    bool::from(accumulate_eq(a, b, &mut 0))
}

/// Same as [`constant_time_eq`] but also reports how many byte comparisons
/// were performed. The count only depends on the input length.
pub fn constant_time_eq_counted(a: &[u8], b: &[u8]) -> (bool, usize) {
    if a.len() != b.len() {
        return (false, 0);
    }
    let mut ops = 0;
    let eq = accumulate_eq(a, b, &mut ops);
    (bool::from(eq), ops)
}

/// Equality of two equal-length slices as a `Choice`, for callers that fold
/// several checks together before converting to `bool`.
pub(crate) fn ct_eq_choice(a: &[u8], b: &[u8]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }
    accumulate_eq(a, b, &mut 0)
}

/// `Choice(1)` iff every byte of `data` equals `value`. Visits every byte.
pub(crate) fn ct_all_equal(data: &[u8], value: u8) -> Choice {
    let mut acc = Choice::from(1);
    for byte in data {
        acc &= byte.ct_eq(&value);
    }
    acc
}

fn accumulate_eq(a: &[u8], b: &[u8], ops: &mut usize) -> Choice {
    let mut acc = Choice::from(1);
    for (x, y) in a.iter().zip(b.iter()) {
        acc &= x.ct_eq(y);
        *ops += 1;
    }
    acc
}
