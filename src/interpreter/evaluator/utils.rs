/// Converts a condition to the integers `1` and `0`.
#[must_use]
pub fn bool_to_int(condition: bool) -> i64 {
    i64::from(condition)
}

/// Nonzero values are true, zero is false.
#[must_use]
pub const fn is_truthy(value: i64) -> bool {
    value != 0
}
