//! Thousands-separator rendering for display.

use crate::domain::GROUPING;

/// Render `value` with `.` every three digits from the right.
///
/// `11111111` becomes `11.111.111` and `1000005` becomes `1.000.005`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUPING);
        }
        out.push(c);
    }

    out
}
