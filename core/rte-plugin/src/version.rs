//! Dotted version comparison.
//!
//! Versions compare component by component as integers. Missing components
//! count as 0 (`2.5` equals `2.5.0`) and anything after a component's leading
//! digits is ignored (`5.4.16-ubuntu` compares as `5.4.16`).

use std::cmp::Ordering;

/// Compares two dotted version strings.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = components(a);
    let b = components(b);
    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Returns true if `version` is at least `minimum`.
pub fn is_at_least(version: &str, minimum: &str) -> bool {
    compare_versions(version, minimum) != Ordering::Less
}

fn components(version: &str) -> Vec<u64> {
    version
        .trim()
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}
