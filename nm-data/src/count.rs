//! Counts as the page writes them.
//!
//! Templates emit whatever number the backend computed, so a count may arrive
//! as `12`, `12.0`, `-1` or `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Any JSON number as a count. Fractions round to the nearest integer,
/// negatives clamp to zero.
pub fn to_count(number: &Number) -> u64 {
    if let Some(count) = number.as_u64() {
        return count;
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.round() as u64,
        _ => 0,
    }
}

pub(crate) fn count_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<Number>::deserialize(deserializer)?
        .as_ref()
        .map_or(0, to_count))
}

pub(crate) fn counts_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<u64>, D::Error> {
    let raw = Option::<Vec<Option<Number>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .iter()
        .map(|n| n.as_ref().map_or(0, to_count))
        .collect())
}
