//! Shared helpers.
//!
//! - CSS selector parsing for the static selectors used by the markup analyzers
//! - Decimal rounding for reported measurements

mod selector;

pub(crate) use selector::parse_selector_unsafe;

/// Rounds to `places` decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
