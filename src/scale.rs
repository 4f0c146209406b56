//! Scale functions for data-to-visual mappings.
//!
//! Scales transform catalog values to screen positions. A domain whose min and
//! max coincide, or that never saw a value, collapses to the middle of the
//! output range so the result is always finite.

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// `(value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min`.
/// A degenerate or non-finite input range, a non-finite value, or a result
/// that overflows yields the midpoint of the output range.
#[must_use]
pub fn map_linear(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if !value.is_finite() || !span.is_finite() || span == 0.0 {
        return midpoint(out_min, out_max);
    }
    let mapped = (value - in_min) / span * (out_max - out_min) + out_min;
    if mapped.is_finite() {
        mapped
    } else {
        midpoint(out_min, out_max)
    }
}

fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) / 2.0
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain_min: domain.0, domain_max: domain.1, range_min: range.0, range_max: range.1 }
    }

    /// Whether every domain value maps to the range midpoint.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let span = self.domain_max - self.domain_min;
        !span.is_finite() || span == 0.0
    }

    /// Scale an optional value; `None` maps to the range midpoint.
    #[must_use]
    pub fn scale_or_mid(&self, value: Option<f64>) -> f64 {
        match value {
            Some(v) => self.scale(v),
            None => midpoint(self.range_min, self.range_max),
        }
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        map_linear(value, self.domain_min, self.domain_max, self.range_min, self.range_max)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output is always finite for finite output bounds.
        #[test]
        fn prop_map_linear_is_finite(
            value in any::<f64>(),
            in_min in -1e12f64..1e12,
            in_max in -1e12f64..1e12,
            out_max in 1.0f64..4096.0,
        ) {
            prop_assert!(map_linear(value, in_min, in_max, 0.0, out_max).is_finite());
        }

        /// Values inside the domain land inside the range.
        #[test]
        fn prop_map_linear_stays_in_range(
            lo in -1e6f64..1e6,
            width in 1e-3f64..1e6,
            t in 0.0f64..=1.0,
        ) {
            let hi = lo + width;
            let v = lo + t * width;
            let out = map_linear(v, lo, hi, 0.0, 700.0);
            prop_assert!((-1e-6..=700.0 + 1e-6).contains(&out));
        }
    }
}
