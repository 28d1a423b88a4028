//! Currency minor-unit conversion.
//!
//! The payment processor bills in the smallest currency denomination
//! (cents for USD), while menu prices are stored in major units.

/// Convert a major-unit price to minor units (cents), truncating any
/// sub-cent fraction.
///
/// The naive `(price * 100.0) as i64` mis-truncates values like `19.99`
/// whose binary representation lands just below the true product, so the
/// product is first rounded at a tenth of a cent before truncation.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_minor_units(price: f64) -> i64 {
    ((price * 1000.0).round() as i64) / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_cents() {
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(0.29), 29);
    }

    #[test]
    fn test_sub_cent_fraction_truncates() {
        assert_eq!(to_minor_units(19.999), 1999);
        assert_eq!(to_minor_units(10.994), 1099);
    }

    #[test]
    fn test_zero() {
        assert_eq!(to_minor_units(0.0), 0);
    }
}
