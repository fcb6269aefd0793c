//! Flat-slice statistics for the contrast metric.
//!
//! Every function follows plain IEEE arithmetic: an empty slice gives `0 / 0`,
//! i.e. NaN, rather than an error.

/// Mean and population variance, accumulated around the first value.
///
/// Shifting by `values[0]` keeps a constant slice at exactly zero spread and
/// its mean at exactly that constant, whatever the slice length.
fn shifted_moments(values: &[f64]) -> (f64, f64) {
    let Some(&shift) = values.first() else {
        return (f64::NAN, f64::NAN);
    };
    let count = values.len() as f64;
    let shifted_mean = values.iter().map(|value| value - shift).sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|value| {
            let deviation = (value - shift) - shifted_mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count;
    (shift + shifted_mean, variance)
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    shifted_moments(values).0
}

/// Population standard deviation (divisor `N`, not `N - 1`).
pub fn population_std(values: &[f64]) -> f64 {
    shifted_moments(values).1.sqrt()
}

/// Coefficient of variation, `std / mean`.
///
/// A zero mean yields NaN (or infinity for a non-zero spread), which is the
/// mathematically undefined contrast and is passed through as data.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let (mean, variance) = shifted_moments(values);
    variance.sqrt() / mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn population_std_divides_by_n() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(population_std(&values), 2.0);
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(population_std(&[255.0]), 0.0);
        assert_eq!(coefficient_of_variation(&[255.0]), 0.0);
    }

    #[test]
    fn coefficient_of_variation_of_known_set() {
        let values = [0.0, 255.0, 0.0];
        assert_relative_eq!(coefficient_of_variation(&values), 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn zero_mean_is_nan_not_a_panic() {
        assert!(coefficient_of_variation(&[0.0, 0.0, 0.0]).is_nan());
    }

    #[test]
    fn constant_fractional_values_have_exactly_zero_spread() {
        let value = 61.0 / 3.0;
        let values = vec![value; 480 * 640];
        assert_eq!(mean(&values), value);
        assert_eq!(population_std(&values), 0.0);
        assert_eq!(coefficient_of_variation(&values), 0.0);
    }

    #[test]
    fn large_offset_does_not_swamp_the_spread() {
        let values = [1.0e9 + 1.0, 1.0e9 + 3.0];
        assert_eq!(mean(&values), 1.0e9 + 2.0);
        assert_eq!(population_std(&values), 1.0);
    }

    #[test]
    fn empty_slice_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(population_std(&[]).is_nan());
        assert!(coefficient_of_variation(&[]).is_nan());
    }
}
