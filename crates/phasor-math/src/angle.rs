//! Angle conversion and evenly spaced parameter sequences.

use std::f64::consts::PI;

/// Convert degrees to radians by the factor `PI / 180`.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// `count` evenly spaced values over the closed interval `[start, stop]`.
///
/// Element `i` is `start + (stop - start) * i / (count - 1)`, and the last
/// element is pinned to `stop` so the endpoints never depend on `count`.
/// A `count` of 1 yields `[start]`; 0 yields an empty vector.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = stop - start;
            let div = (count - 1) as f64;
            let mut values: Vec<f64> = (0..count)
                .map(|i| start + span * i as f64 / div)
                .collect();
            values[count - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert_relative_eq!(degrees_to_radians(180.0), PI);
        assert_relative_eq!(degrees_to_radians(360.0), 2.0 * PI);
    }

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 113.0 * 360.0, 10_000);
        assert_eq!(v.len(), 10_000);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[9_999], 113.0 * 360.0);
    }

    #[test]
    fn test_linspace_even_spacing() {
        let v = linspace(0.0, 360.0, 4);
        assert_eq!(v, vec![0.0, 120.0, 240.0, 360.0]);
    }

    #[test]
    fn test_linspace_non_decreasing() {
        let v = linspace(0.0, 1000.0, 777);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 0.0, 3), vec![0.0, 0.0, 0.0]);
    }
}
