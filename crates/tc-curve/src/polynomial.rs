//! Dense polynomial helpers.
//!
//! Coefficients run from the highest power down to the constant term, so
//! `[a, b, c]` is `a*x^2 + b*x + c`.

/// Evaluate a polynomial with Horner's method.
///
/// An empty coefficient slice is the zero polynomial.
#[inline]
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Coefficients of the `order`-th derivative.
///
/// Each surviving coefficient of power `p` is multiplied by the falling
/// factorial `p * (p-1) * ... * (p-order+1)`; the lowest `order` terms drop
/// out. Differentiating past the degree yields the zero polynomial.
pub fn derivative_coefficients(coefficients: &[f64], order: usize) -> Vec<f64> {
    if order >= coefficients.len() {
        return Vec::new();
    }
    let degree = coefficients.len() - 1;
    coefficients[..coefficients.len() - order]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * falling_factorial(degree - i, order))
        .collect()
}

fn falling_factorial(n: usize, k: usize) -> f64 {
    (0..k).map(|j| (n - j) as f64).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_expanded_form() {
        // 2x^3 - x + 5
        let c = [2.0, 0.0, -1.0, 5.0];
        for x in [-2.0, 0.0, 0.5, 3.0] {
            let expected = 2.0 * x * x * x - x + 5.0;
            assert!((horner(&c, x) - expected).abs() < 1e-12);
        }
        assert_eq!(horner(&[], 3.0), 0.0);
    }

    #[test]
    fn first_and_higher_derivatives() {
        // x^4 + 3x^2 + 7
        let c = [1.0, 0.0, 3.0, 0.0, 7.0];
        assert_eq!(derivative_coefficients(&c, 0), c.to_vec());
        assert_eq!(derivative_coefficients(&c, 1), vec![4.0, 0.0, 6.0, 0.0]);
        assert_eq!(derivative_coefficients(&c, 2), vec![12.0, 0.0, 6.0]);
        assert_eq!(derivative_coefficients(&c, 3), vec![24.0, 0.0]);
        assert_eq!(derivative_coefficients(&c, 4), vec![24.0]);
        assert!(derivative_coefficients(&c, 5).is_empty());
    }

    #[test]
    fn constant_polynomial_differentiates_to_zero() {
        let d = derivative_coefficients(&[3.5], 1);
        assert_eq!(horner(&d, 10.0), 0.0);
    }
}
