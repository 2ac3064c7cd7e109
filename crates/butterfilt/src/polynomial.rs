//! Polynomial Construction and Evaluation
//!
//! Builds the coefficients of a monic polynomial from its complex roots and
//! evaluates real-coefficient polynomials at complex points. Both are the
//! numeric backbone of the Butterworth designer: pole and zero sets become
//! the denominator and numerator coefficient vectors of the transfer
//! function, and gain normalization evaluates those vectors on the unit
//! circle.
//!
//! Root expansion is iterative convolution:
//!
//! ```text
//! c := {1}
//! for each root r:  c := c * {1, -r}
//! ```
//!
//! The left-to-right accumulation order is deliberate. Regrouping the
//! products changes rounding in the least-significant coefficients, and the
//! designer depends on reproducible output.
//!
//! ## Example
//!
//! ```rust
//! use butterfilt::polynomial::poly_from_roots;
//! use num_complex::Complex;
//!
//! // roots +1 and -1 give x^2 - 1
//! let roots = [Complex::new(1.0_f64, 0.0), Complex::new(-1.0, 0.0)];
//! let coeffs = poly_from_roots(&roots);
//! assert_eq!(coeffs.len(), 3);
//! assert!((coeffs[0].re - 1.0).abs() < 1e-12);
//! assert!(coeffs[1].norm() < 1e-12);
//! assert!((coeffs[2].re + 1.0).abs() < 1e-12);
//! ```

use num_complex::Complex;
use num_traits::Float;

/// Expand `N` complex roots into the `N + 1` coefficients of the monic
/// polynomial having exactly those roots, highest power first.
///
/// Any finite input is accepted; there is no error path. An empty root set
/// yields the constant polynomial `{1}`.
pub fn poly_from_roots<T: Float>(roots: &[Complex<T>]) -> Vec<Complex<T>> {
    let mut coeffs = Vec::with_capacity(roots.len() + 1);
    coeffs.push(Complex::new(T::one(), T::zero()));

    for &root in roots {
        coeffs.push(Complex::new(T::zero(), T::zero()));
        for j in (1..coeffs.len()).rev() {
            let carried = coeffs[j - 1];
            coeffs[j] = coeffs[j] - root * carried;
        }
    }

    coeffs
}

/// Evaluate a real-coefficient polynomial (highest power first) at a complex
/// point using Horner's scheme.
pub fn polyval<T: Float>(coeffs: &[T], z: Complex<T>) -> Complex<T> {
    coeffs.iter().fold(Complex::new(T::zero(), T::zero()), |acc, &c| {
        acc * z + Complex::new(c, T::zero())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn real(x: f64) -> Complex<f64> {
        Complex::new(x, 0.0)
    }

    #[test]
    fn empty_roots_give_unit_polynomial() {
        let coeffs = poly_from_roots::<f64>(&[]);
        assert_eq!(coeffs.len(), 1);
        assert_relative_eq!(coeffs[0].re, 1.0);
    }

    #[test]
    fn single_root_gives_linear_factor() {
        let coeffs = poly_from_roots(&[real(3.0)]);
        assert_eq!(coeffs.len(), 2);
        assert_relative_eq!(coeffs[0].re, 1.0);
        assert_relative_eq!(coeffs[1].re, -3.0);
    }

    #[test]
    fn conjugate_pair_gives_real_quadratic() {
        // roots 1 +/- 2i give x^2 - 2x + 5
        let roots = [Complex::new(1.0, 2.0), Complex::new(1.0, -2.0)];
        let coeffs = poly_from_roots(&roots);
        assert_relative_eq!(coeffs[0].re, 1.0, epsilon = 1e-14);
        assert_relative_eq!(coeffs[1].re, -2.0, epsilon = 1e-14);
        assert_relative_eq!(coeffs[2].re, 5.0, epsilon = 1e-14);
        for c in &coeffs {
            assert!(c.im.abs() < 1e-14, "imaginary residue {}", c.im);
        }
    }

    #[test]
    fn repeated_root_matches_binomial_expansion() {
        // (x + 1)^5 has exactly representable integer coefficients
        let roots = vec![real(-1.0); 5];
        let coeffs = poly_from_roots(&roots);
        let expected = [1.0, 5.0, 10.0, 10.0, 5.0, 1.0];
        for (c, &e) in coeffs.iter().zip(expected.iter()) {
            assert_eq!(c.re, e);
            assert_eq!(c.im, 0.0);
        }
    }

    #[test]
    fn expansion_is_reproducible_for_a_fixed_root_order() {
        let roots = [
            Complex::new(-0.3, 0.7),
            Complex::new(-0.3, -0.7),
            Complex::new(-0.9, 0.1),
            Complex::new(-0.9, -0.1),
        ];
        let first = poly_from_roots(&roots);
        let second = poly_from_roots(&roots);
        assert_eq!(first, second);
    }

    #[test]
    fn horner_evaluates_known_polynomial() {
        // x^2 - 1 at x = 2 is 3
        let value = polyval(&[1.0, 0.0, -1.0], real(2.0));
        assert_relative_eq!(value.re, 3.0);
        assert_relative_eq!(value.im, 0.0);
    }

    #[test]
    fn horner_on_unit_circle() {
        // x + 1 at x = e^{i*pi} vanishes
        let z = Complex::from_polar(1.0, std::f64::consts::PI);
        let value = polyval(&[1.0, 1.0], z);
        assert!(value.norm() < 1e-15);
    }
}
