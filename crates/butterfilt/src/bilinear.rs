//! Bilinear Transform
//!
//! Maps one continuous-domain (s-plane) pole to its discrete-domain
//! (z-plane) counterpart for a given sample rate:
//!
//! ```text
//! z = (2*fs + s) / (2*fs - s)
//! ```
//!
//! The left half-plane maps inside the unit circle, so stable analog poles
//! stay stable after discretization. The mapping degenerates only at
//! `s = 2*fs`, which is not guarded here: the designer's pre-warp keeps
//! analog frequencies below that bound.
//!
//! ## Example
//!
//! ```rust
//! use butterfilt::bilinear::bilinear;
//! use num_complex::Complex;
//!
//! // s = 0 maps to z = 1 (DC is preserved)
//! let z = bilinear(Complex::new(0.0_f64, 0.0), 100.0);
//! assert!((z.re - 1.0).abs() < 1e-12);
//! assert!(z.im.abs() < 1e-12);
//! ```

use num_complex::Complex;
use num_traits::Float;

/// Map a single continuous-domain pole to the discrete domain.
pub fn bilinear<T: Float>(pole: Complex<T>, sample_rate: T) -> Complex<T> {
    let two_fs = Complex::new(sample_rate + sample_rate, T::zero());
    (two_fs + pole) / (two_fs - pole)
}
