//! Generic Recursive (IIR) Filter Engine
//!
//! Stores one normalized coefficient pair `(a, b)` and evaluates the
//! direct-form difference equation over an internal history window:
//!
//! ```text
//! y[n] = b[0]*x[n] + ... + b[N]*x[n-N] - a[1]*y[n-1] - ... - a[N]*y[n-N]
//! ```
//!
//! `a` is the feedback (denominator) vector and `b` the feedforward
//! (numerator) vector, both ordered from the highest power of the delay
//! operator down to the constant term. On assignment both vectors are
//! divided by `a[0]`, so the leading feedback term is always 1 afterwards.
//!
//! The engine is independent of any particular design method: it runs
//! whatever coefficients it is given, and the Butterworth designer commits
//! its results here. Validity of supplied coefficients is reported through
//! [`FilterStatus`] rather than a panic, so a caller can retry with
//! corrected vectors; running the filter while not `Ready` is a contract
//! violation checked by assertion.
//!
//! ## Example
//!
//! ```rust
//! use butterfilt::{Filter, IirFilter};
//!
//! let mut filt = IirFilter::from_coefficients(vec![1.0_f64, -0.5], vec![0.5, 0.5]).unwrap();
//! let out = filt.process_block(&[1.0, 0.0, 0.0]);
//! assert!((out[0] - 0.5).abs() < 1e-12);
//! assert!((out[1] - 0.75).abs() < 1e-12);
//! assert!((out[2] - 0.375).abs() < 1e-12);
//! ```

use num_complex::Complex;
use num_traits::float::{Float, FloatConst};

use crate::polynomial::polyval;
use crate::traits::Filter;
use crate::types::{FilterError, FilterResult, FilterStatus};

/// Recursive filter over a single real floating sample type.
///
/// Owns its coefficient pair exclusively; vectors are replaced wholesale by
/// [`set_coefficients`](IirFilter::set_coefficients), never edited in place.
/// The raw-input and filtered-output history windows always match the
/// coefficient length and are zeroed whenever coefficients change.
#[derive(Debug, Clone)]
pub struct IirFilter<T> {
    /// Feedback coefficients, leading term normalized to 1
    a: Vec<T>,
    /// Feedforward coefficients, scaled by the same normalization
    b: Vec<T>,
    /// Input history, newest sample first
    raw: Vec<T>,
    /// Output history, newest sample first
    filtered: Vec<T>,
    status: FilterStatus,
}

impl<T: Float> IirFilter<T> {
    /// Create an engine with no coefficients. Status starts out as
    /// [`FilterStatus::BadCoefficients`] until a valid pair is supplied.
    pub fn new() -> Self {
        Self {
            a: Vec::new(),
            b: Vec::new(),
            raw: Vec::new(),
            filtered: Vec::new(),
            status: FilterStatus::BadCoefficients,
        }
    }

    /// Create an engine directly from a coefficient pair.
    pub fn from_coefficients(a: Vec<T>, b: Vec<T>) -> FilterResult<Self> {
        let mut filter = Self::new();
        filter.set_coefficients(a, b)?;
        Ok(filter)
    }

    /// Replace the coefficient pair.
    ///
    /// Both vectors must be non-empty and of equal length. On success they
    /// are normalized by `a[0]`, both history windows are zeroed to the new
    /// length and the status becomes `Ready`. On failure the previously
    /// stored coefficients are left untouched but the status flips to
    /// `BadCoefficients`, gating any further filtering.
    pub fn set_coefficients(&mut self, mut a: Vec<T>, mut b: Vec<T>) -> FilterResult<()> {
        if a.is_empty() || b.is_empty() {
            self.status = FilterStatus::BadCoefficients;
            return Err(FilterError::EmptyCoefficients);
        }
        if a.len() != b.len() {
            self.status = FilterStatus::BadCoefficients;
            return Err(FilterError::CoefficientLengthMismatch {
                a_len: a.len(),
                b_len: b.len(),
            });
        }

        let a0 = a[0];
        for v in a.iter_mut() {
            *v = *v / a0;
        }
        for v in b.iter_mut() {
            *v = *v / a0;
        }

        let len = a.len();
        self.a = a;
        self.b = b;
        self.raw = vec![T::zero(); len];
        self.filtered = vec![T::zero(); len];
        self.status = FilterStatus::Ready;
        Ok(())
    }

    /// The current normalized `(a, b)` pair.
    pub fn coefficients(&self) -> (&[T], &[T]) {
        (&self.a, &self.b)
    }

    /// Validity of the currently stored coefficients.
    pub fn status(&self) -> FilterStatus {
        self.status
    }
}

impl<T: Float + FloatConst> IirFilter<T> {
    /// Transfer-function value `H(e^{j*2*pi*f/fs})` at frequency `freq`.
    ///
    /// Evaluates the stored numerator and denominator polynomials on the
    /// unit circle via Horner's scheme.
    pub fn frequency_response(&self, freq: T, sample_rate: T) -> Complex<T> {
        let omega = (T::PI() + T::PI()) * freq / sample_rate;
        let z = Complex::from_polar(T::one(), omega);
        polyval(&self.b, z) / polyval(&self.a, z)
    }

    /// Magnitude response in decibels at frequency `freq`.
    pub fn magnitude_response_db(&self, freq: T, sample_rate: T) -> T {
        let twenty = T::from(20.0).unwrap();
        twenty * self.frequency_response(freq, sample_rate).norm().log10()
    }
}

impl<T: Float> Default for IirFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Filter<T> for IirFilter<T> {
    fn process(&mut self, input: T) -> T {
        assert!(
            self.status == FilterStatus::Ready,
            "filter invoked without a valid coefficient pair"
        );

        let n = self.b.len();
        for i in (1..n).rev() {
            self.raw[i] = self.raw[i - 1];
        }
        self.raw[0] = input;

        let mut y = T::zero();
        for i in 0..n {
            y = y + self.b[i] * self.raw[i];
        }
        for i in 1..n {
            y = y - self.a[i] * self.filtered[i - 1];
        }

        for i in (1..n).rev() {
            self.filtered[i] = self.filtered[i - 1];
        }
        self.filtered[0] = y;
        y
    }

    fn reset(&mut self) {
        for v in self.raw.iter_mut() {
            *v = T::zero();
        }
        for v in self.filtered.iter_mut() {
            *v = T::zero();
        }
    }

    fn order(&self) -> usize {
        self.b.len().saturating_sub(1)
    }
}
