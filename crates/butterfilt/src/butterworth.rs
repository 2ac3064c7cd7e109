//! Butterworth Filter Designer
//!
//! Designs digital Butterworth filters (lowpass, highpass, bandpass,
//! bandstop) from high-level parameters and commits the resulting
//! coefficients into a composed [`IirFilter`] engine.
//!
//! ## Design pipeline
//!
//! ```text
//! order, frequencies, fs
//!   -> validate parameters
//!   -> pre-warp cutoffs:      fpw = (fs/pi) * tan(pi*fc/fs)
//!   -> place analog poles on the left unit semicircle, scaled by 2*pi*fpw
//!      (band kinds map each prototype pole to a pair, doubling the order)
//!   -> place zeros per response kind (z = -1, +1, or e^{+/-j*w0})
//!   -> bilinear-transform every pole to the z-plane
//!   -> expand poles/zeros into (a, b) coefficient vectors
//!   -> rescale b for unit gain at the response's reference frequency
//!   -> commit (a, b) to the recursive filter engine
//! ```
//!
//! Pole angles follow the standard Butterworth formula
//! `theta_k = (2k - 1) * pi / (2 * order)`, placing poles at
//! `(-sin theta_k, cos theta_k)` on the unit circle. The highpass response
//! uses the reciprocal of each prototype pole; the band responses apply the
//! analog band transform around the geometric center of the pre-warped
//! edges.
//!
//! Gain normalization is per kind: lowpass and bandstop normalize at DC,
//! highpass at Nyquist, bandpass at the geometric center of its edge
//! frequencies.
//!
//! Complex pole and zero sets live only inside one design pass; the
//! committed state is the real coefficient pair held by the engine.
//!
//! ## Example
//!
//! ```rust
//! use butterfilt::Butterworth;
//!
//! // Voice band, 16 kHz sample rate
//! let bp = Butterworth::bandpass(3, 300.0_f64, 3_400.0, 16_000.0);
//!
//! // Unity gain at the geometric center frequency
//! let center = (300.0_f64 * 3_400.0).sqrt();
//! assert!((bp.frequency_response(center).norm() - 1.0).abs() < 1e-9);
//! ```

use num_complex::Complex;
use num_traits::float::{Float, FloatConst};

use crate::bilinear::bilinear;
use crate::iir::IirFilter;
use crate::polynomial::{poly_from_roots, polyval};
use crate::traits::{Filter, FilterType};
use crate::types::FilterStatus;

/// Digital Butterworth filter designer composed with a recursive filter
/// engine.
///
/// The response kind is fixed at construction; order, frequencies and
/// sample rate can be re-derived on the same instance with
/// [`set_parameters`](Butterworth::set_parameters) or
/// [`set_band_parameters`](Butterworth::set_band_parameters).
///
/// Malformed design parameters (non-positive order, frequencies outside
/// `(0, Nyquist)`, inverted band edges) are programming errors and abort
/// the call through assertions before any computation starts.
#[derive(Debug, Clone)]
pub struct Butterworth<T> {
    kind: FilterType,
    /// Prototype order. Band kinds produce 2x this many poles.
    order: usize,
    sample_rate: T,
    f_lower: T,
    f_upper: T,
    engine: IirFilter<T>,
}

impl<T: Float + FloatConst> Butterworth<T> {
    /// Create a designer of the given response kind with no parameters yet.
    ///
    /// The composed engine reports [`FilterStatus::BadCoefficients`] until
    /// parameters are supplied.
    pub fn new(kind: FilterType) -> Self {
        Self {
            kind,
            order: 0,
            sample_rate: T::zero(),
            f_lower: T::zero(),
            f_upper: T::zero(),
            engine: IirFilter::new(),
        }
    }

    /// Design a lowpass filter with cutoff `cutoff` at `sample_rate`.
    pub fn lowpass(order: usize, cutoff: T, sample_rate: T) -> Self {
        let mut filter = Self::new(FilterType::Lowpass);
        filter.set_parameters(order, cutoff, sample_rate);
        filter
    }

    /// Design a highpass filter with cutoff `cutoff` at `sample_rate`.
    pub fn highpass(order: usize, cutoff: T, sample_rate: T) -> Self {
        let mut filter = Self::new(FilterType::Highpass);
        filter.set_parameters(order, cutoff, sample_rate);
        filter
    }

    /// Design a bandpass filter passing `lower..upper` at `sample_rate`.
    pub fn bandpass(order: usize, lower: T, upper: T, sample_rate: T) -> Self {
        let mut filter = Self::new(FilterType::Bandpass);
        filter.set_band_parameters(order, lower, upper, sample_rate);
        filter
    }

    /// Design a bandstop filter rejecting `lower..upper` at `sample_rate`.
    pub fn bandstop(order: usize, lower: T, upper: T, sample_rate: T) -> Self {
        let mut filter = Self::new(FilterType::Bandstop);
        filter.set_band_parameters(order, lower, upper, sample_rate);
        filter
    }

    /// Design a bandpass filter from a bandwidth around a center frequency.
    ///
    /// The edges are `center - bandwidth/2` and `center + bandwidth/2`.
    pub fn bandpass_centered(order: usize, bandwidth: T, center: T, sample_rate: T) -> Self {
        let half = bandwidth / T::from(2.0).unwrap();
        Self::bandpass(order, center - half, center + half, sample_rate)
    }

    /// Design a bandstop filter from a bandwidth around a center frequency.
    pub fn bandstop_centered(order: usize, bandwidth: T, center: T, sample_rate: T) -> Self {
        let half = bandwidth / T::from(2.0).unwrap();
        Self::bandstop(order, center - half, center + half, sample_rate)
    }

    /// Re-derive and commit coefficients for a single-cutoff response.
    pub fn set_parameters(&mut self, order: usize, cutoff: T, sample_rate: T) {
        assert!(
            !self.kind.is_band(),
            "single-cutoff parameters supplied to a band filter"
        );
        self.order = order;
        self.sample_rate = sample_rate;
        self.f_lower = cutoff;
        self.f_upper = cutoff;
        self.design();
    }

    /// Re-derive and commit coefficients for a band response.
    pub fn set_band_parameters(&mut self, order: usize, lower: T, upper: T, sample_rate: T) {
        assert!(
            self.kind.is_band(),
            "band edge parameters supplied to a single-cutoff filter"
        );
        self.order = order;
        self.sample_rate = sample_rate;
        self.f_lower = lower;
        self.f_upper = upper;
        self.design();
    }

    /// Smallest order (and the achievable normalized cutoff) meeting an
    /// attenuation budget.
    ///
    /// `w_pass` and `w_stop` are band edges normalized to Nyquist, each in
    /// `(0, 1)`; `a_pass` and `a_stop` are the pass-band and stop-band
    /// attenuations in dB. The order is always rounded up, so the stop-band
    /// figure is met or exceeded. The returned cutoff is back-solved from
    /// the chosen order and the stop-band edge, then mapped back through
    /// the inverse pre-warp.
    ///
    /// `w_pass < w_stop` sizes a lowpass; `w_pass > w_stop` a highpass.
    pub fn minimum_order(w_pass: T, w_stop: T, a_pass: T, a_stop: T) -> (usize, T) {
        assert!(
            w_pass > T::zero() && w_pass < T::one() && w_stop > T::zero() && w_stop < T::one(),
            "band edges must be normalized to (0, 1)"
        );
        assert!(w_pass != w_stop, "pass and stop edges must differ");

        let two = T::from(2.0).unwrap();
        let ten = T::from(10.0).unwrap();
        let tenth = T::from(0.1).unwrap();

        let fw_pass = (T::FRAC_PI_2() * w_pass).tan();
        let fw_stop = (T::FRAC_PI_2() * w_stop).tan();

        let g_pass = ten.powf(tenth * a_pass.abs()) - T::one();
        let g_stop = ten.powf(tenth * a_stop.abs()) - T::one();

        let ratio = if w_pass < w_stop {
            (fw_stop / fw_pass).abs()
        } else {
            (fw_pass / fw_stop).abs()
        };

        let raw = ((g_stop / g_pass).log10() / (two * ratio.log10())).ceil();
        let order = raw.to_usize().map_or(1, |n| n.max(1));

        // Achievable cutoff matching the stop-band edge exactly at this order
        let ctf = g_stop.powf(T::one() / (two * T::from(order).unwrap()));
        let w0 = if w_pass < w_stop {
            fw_stop / ctf
        } else {
            fw_stop * ctf
        };

        (order, two / T::PI() * w0.atan())
    }

    /// The response kind chosen at construction.
    pub fn filter_type(&self) -> FilterType {
        self.kind
    }

    /// Sample rate of the current design.
    pub fn sample_rate(&self) -> T {
        self.sample_rate
    }

    /// Cutoff frequencies of the current design. Both entries are equal for
    /// single-cutoff responses.
    pub fn cutoffs(&self) -> (T, T) {
        (self.f_lower, self.f_upper)
    }

    /// Validity of the committed coefficients.
    pub fn status(&self) -> FilterStatus {
        self.engine.status()
    }

    /// The committed normalized `(a, b)` pair.
    pub fn coefficients(&self) -> (&[T], &[T]) {
        self.engine.coefficients()
    }

    /// Transfer-function value at `freq`, using the design's sample rate.
    pub fn frequency_response(&self, freq: T) -> Complex<T> {
        self.engine.frequency_response(freq, self.sample_rate)
    }

    /// Magnitude response in decibels at `freq`.
    pub fn magnitude_response_db(&self, freq: T) -> T {
        self.engine.magnitude_response_db(freq, self.sample_rate)
    }

    /// Run the whole pipeline for the stored parameters and commit the
    /// result to the engine.
    fn design(&mut self) {
        assert!(self.order >= 1, "filter order must be at least 1");
        let nyquist = self.sample_rate / T::from(2.0).unwrap();
        if self.kind.is_band() {
            assert!(
                self.f_lower > T::zero() && self.f_upper < nyquist,
                "band edges must lie inside (0, Nyquist)"
            );
            assert!(
                self.f_lower < self.f_upper,
                "lower band edge must be strictly below the upper edge"
            );
        } else {
            assert!(
                self.f_lower > T::zero() && self.f_lower < nyquist,
                "cutoff must lie inside (0, Nyquist)"
            );
        }

        let analog = self.analog_poles();
        let digital: Vec<Complex<T>> = analog
            .iter()
            .map(|&p| bilinear(p, self.sample_rate))
            .collect();
        let zeros = self.zeros();

        let a: Vec<T> = poly_from_roots(&digital).iter().map(|c| c.re).collect();
        let mut b: Vec<T> = poly_from_roots(&zeros).iter().map(|c| c.re).collect();

        let gain = self.unit_gain(&a, &b);
        for v in b.iter_mut() {
            *v = *v * gain;
        }

        let taps = a.len();
        self.engine
            .set_coefficients(a, b)
            .expect("pole and zero sets expand to equal-length coefficient vectors");
        tracing::debug!(
            "committed {:?} Butterworth design: {} poles, {} taps",
            self.kind,
            digital.len(),
            taps
        );
    }

    /// Pre-warped cutoff, compensating the bilinear transform's frequency
    /// axis distortion.
    fn prewarped(&self, freq: T) -> T {
        let fs = self.sample_rate;
        fs / T::PI() * (T::PI() * freq / fs).tan()
    }

    /// Prototype pole `k` (1-based) on the left unit semicircle.
    fn unit_pole(&self, k: usize) -> Complex<T> {
        let two = T::from(2.0).unwrap();
        let theta =
            T::from(2 * k - 1).unwrap() * T::PI() / (two * T::from(self.order).unwrap());
        Complex::new(-theta.sin(), theta.cos())
    }

    /// Continuous-domain pole set for the stored parameters. Band kinds
    /// return `2 * order` poles.
    fn analog_poles(&self) -> Vec<Complex<T>> {
        let n = self.order;
        let two = T::from(2.0).unwrap();
        let two_pi = two * T::PI();

        match self.kind {
            FilterType::Lowpass => {
                let scale = two_pi * self.prewarped(self.f_lower);
                (1..=n).map(|k| self.unit_pole(k) * scale).collect()
            }
            FilterType::Highpass => {
                let scale = Complex::new(two_pi * self.prewarped(self.f_lower), T::zero());
                (1..=n).map(|k| scale / self.unit_pole(k)).collect()
            }
            FilterType::Bandpass | FilterType::Bandstop => {
                let fpw1 = self.prewarped(self.f_lower);
                let fpw2 = self.prewarped(self.f_upper);
                let fpw0 = (fpw1 * fpw2).sqrt();
                let s0 = two_pi * fpw0;
                let ratio = (fpw2 - fpw1) / (two * fpw0);

                let mut poles = Vec::with_capacity(2 * n);
                for k in 1..=n {
                    let base = self.unit_pole(k);
                    let s = if self.kind == FilterType::Bandpass {
                        base * ratio
                    } else {
                        Complex::new(ratio, T::zero()) / base
                    };
                    let spread = (Complex::new(T::one(), T::zero()) - s * s).sqrt();
                    let offset = Complex::<T>::i() * spread;
                    poles.push((s + offset) * s0);
                    poles.push((s - offset) * s0);
                }
                poles
            }
        }
    }

    /// Discrete-domain zero set for the stored parameters. These positions
    /// are fixed conventions per response kind and are consumed by the
    /// expansion step as-is, without a bilinear pass.
    fn zeros(&self) -> Vec<Complex<T>> {
        let n = self.order;
        let one = Complex::new(T::one(), T::zero());

        match self.kind {
            FilterType::Lowpass => vec![-one; n],
            FilterType::Highpass => vec![one; n],
            FilterType::Bandpass => {
                let mut zeros = vec![-one; n];
                zeros.extend(std::iter::repeat(one).take(n));
                zeros
            }
            FilterType::Bandstop => {
                let two = T::from(2.0).unwrap();
                let fpw0 =
                    (self.prewarped(self.f_lower) * self.prewarped(self.f_upper)).sqrt();
                let w0 = two * (T::PI() * fpw0 / self.sample_rate).atan();
                let mut zeros = Vec::with_capacity(2 * n);
                for _ in 0..n {
                    zeros.push(Complex::from_polar(T::one(), w0));
                    zeros.push(Complex::from_polar(T::one(), -w0));
                }
                zeros
            }
        }
    }

    /// Scale factor giving unit gain at the reference frequency of the
    /// response kind: DC for lowpass/bandstop, Nyquist for highpass, the
    /// geometric center of the edge frequencies for bandpass.
    fn unit_gain(&self, a: &[T], b: &[T]) -> T {
        match self.kind {
            FilterType::Lowpass | FilterType::Bandstop => {
                let sum = |v: &[T]| v.iter().fold(T::zero(), |acc, &x| acc + x);
                sum(a) / sum(b)
            }
            FilterType::Highpass => {
                let alternating = |v: &[T]| {
                    let mut sign = T::one();
                    let mut acc = T::zero();
                    for &x in v {
                        acc = acc + sign * x;
                        sign = -sign;
                    }
                    acc
                };
                alternating(a) / alternating(b)
            }
            FilterType::Bandpass => {
                let two_pi = T::from(2.0).unwrap() * T::PI();
                let center = (self.f_lower * self.f_upper).sqrt();
                let z = Complex::from_polar(T::one(), two_pi * center / self.sample_rate);
                polyval(a, z).norm() / polyval(b, z).norm()
            }
        }
    }
}

impl<T: Float + FloatConst> Filter<T> for Butterworth<T> {
    fn process(&mut self, input: T) -> T {
        self.engine.process(input)
    }

    fn reset(&mut self) {
        self.engine.reset();
    }

    fn order(&self) -> usize {
        self.engine.order()
    }
}
