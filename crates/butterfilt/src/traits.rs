//! Core Filtering Traits
//!
//! Defines the capability shared by everything in this crate that can run
//! samples through a difference equation, plus the closed set of frequency
//! responses a Butterworth design can take.
//!
//! ## Architecture
//!
//! ```text
//! Filter<T> (stepwise + batch filtering over one real sample type)
//!    ├── IirFilter<T>     (owns coefficients and history, does the work)
//!    └── Butterworth<T>   (designer, delegates to a composed IirFilter)
//! ```
//!
//! The designer composes a filter engine rather than extending one, so the
//! design algorithms stay independent of storage and update mechanics.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use butterfilt::{Butterworth, Filter};
//!
//! fn settle(filter: &mut dyn Filter<f64>, samples: &[f64]) -> Vec<f64> {
//!     filter.process_block(samples)
//! }
//! ```

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Stepwise and batch filtering over a single real floating sample type.
///
/// Implementations maintain internal history that persists between calls, so
/// consecutive invocations continue one stream. Call [`reset`](Filter::reset)
/// before starting an unrelated stream.
pub trait Filter<T: Float> {
    /// Consume one sample and produce one filtered sample.
    fn process(&mut self, input: T) -> T;

    /// Filter a whole sequence in order, sharing history with any previous call.
    ///
    /// Default implementation steps [`process`](Filter::process) per sample.
    fn process_block(&mut self, input: &[T]) -> Vec<T> {
        input.iter().map(|&x| self.process(x)).collect()
    }

    /// Filter a sequence in place.
    fn process_inplace(&mut self, samples: &mut [T]) {
        for s in samples.iter_mut() {
            *s = self.process(*s);
        }
    }

    /// Zero the internal history without touching coefficients.
    fn reset(&mut self);

    /// Effective filter order, `coefficient count - 1`.
    fn order(&self) -> usize;
}

/// Frequency response shape of a Butterworth design.
///
/// Fixed at construction. Each variant carries its own pole placement, zero
/// placement and gain-normalization rule inside the designer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    /// Passes frequencies below the cutoff.
    Lowpass,
    /// Passes frequencies above the cutoff.
    Highpass,
    /// Passes the band between two edge frequencies.
    Bandpass,
    /// Rejects the band between two edge frequencies.
    Bandstop,
}

impl FilterType {
    /// Whether this response takes a pair of edge frequencies.
    pub fn is_band(&self) -> bool {
        matches!(self, FilterType::Bandpass | FilterType::Bandstop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal pass-through gain stage used to exercise the default methods.
    struct Gain {
        factor: f64,
    }

    impl Filter<f64> for Gain {
        fn process(&mut self, input: f64) -> f64 {
            self.factor * input
        }

        fn reset(&mut self) {}

        fn order(&self) -> usize {
            0
        }
    }

    #[test]
    fn default_block_method_steps_every_sample() {
        let mut gain = Gain { factor: 2.0 };
        let out = gain.process_block(&[1.0, -0.5, 0.25]);
        assert_eq!(out, vec![2.0, -1.0, 0.5]);
    }

    #[test]
    fn default_inplace_method_matches_block() {
        let mut gain = Gain { factor: 3.0 };
        let mut buf = [1.0, 2.0];
        gain.process_inplace(&mut buf);
        assert_eq!(buf, [3.0, 6.0]);
    }

    #[test]
    fn band_kinds_are_flagged() {
        assert!(FilterType::Bandpass.is_band());
        assert!(FilterType::Bandstop.is_band());
        assert!(!FilterType::Lowpass.is_band());
        assert!(!FilterType::Highpass.is_band());
    }
}
