//! # Butterworth IIR Filter Design
//!
//! This crate designs digital Butterworth filters (lowpass, highpass,
//! bandpass, bandstop) from high-level parameters and applies them to
//! numeric sequences, without the caller hand-deriving pole placements or
//! coefficient normalization.
//!
//! ## Overview
//!
//! Two pieces cooperate:
//!
//! - **Designer** ([`Butterworth`]): places analog poles, pre-warps target
//!   frequencies, derives zeros per response kind, discretizes through the
//!   bilinear transform, expands roots into coefficient vectors and
//!   rescales for unit gain at the response's reference frequency.
//! - **Recursive filter engine** ([`IirFilter`]): owns a normalized
//!   `(a, b)` coefficient pair, validates it, and evaluates the difference
//!   equation over streamed or batched data with internal history.
//!
//! Data flows one way:
//!
//! ```text
//! parameters -> analog design -> bilinear transform -> (a, b) -> engine -> output
//! ```
//!
//! Everything is generic over a single real floating type, so the same
//! design code serves `f32` and `f64` instantiations. All computation is
//! single-threaded, synchronous and allocation-light; complex numbers only
//! appear as intermediates inside one design pass.
//!
//! ## Example
//!
//! ```rust
//! use butterfilt::{Butterworth, Filter};
//!
//! // 4th-order lowpass, 1 kHz cutoff at 8 kHz sample rate
//! let mut lp = Butterworth::lowpass(4, 1_000.0_f64, 8_000.0);
//!
//! let impulse: Vec<f64> = (0..64).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();
//! let response = lp.process_block(&impulse);
//! assert_eq!(response.len(), 64);
//!
//! // Unit gain at DC
//! assert!((lp.frequency_response(0.0).norm() - 1.0).abs() < 1e-9);
//! ```
//!
//! Sizing a design from an attenuation budget:
//!
//! ```rust
//! use butterfilt::Butterworth;
//!
//! // Pass band to 0.2 Nyquist within 3 dB, stop band from 0.4 Nyquist at 40 dB
//! let (order, cutoff) = Butterworth::<f64>::minimum_order(0.2, 0.4, 3.0, 40.0);
//! assert!(order >= 1);
//! assert!(cutoff > 0.2 && cutoff < 0.4);
//! ```

pub mod bilinear;
pub mod butterworth;
pub mod iir;
pub mod polynomial;
pub mod traits;
pub mod types;

pub use butterworth::Butterworth;
pub use iir::IirFilter;
pub use traits::{Filter, FilterType};
pub use types::{FilterError, FilterResult, FilterStatus};
