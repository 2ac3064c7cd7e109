//! Remove a 50 Hz mains component from a synthetic sensor trace.
//!
//! Run with: cargo run --example mains_notch -p butterfilt

use butterfilt::{Butterworth, Filter};
use std::f64::consts::PI;

fn rms(samples: &[f64]) -> f64 {
    (samples.iter().map(|x| x * x).sum::<f64>() / samples.len() as f64).sqrt()
}

fn main() {
    let fs = 1_000.0;
    let n = 4_000;

    // 5 Hz signal of interest buried under 50 Hz mains hum
    let trace: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / fs;
            (2.0 * PI * 5.0 * t).sin() + 0.8 * (2.0 * PI * 50.0 * t).sin()
        })
        .collect();

    let mut notch = Butterworth::bandstop(3, 45.0, 55.0, fs);
    let cleaned = notch.process_block(&trace);

    // Skip the first half so the filter transient has settled
    let tail = n / 2;
    println!("input  RMS: {:.4}", rms(&trace[tail..]));
    println!("output RMS: {:.4}", rms(&cleaned[tail..]));
    println!(
        "hum rejection at 50 Hz: {:.1} dB",
        notch.magnitude_response_db(50.0)
    );
    println!(
        "signal band at 5 Hz:    {:.3} dB",
        notch.magnitude_response_db(5.0)
    );

    // Size a smoothing lowpass from an attenuation budget instead of
    // picking an order by hand: 3 dB ripple to 20 Hz, 40 dB down by 80 Hz.
    let nyquist = fs / 2.0;
    let (order, cutoff) = Butterworth::<f64>::minimum_order(20.0 / nyquist, 80.0 / nyquist, 3.0, 40.0);
    println!("\nsmoothing lowpass: order {order}, cutoff {:.2} Hz", cutoff * nyquist);

    let mut smooth = Butterworth::lowpass(order, cutoff * nyquist, fs);
    let smoothed = smooth.process_block(&cleaned);
    println!("smoothed RMS: {:.4}", rms(&smoothed[tail..]));
    println!(
        "residual hum after both stages: {:.1} dB",
        notch.magnitude_response_db(50.0) + smooth.magnitude_response_db(50.0)
    );
}
