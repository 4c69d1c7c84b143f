//! Goertzel algorithm example.
//!
//! Measures the dBm level of a target frequency in a short signal, first with
//! the one-shot function and then with a persistent batch filter.

use goertzel_dbm::{process_samples, GoertzelFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Goertzel example ===\n");

    let samples = [0.0, 1.0, 0.0, -1.0];
    let sample_rate = 8000.0;
    let target_freq = 2000.0;

    let level = process_samples(&samples, target_freq, sample_rate)?;
    println!("One-shot level at {target_freq} Hz: {level:.3} dBm");

    let mut flt = GoertzelFilter::new(target_freq, sample_rate)?;
    println!("{flt}");
    let level = flt.process(&samples)?;
    println!("{flt}");
    println!("Filter level at {target_freq} Hz: {level:.3} dBm");
    Ok(())
}
