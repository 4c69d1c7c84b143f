//! Embedded/MCU example for goertzel-dbm
//!
//! Uses `f32` and fixed-size stack buffers only, the way firmware would feed
//! an ADC block into the detector.

use goertzel_dbm::goertzel::{calc_koef, dbm, kernel, State};
use goertzel_dbm::GoertzelStream;

const FS: f32 = 8000.0;
const N: usize = 64;

fn main() {
    println!("=== goertzel-dbm Embedded Example ===\n");

    // Fake ADC block: a 1 kHz square-ish wave
    let mut block = [0.0f32; N];
    for (i, s) in block.iter_mut().enumerate() {
        *s = if (i / 4) % 2 == 0 { 0.5 } else { -0.5 };
    }

    // 1. Pure functions, no filter object
    println!("1. Kernel + estimator");
    let koef = calc_koef(1000.0, FS);
    let state = kernel(&block, koef, State::zero());
    if let Ok(level) = dbm(koef, state, N) {
        println!("   1000 Hz: {level:.2} dBm");
    }

    // 2. Streaming, one ADC sample per interrupt
    println!("2. Streaming");
    if let Ok(mut stream) = GoertzelStream::new(1000.0f32, FS, N) {
        for &s in &block {
            if let Some(level) = stream.process_sample(s) {
                println!("   window complete: {level:.2} dBm");
            }
        }
    }
}
