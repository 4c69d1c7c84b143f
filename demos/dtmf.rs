//! DTMF detection example.
//!
//! Runs one streaming filter per DTMF frequency over a synthesized key press
//! and picks the strongest row and column tone in each 205-sample block.

use goertzel_dbm::GoertzelStream;

const SAMPLE_RATE: f64 = 8000.0;
const BLOCK: usize = 205;
const ROWS: [f64; 4] = [697.0, 770.0, 852.0, 941.0];
const COLS: [f64; 4] = [1209.0, 1336.0, 1477.0, 1633.0];
const KEYS: [[char; 4]; 4] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

fn tone(low: f64, high: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE;
            0.5 * (2.0 * std::f64::consts::PI * low * t).sin()
                + 0.5 * (2.0 * std::f64::consts::PI * high * t).sin()
        })
        .collect()
}

fn strongest(levels: &[f64]) -> usize {
    levels
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &l)| if l > best.1 { (i, l) } else { best })
        .0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DTMF example ===\n");

    let signal = tone(ROWS[2], COLS[1], 3 * BLOCK);
    let mut rows = ROWS
        .iter()
        .map(|&f| GoertzelStream::new(f, SAMPLE_RATE, BLOCK))
        .collect::<Result<Vec<_>, _>>()?;
    let mut cols = COLS
        .iter()
        .map(|&f| GoertzelStream::new(f, SAMPLE_RATE, BLOCK))
        .collect::<Result<Vec<_>, _>>()?;

    let mut row_levels = [0.0; 4];
    let mut col_levels = [0.0; 4];
    for &sample in &signal {
        let mut complete = false;
        for (flt, level) in rows.iter_mut().zip(row_levels.iter_mut()) {
            if let Some(dbm) = flt.process_sample(sample) {
                *level = dbm;
                complete = true;
            }
        }
        for (flt, level) in cols.iter_mut().zip(col_levels.iter_mut()) {
            if let Some(dbm) = flt.process_sample(sample) {
                *level = dbm;
            }
        }
        if complete {
            let (r, c) = (strongest(&row_levels), strongest(&col_levels));
            println!(
                "Key {} (row {:.1} dBm, column {:.1} dBm)",
                KEYS[r][c], row_levels[r], col_levels[c]
            );
            // independent measurement per block
            rows.iter_mut().chain(cols.iter_mut()).for_each(|f| f.restart());
        }
    }
    Ok(())
}
