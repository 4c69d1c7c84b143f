// Test intent: verifies batch filter behavior including state persistence and reset.

use goertzel_dbm::goertzel::{calc_koef, kernel, State};
use goertzel_dbm::{process_samples, GoertzelError, GoertzelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn noise(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Frequencies at or above Nyquist are rejected at construction.
#[test]
fn nyquist_violation_fails() {
    assert!(matches!(
        GoertzelFilter::new(4000.0, 8000.0),
        Err(GoertzelError::InvalidFrequency)
    ));
    assert!(matches!(
        GoertzelFilter::new(4000.5, 8000.0),
        Err(GoertzelError::InvalidFrequency)
    ));
    assert!(matches!(
        GoertzelFilter::new(100.0, 0.0),
        Err(GoertzelError::InvalidSampleRate)
    ));
    assert!(GoertzelFilter::new(3999.0, 8000.0).is_ok());
}

/// Construction stores the parameters and a zero state.
#[test]
fn new_filter_accessors() {
    let flt = GoertzelFilter::new(697.0, 8000.0).unwrap();
    assert_eq!(flt.freq(), 697.0);
    assert_eq!(flt.fsamp(), 8000.0);
    assert_eq!(flt.koef(), calc_koef(697.0, 8000.0));
    assert_eq!(flt.state(), State::zero());
}

/// A fresh filter matches the one-shot free function bit for bit.
#[test]
fn fresh_filter_equals_free_function() {
    let samples = noise(1, 205);
    let mut flt = GoertzelFilter::new(770.0, 8000.0).unwrap();
    let a = flt.process(&samples).unwrap();
    let b = process_samples(&samples, 770.0, 8000.0).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

/// State carries over between calls while dBm uses the latest chunk length.
#[test]
fn state_persists_across_calls() {
    let samples = noise(2, 300);
    let (first, second) = samples.split_at(100);
    let mut flt = GoertzelFilter::new(1336.0, 8000.0).unwrap();
    flt.process(first).unwrap();
    let chunked = flt.process(second).unwrap();

    let koef = flt.koef();
    assert_eq!(flt.state(), kernel(&samples, koef, State::zero()));
    let expected = goertzel_dbm::goertzel::dbm(koef, flt.state(), second.len()).unwrap();
    assert_eq!(chunked.to_bits(), expected.to_bits());
}

/// Reset makes the filter behave like a brand-new instance.
#[test]
fn reset_matches_new_instance() {
    let warmup = noise(3, 64);
    let samples = noise(4, 205);
    let mut used = GoertzelFilter::new(852.0, 8000.0).unwrap();
    used.process(&warmup).unwrap();
    let koef = used.koef();
    used.reset();
    assert_eq!(used.state(), State::zero());
    assert_eq!(used.koef(), koef);

    let mut fresh = GoertzelFilter::new(852.0, 8000.0).unwrap();
    assert_eq!(
        used.process(&samples).unwrap().to_bits(),
        fresh.process(&samples).unwrap().to_bits()
    );
}

/// Empty input is rejected and does not disturb the state.
#[test]
fn empty_window_rejected() {
    let mut flt = GoertzelFilter::new(941.0, 8000.0).unwrap();
    flt.process(&noise(5, 10)).unwrap();
    let before = flt.state();
    assert_eq!(flt.process(&[]), Err(GoertzelError::InvalidWindowSize));
    assert_eq!(flt.power(&[]), Err(GoertzelError::InvalidWindowSize));
    assert_eq!(flt.state(), before);
}

/// The normalized power path converts to the same dBm reading.
#[test]
fn power_path_agrees() {
    let samples = noise(6, 205);
    let mut a = GoertzelFilter::new(1477.0, 8000.0).unwrap();
    let mut b = a.clone();
    let direct = a.process(&samples).unwrap();
    let via_power = goertzel_dbm::goertzel::power_to_dbm(b.power(&samples).unwrap());
    assert!((direct - via_power).abs() < 1e-9);
    assert_eq!(a.state(), b.state());
}

/// The power path updates the state once and normalizes by the chunk length.
#[test]
fn power_matches_free_estimator() {
    let warmup = noise(8, 50);
    let samples = noise(9, 205);
    let mut flt = GoertzelFilter::new(1209.0, 8000.0).unwrap();
    flt.power(&warmup).unwrap();
    let reading = flt.power(&samples).unwrap();
    let koef = flt.koef();
    let mut all = warmup.clone();
    all.extend_from_slice(&samples);
    assert_eq!(flt.state(), kernel(&all, koef, State::zero()));
    let expected = goertzel_dbm::goertzel::power(koef, flt.state(), samples.len()).unwrap();
    assert_eq!(reading.to_bits(), expected.to_bits());
}

/// Display shows the parameters and the running values.
#[test]
fn display_format() {
    let mut flt = GoertzelFilter::new(1000.0, 8000.0).unwrap();
    flt.process(&[1.0]).unwrap();
    let text = flt.to_string();
    assert!(text.starts_with("GoertzelFilter: f=1000, fs=8000, k="));
    assert!(text.ends_with("Vn-1=1, Vn-2=0"));
}

/// Independent instances can run on separate threads.
#[test]
fn filters_run_in_parallel() {
    let samples = noise(7, 410);
    let handles: Vec<_> = [697.0, 770.0, 852.0, 941.0]
        .into_iter()
        .map(|freq| {
            let samples = samples.clone();
            std::thread::spawn(move || {
                let mut flt = GoertzelFilter::new(freq, 8000.0).unwrap();
                flt.process(&samples).unwrap()
            })
        })
        .collect();
    for (freq, handle) in [697.0, 770.0, 852.0, 941.0].into_iter().zip(handles) {
        let threaded = handle.join().unwrap();
        let direct = process_samples(&samples, freq, 8000.0).unwrap();
        assert_eq!(threaded.to_bits(), direct.to_bits());
    }
}
