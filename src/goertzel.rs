//! Goertzel algorithm: single-frequency power detector reporting dBm
//! no_std compatible, allocation free
//!
//! The building blocks here are pure functions. [`calc_koef`] turns a target
//! frequency into the filter coefficient, [`kernel`] (or [`advance`] for a
//! single sample) runs the second-order recurrence, and [`dbm`] converts the
//! final recurrence state into a decibel-milliwatt reading. The stateful
//! wrappers in [`crate::filter`] and [`crate::stream`] only own a [`State`]
//! and delegate to these.

use core::cmp::Ordering;

use crate::error::GoertzelError;
use crate::num::Float;

/// Smallest estimated amplitude before applying the logarithm.
///
/// Anything below is treated as silence and clamped, so the reading stays
/// finite instead of becoming `-inf` or `NaN`.
pub const EPSILON: f64 = 1e-9;

/// Reference impedance of the audio/telephony dBm convention, in ohms.
pub const IMPEDANCE_OHMS: f64 = 600.0;

/// The two most recent intermediate values of the Goertzel recurrence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct State<T: Float> {
    /// Previous result.
    pub v_n1: T,
    /// Result before the previous.
    pub v_n2: T,
}

impl<T: Float> State<T> {
    pub fn new(v_n1: T, v_n2: T) -> Self {
        Self { v_n1, v_n2 }
    }
    pub fn zero() -> Self {
        Self {
            v_n1: T::zero(),
            v_n2: T::zero(),
        }
    }
}

impl<T: Float> Default for State<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Calculate the Goertzel coefficient `2·cos(2π·freq/fsamp)`.
///
/// No range checking happens here; see [`validate`]. For
/// `0 <= freq < fsamp / 2` the result lies in `[-2, 2]`.
#[inline]
pub fn calc_koef<T: Float>(freq: T, fsamp: T) -> T {
    let two = T::from_f64(2.0);
    two * (two * T::pi() * freq / fsamp).cos()
}

/// Check the construction-time parameters shared by both filter types.
///
/// # Errors
/// - [`GoertzelError::InvalidSampleRate`] if `fsamp` is not finite or not
///   strictly positive.
/// - [`GoertzelError::InvalidFrequency`] unless `freq < fsamp / 2`. A NaN
///   frequency never compares below the limit and is rejected as well.
pub fn validate<T: Float>(freq: T, fsamp: T) -> Result<(), GoertzelError> {
    if !fsamp.is_finite() || fsamp.partial_cmp(&T::zero()) != Some(Ordering::Greater) {
        #[cfg(feature = "verbose-logging")]
        log::debug!("goertzel: rejecting sample rate {:?}", fsamp);
        return Err(GoertzelError::InvalidSampleRate);
    }
    let nyquist = fsamp / T::from_f64(2.0);
    if freq.partial_cmp(&nyquist) != Some(Ordering::Less) {
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "goertzel: rejecting frequency {:?}, Nyquist limit is {:?}",
            freq,
            nyquist
        );
        return Err(GoertzelError::InvalidFrequency);
    }
    Ok(())
}

/// Advance the recurrence by exactly one sample.
#[inline(always)]
pub fn advance<T: Float>(sample: T, koef: T, state: State<T>) -> State<T> {
    State {
        v_n1: koef * state.v_n1 - state.v_n2 + sample,
        v_n2: state.v_n1,
    }
}

/// The "kernel" of the Goertzel recursive calculation.
///
/// Runs every sample of `samples`, in order, through the recurrence starting
/// from `state` and returns the new state. An empty slice returns `state`
/// unchanged. The caller is responsible for keeping the result.
pub fn kernel<T: Float>(samples: &[T], koef: T, state: State<T>) -> State<T> {
    samples
        .iter()
        .fold(state, |acc, &sample| advance(sample, koef, acc))
}

/// Convert a window length into the sample type, rejecting empty windows.
pub(crate) fn window_len<T: Float>(nsamp: usize) -> Result<T, GoertzelError> {
    if nsamp == 0 {
        return Err(GoertzelError::InvalidWindowSize);
    }
    T::from_usize(nsamp).ok_or(GoertzelError::InvalidWindowSize)
}

/// `v_n1² + v_n2² − koef·v_n1·v_n2`, floored at [`EPSILON`].
#[inline]
fn amplitude<T: Float>(koef: T, state: State<T>) -> T {
    let State { v_n1, v_n2 } = state;
    let amp_x = v_n1 * v_n1 + v_n2 * v_n2 - koef * v_n1 * v_n2;
    let floor = T::from_f64(EPSILON);
    // NaN falls through unchanged, only real values are clamped
    if amp_x < floor {
        floor
    } else {
        amp_x
    }
}

/// dBm reading for a window length already converted to `T`.
#[inline]
pub(crate) fn dbm_n<T: Float>(koef: T, state: State<T>, n: T) -> T {
    let amp_x = amplitude(koef, state);
    T::from_f64(10.0)
        * (T::from_f64(2.0) * amp_x * T::from_f64(1000.0) / (T::from_f64(IMPEDANCE_OHMS) * n * n))
            .log10()
}

/// Calculate the 'dBm' (decibel-milliwatts) of the signal that produced
/// `state` over `nsamp` samples, using the 600 ohm telephony reference.
///
/// Near-zero power is clamped to [`EPSILON`], so silence yields a large
/// negative but finite reading.
///
/// # Errors
/// [`GoertzelError::InvalidWindowSize`] if `nsamp` is zero or not exactly
/// representable in `T`.
pub fn dbm<T: Float>(koef: T, state: State<T>, nsamp: usize) -> Result<T, GoertzelError> {
    let n = window_len::<T>(nsamp)?;
    Ok(dbm_n(koef, state, n))
}

/// Normalized power of the signal that produced `state` over `nsamp`
/// samples: the floored amplitude divided by `nsamp²`.
pub fn power<T: Float>(koef: T, state: State<T>, nsamp: usize) -> Result<T, GoertzelError> {
    let n = window_len::<T>(nsamp)?;
    Ok(power_n(koef, state, n))
}

#[inline]
pub(crate) fn power_n<T: Float>(koef: T, state: State<T>, n: T) -> T {
    amplitude(koef, state) / (n * n)
}

/// Convert a normalized [`power`] value into dBm.
pub fn power_to_dbm<T: Float>(power: T) -> T {
    T::from_f64(10.0)
        * (T::from_f64(2.0) * power * T::from_f64(1000.0) / T::from_f64(IMPEDANCE_OHMS)).log10()
}

/// Process `samples` from a zero state with the given coefficient and return
/// the dBm of the signal they represent.
///
/// # Errors
/// [`GoertzelError::InvalidWindowSize`] if `samples` is empty.
pub fn process_samples_k<T: Float>(samples: &[T], koef: T) -> Result<T, GoertzelError> {
    let n = window_len::<T>(samples.len())?;
    let state = kernel(samples, koef, State::zero());
    Ok(dbm_n(koef, state, n))
}

/// One-shot Goertzel: compute the coefficient for `freq` at `fsamp`, process
/// `samples` from a zero state and return the dBm.
///
/// Like [`calc_koef`], this does not enforce the Nyquist limit. Use
/// [`crate::filter::GoertzelFilter`] when the parameters come from outside.
pub fn process_samples<T: Float>(samples: &[T], freq: T, fsamp: T) -> Result<T, GoertzelError> {
    process_samples_k(samples, calc_koef(freq, fsamp))
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_advance_matches_kernel() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples: Vec<f64> = (0..64).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let koef = calc_koef(697.0, 8000.0);
        let mut state = State::zero();
        for &s in &samples {
            state = advance(s, koef, state);
        }
        assert_eq!(state, kernel(&samples, koef, State::zero()));
    }

    #[test]
    fn test_amplitude_floor() {
        assert_eq!(amplitude(1.0f64, State::zero()), EPSILON);
        // v_n1 == v_n2 with koef 2 cancels exactly
        assert_eq!(amplitude(2.0f64, State::new(3.0, 3.0)), EPSILON);
    }

    #[test]
    fn test_window_len_zero() {
        assert_eq!(
            window_len::<f64>(0).unwrap_err(),
            GoertzelError::InvalidWindowSize
        );
    }

    proptest! {
        #[test]
        fn prop_koef_in_range(fsamp in 1.0f64..192_000.0, ratio in 0.0f64..0.5) {
            let freq = fsamp * ratio;
            let k = calc_koef(freq, fsamp);
            prop_assert!((-2.0..=2.0).contains(&k));
        }

        #[test]
        fn prop_power_to_dbm_agrees(ref samples in proptest::collection::vec(-1.0f64..1.0, 1..256)) {
            let koef = calc_koef(1000.0, 8000.0);
            let state = kernel(samples, koef, State::zero());
            let direct = dbm(koef, state, samples.len()).unwrap();
            let split = power_to_dbm(power(koef, state, samples.len()).unwrap());
            prop_assert!((direct - split).abs() < 1e-9);
        }
    }
}
