//! Batch Goertzel filter: persistent recurrence state across `process` calls.

use core::fmt;

use crate::error::GoertzelError;
use crate::goertzel::{self, State};
use crate::num::Float;

/// A Goertzel filter tuned to one frequency, processing whole windows.
///
/// The recurrence state survives between [`process`](Self::process) calls, so
/// a long signal can be fed in chunks. The dBm reading is always normalized by
/// the length of the latest chunk only. Call [`reset`](Self::reset) to start a
/// new measurement.
///
/// ```
/// use goertzel_dbm::filter::GoertzelFilter;
///
/// let mut flt = GoertzelFilter::<f64>::new(2000.0, 8000.0).unwrap();
/// let dbm = flt.process(&[0.0, 1.0, 0.0, -1.0]).unwrap();
/// assert!(dbm.is_finite());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GoertzelFilter<T: Float = f64> {
    freq: T,
    fsamp: T,
    koef: T,
    state: State<T>,
}

impl<T: Float> GoertzelFilter<T> {
    /// Create a filter for target frequency `freq` on a signal sampled at
    /// `fsamp`.
    ///
    /// # Errors
    /// [`GoertzelError::InvalidFrequency`] if `freq >= fsamp / 2`,
    /// [`GoertzelError::InvalidSampleRate`] if `fsamp` is not a finite
    /// positive number.
    pub fn new(freq: T, fsamp: T) -> Result<Self, GoertzelError> {
        goertzel::validate(freq, fsamp)?;
        let koef = goertzel::calc_koef(freq, fsamp);
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "goertzel: batch filter f={:?} fs={:?} koef={:?}",
            freq,
            fsamp,
            koef
        );
        Ok(Self {
            freq,
            fsamp,
            koef,
            state: State::zero(),
        })
    }

    /// Resets the filter so that we can start it over again.
    pub fn reset(&mut self) {
        self.state = State::zero();
    }

    /// Run `samples` through the filter and return the dBm of the signal at
    /// the filter frequency.
    ///
    /// # Errors
    /// [`GoertzelError::InvalidWindowSize`] if `samples` is empty. The state is
    /// left untouched in that case.
    pub fn process(&mut self, samples: &[T]) -> Result<T, GoertzelError> {
        let n = goertzel::window_len::<T>(samples.len())?;
        self.state = goertzel::kernel(samples, self.koef, self.state);
        Ok(goertzel::dbm_n(self.koef, self.state, n))
    }

    /// Like [`process`](Self::process) but returns the normalized power
    /// instead of dBm. Convert with [`goertzel::power_to_dbm`].
    pub fn power(&mut self, samples: &[T]) -> Result<T, GoertzelError> {
        let n = goertzel::window_len::<T>(samples.len())?;
        self.state = goertzel::kernel(samples, self.koef, self.state);
        Ok(goertzel::power_n(self.koef, self.state, n))
    }

    pub fn freq(&self) -> T {
        self.freq
    }

    pub fn fsamp(&self) -> T {
        self.fsamp
    }

    pub fn koef(&self) -> T {
        self.koef
    }

    /// Current recurrence state.
    pub fn state(&self) -> State<T> {
        self.state
    }
}

impl<T: Float> fmt::Display for GoertzelFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GoertzelFilter: f={}, fs={}, k={}, Vn-1={}, Vn-2={}",
            self.freq, self.fsamp, self.koef, self.state.v_n1, self.state.v_n2
        )
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_empty_leaves_state() {
        let mut flt = GoertzelFilter::new(1000.0f32, 8000.0).unwrap();
        flt.process(&[1.0, -1.0, 0.5]).unwrap();
        let before = flt.state();
        assert_eq!(
            flt.process(&[]).unwrap_err(),
            GoertzelError::InvalidWindowSize
        );
        assert_eq!(flt.state(), before);
    }
}
