//! Sample-by-sample Goertzel filter producing one reading per window.

use alloc::vec::Vec;

use crate::error::GoertzelError;
use crate::goertzel::{self, State};
use crate::num::Float;

/// Windowed streaming Goertzel filter.
///
/// Samples arrive one at a time through
/// [`process_sample`](Self::process_sample). Every `nsamp`-th sample completes
/// a window and yields a dBm reading; all other calls yield `None`.
///
/// Completing a window resets the sample counter but not the recurrence
/// state, so each window continues from the previous window's final state.
/// Consecutive readings are therefore not independent measurements. Use
/// [`restart`](Self::restart) between windows when they must be.
///
/// ```
/// use goertzel_dbm::stream::GoertzelStream;
///
/// let mut stream = GoertzelStream::<f64>::new(2000.0, 8000.0, 4).unwrap();
/// assert_eq!(stream.process_sample(0.0), None);
/// assert_eq!(stream.process_sample(1.0), None);
/// assert_eq!(stream.process_sample(0.0), None);
/// let dbm = stream.process_sample(-1.0).unwrap();
/// assert!(dbm.is_finite());
/// assert_eq!(stream.pending(), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GoertzelStream<T: Float = f64> {
    freq: T,
    fsamp: T,
    koef: T,
    nsamp: usize,
    /// `nsamp` converted once at construction.
    nsamp_t: T,
    state: State<T>,
    count: usize,
}

impl<T: Float> GoertzelStream<T> {
    /// Create a streaming filter for `freq` at sample rate `fsamp` that
    /// reports once every `nsamp` samples.
    ///
    /// # Errors
    /// - [`GoertzelError::InvalidWindowSize`] if `nsamp` is zero or too large
    ///   to be represented exactly in `T`.
    /// - [`GoertzelError::InvalidFrequency`] / [`GoertzelError::InvalidSampleRate`]
    ///   under the same rules as [`crate::filter::GoertzelFilter::new`].
    pub fn new(freq: T, fsamp: T, nsamp: usize) -> Result<Self, GoertzelError> {
        let nsamp_t = goertzel::window_len::<T>(nsamp)?;
        goertzel::validate(freq, fsamp)?;
        let koef = goertzel::calc_koef(freq, fsamp);
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "goertzel: stream f={:?} fs={:?} nsamp={} koef={:?}",
            freq,
            fsamp,
            nsamp,
            koef
        );
        Ok(Self {
            freq,
            fsamp,
            koef,
            nsamp,
            nsamp_t,
            state: State::zero(),
            count: 0,
        })
    }

    /// Feed one sample. Returns the dBm reading if this sample completed a
    /// window, `None` otherwise.
    #[inline]
    pub fn process_sample(&mut self, sample: T) -> Option<T> {
        self.state = goertzel::advance(sample, self.koef, self.state);
        self.count += 1;
        if self.count < self.nsamp {
            return None;
        }
        self.count = 0;
        let reading = goertzel::dbm_n(self.koef, self.state, self.nsamp_t);
        #[cfg(feature = "verbose-logging")]
        log::trace!("goertzel: window complete, {:?} dBm", reading);
        Some(reading)
    }

    /// Feed a whole chunk sample by sample, appending every completed reading
    /// to `out`. Returns the number of readings appended.
    pub fn process_block(&mut self, samples: &[T], out: &mut Vec<T>) -> usize {
        let before = out.len();
        out.extend(samples.iter().filter_map(|&s| self.process_sample(s)));
        out.len() - before
    }

    /// Zero the recurrence state. The sample counter keeps its value, so the
    /// current window still completes after the remaining samples.
    pub fn reset(&mut self) {
        self.state = State::zero();
    }

    /// Zero both the recurrence state and the sample counter.
    pub fn restart(&mut self) {
        self.state = State::zero();
        self.count = 0;
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

    /// Window length in samples.
    pub fn nsamp(&self) -> usize {
        self.nsamp
    }

    /// Samples received since the last completed window.
    pub fn pending(&self) -> usize {
        self.count
    }

    pub fn state(&self) -> State<T> {
        self.state
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_counter_wraps() {
        let mut s = GoertzelStream::new(1000.0f64, 8000.0, 3).unwrap();
        assert_eq!(s.process_sample(1.0), None);
        assert_eq!(s.pending(), 1);
        assert_eq!(s.process_sample(1.0), None);
        assert!(s.process_sample(1.0).is_some());
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert_eq!(
            GoertzelStream::new(1000.0f64, 8000.0, 0).unwrap_err(),
            GoertzelError::InvalidWindowSize
        );
    }
}
