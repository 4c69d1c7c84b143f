//! Error type shared by the Goertzel filters and the free functions.

/// Errors that can occur while constructing or running a Goertzel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoertzelError {
    /// The target frequency is at or above the Nyquist limit (`fsamp / 2`),
    /// or is NaN.
    InvalidFrequency,
    /// The sample rate is zero, negative or not finite.
    InvalidSampleRate,
    /// The window length is zero or cannot be represented exactly in the
    /// sample type.
    InvalidWindowSize,
}

/// Display implementation for [`GoertzelError`] providing human-readable messages.
impl core::fmt::Display for GoertzelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GoertzelError::InvalidFrequency => {
                write!(f, "target frequency must be below half the sample rate")
            }
            GoertzelError::InvalidSampleRate => {
                write!(f, "sample rate must be finite and positive")
            }
            GoertzelError::InvalidWindowSize => {
                write!(f, "window must contain at least one sample")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GoertzelError {}
