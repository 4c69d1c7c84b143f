//! # goertzel-dbm - Goertzel tone detection for Rust
//!
//! A small `no_std` library implementing the Goertzel algorithm: a recursive
//! filter that measures the power of a signal at one target frequency
//! without computing a full spectrum. Typical uses are DTMF decoding and
//! single-tone level measurement.
//!
//! ## Features
//!
//! - **Pure building blocks**: coefficient, recurrence kernel and dBm
//!   estimator as free functions in [`goertzel`]
//! - **Batch filter** ([`GoertzelFilter`]) for whole sample windows
//! - **Streaming filter** ([`GoertzelStream`]) for one sample at a time,
//!   reporting once per completed window
//! - **Generic** over `f32` and `f64`, allocation-free hot paths
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`GoertzelError`] and
//!   use the standard library's float math; without it `cos`/`log10` come
//!   from `libm`
//! - `verbose-logging`: emit `log` records on construction and window
//!   completion
//! - `internal-tests`: property tests inside the crate
//!
//! ## Readings
//!
//! Results are in dBm under the audio/telephony 600 ohm convention. Silence
//! is clamped to a floor ([`goertzel::EPSILON`]) and produces a large negative
//! but finite value.
//!
//! ## Examples
//!
//! Run the demos with:
//! ```bash
//! cargo run --example goertzel
//! cargo run --example dtmf
//! cargo run --example embedded_example
//! cargo run --example verbose_logging --features verbose-logging
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Minimal float abstraction so every filter works on `f32` and `f64`.
pub mod num;

/// Error type returned by constructors and processing functions.
pub mod error;

/// Goertzel algorithm
///
/// Coefficient calculation, recurrence kernel and dBm power estimation.
pub mod goertzel;

/// Batch filter with persistent state.
pub mod filter;

/// Windowed sample-by-sample filter.
pub mod stream;

pub use error::GoertzelError;
pub use filter::GoertzelFilter;
pub use goertzel::{process_samples, process_samples_k, State};
pub use num::Float;
pub use stream::GoertzelStream;
