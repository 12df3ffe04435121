//! Error definitions shared across library modules.
//! The delay itself never fails: errors only describe misuse at the edges
//! (strict duration conversion, deferred slot reuse).
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised by the strict `f64` to [`Millis`](crate::millis::Millis) conversion.
pub enum MillisError {
    /// NaN or an infinite value.
    #[error("Duration is not a finite number")]
    NotFinite,
    /// Durations cannot go backwards.
    #[error("Duration is negative")]
    Negative,
    /// Value does not fit the 32-bit millisecond range.
    #[error("Duration exceeds {max} ms")]
    OutOfRange { max: u32 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while handing out a deferred value.
pub enum DeferredError {
    /// The slot already produced its resolver/deferred pair.
    #[error("Deferred slot already split")]
    AlreadySplit,
}
