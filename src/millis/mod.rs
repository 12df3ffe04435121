//! Millisecond durations accepted by the delay primitive.
//!
//! Every integer and duration type converts infallibly: negative values
//! clamp to zero and oversized values saturate at [`Millis::MAX`]. Raw
//! floating-point values coming from a scripting host go through
//! [`Millis::from_f64_lossy`] (lenient, never fails) or `TryFrom<f64>`
//! (strict).


use crate::error::MillisError;
use core::fmt;

/// Non-negative duration expressed in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(u32);

impl Millis {
    /// Zero-length delay: resolves on the next scheduling opportunity.
    pub const ZERO: Self = Self(0);
    /// Longest representable delay (~49.7 days).
    pub const MAX: Self = Self(u32::MAX);

    #[inline]
    pub const fn new(millis: u32) -> Self {
        Self(millis)
    }

    /// Return the raw millisecond count.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Convert into an `embassy_time::Duration`.
    #[inline]
    pub const fn as_duration(&self) -> embassy_time::Duration {
        embassy_time::Duration::from_millis(self.0 as u64)
    }

    /// Coerce any `f64` the way a scripting host coerces a timer delay.
    ///
    /// NaN and negative values become zero, fractions are truncated toward
    /// zero, and everything above `u32::MAX` (including `+inf`) saturates.
    pub fn from_f64_lossy(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Self::ZERO;
        }
        // `as` saturates on overflow and truncates the fractional part.
        Self(value as u32)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

impl From<u8> for Millis {
    fn from(value: u8) -> Self {
        Self(value as u32)
    }
}

impl From<u16> for Millis {
    fn from(value: u16) -> Self {
        Self(value as u32)
    }
}

impl From<u32> for Millis {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u64> for Millis {
    fn from(value: u64) -> Self {
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<usize> for Millis {
    fn from(value: usize) -> Self {
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<i32> for Millis {
    fn from(value: i32) -> Self {
        Self(value.max(0) as u32)
    }
}

impl From<i64> for Millis {
    fn from(value: i64) -> Self {
        Self(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }
}

impl From<embassy_time::Duration> for Millis {
    fn from(value: embassy_time::Duration) -> Self {
        Self::from(value.as_millis())
    }
}

impl From<core::time::Duration> for Millis {
    fn from(value: core::time::Duration) -> Self {
        Self(u32::try_from(value.as_millis()).unwrap_or(u32::MAX))
    }
}

impl From<Millis> for embassy_time::Duration {
    fn from(value: Millis) -> Self {
        value.as_duration()
    }
}

impl TryFrom<f64> for Millis {
    type Error = MillisError;

    /// Strict counterpart of [`Millis::from_f64_lossy`]: rejects what the
    /// lenient path would silently coerce. Fractions still truncate.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(MillisError::NotFinite);
        }
        if value < 0.0 {
            return Err(MillisError::Negative);
        }
        if value >= (u32::MAX as f64) + 1.0 {
            return Err(MillisError::OutOfRange { max: u32::MAX });
        }
        Ok(Self(value as u32))
    }
}
