//! `korri-sleep` library: a promise-style delay primitive for `no_std`
//! async code. [`sleep`] returns a future that completes with `()` once at
//! least the requested number of milliseconds has elapsed. The crate also
//! exposes the host timer seam and an explicit one-shot deferred value for
//! code that wants to resolve a delay from a separate task.
#![no_std]
//==================================================================================
/// Explicit deferred/resolver pair fulfilled by a timer callback.
pub mod deferred;
/// Errors raised at the edges (strict duration conversion, slot reuse).
pub mod error;
/// Millisecond durations and host coercion rules.
pub mod millis;
/// The delay primitive.
pub mod sleep;
/// Host timer abstraction and its embassy implementation.
pub mod timer;
//==================================================================================
pub use deferred::{resolve_after, Deferred, DeferredSlot, DeferredState, Resolver};
pub use error::{DeferredError, MillisError};
pub use millis::Millis;
pub use sleep::{sleep, sleep_on, Sleep, SleepState};
pub use timer::{EmbassyTimer, HostTimer};
