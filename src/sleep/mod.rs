//! The delay primitive: a future that completes, with no payload, once at
//! least the requested number of milliseconds has elapsed.
//!
//! [`sleep`] runs on the embassy time driver the application links (a HAL
//! driver on a microcontroller, `embassy-time/std` on a desktop host,
//! `embassy-time/wasm` in a browser where wake-ups go through
//! `setTimeout`). [`sleep_on`] expresses the same contract against any
//! [`HostTimer`].
//!
//! # Guarantees
//!
//! * The deadline is captured when the future is created, not when it is
//!   first polled.
//! * The first poll never completes, even for a zero delay: a zero delay
//!   resolves on the next scheduling opportunity.
//! * Completion happens exactly once; polling a finished [`Sleep`] keeps
//!   returning `Poll::Ready(())`.
//!
//! There is no cancellation: dropping the future only stops observing it.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn demo() {
//! use futures_util::FutureExt;
//! use korri_sleep::sleep;
//!
//! sleep(5000u32)
//!     .map(|()| {
//!         // Stuff here
//!     })
//!     .await;
//! # }
//! ```


use core::fmt;
use core::future::{poll_fn, Future};
use core::pin::Pin;
use core::task::{Context, Poll};

use embassy_time::{Instant, Timer};
use futures_util::future::FusedFuture;

use crate::millis::Millis;
use crate::timer::HostTimer;

/// Lifecycle of a deferred delay. There is no failure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepState {
    Pending,
    Fulfilled,
}

/// Future returned by [`sleep`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Sleep {
    timer: Timer,
    millis: Millis,
    deadline: Instant,
    polled: bool,
    state: SleepState,
}

/// Start a delay of `millis` milliseconds on the embassy time driver.
///
/// Accepts anything convertible into [`Millis`]; negative integers resolve
/// like a zero delay.
pub fn sleep(millis: impl Into<Millis>) -> Sleep {
    Sleep::new(millis.into())
}

impl Sleep {
    fn new(millis: Millis) -> Self {
        let deadline = Instant::now() + millis.as_duration();

        #[cfg(feature = "defmt")]
        defmt::trace!("Sleep scheduled: {} ms", millis.get());

        Self {
            timer: Timer::at(deadline),
            millis,
            deadline,
            polled: false,
            state: SleepState::Pending,
        }
    }

    /// Requested delay.
    pub fn millis(&self) -> Millis {
        self.millis
    }

    /// Instant after which the future may complete.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn state(&self) -> SleepState {
        self.state
    }

    pub fn is_fulfilled(&self) -> bool {
        self.state == SleepState::Fulfilled
    }
}

impl Future for Sleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();

        if this.state == SleepState::Fulfilled {
            return Poll::Ready(());
        }

        let timer = Pin::new(&mut this.timer).poll(cx);

        // embassy's `Timer` already skips its first poll; this flag keeps the
        // guarantee independent of that driver detail.
        if !this.polled {
            this.polled = true;
            if timer.is_ready() || Instant::now() >= this.deadline {
                cx.waker().wake_by_ref();
            }
            return Poll::Pending;
        }

        match timer {
            Poll::Ready(()) => {
                this.state = SleepState::Fulfilled;

                #[cfg(feature = "defmt")]
                defmt::trace!("Sleep fulfilled after {} ms", this.millis.get());

                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl fmt::Debug for Sleep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sleep")
            .field("millis", &self.millis)
            .field("deadline", &self.deadline)
            .field("state", &self.state)
            .finish()
    }
}

impl FusedFuture for Sleep {
    fn is_terminated(&self) -> bool {
        self.is_fulfilled()
    }
}

/// Wait `millis` milliseconds on an arbitrary [`HostTimer`].
///
/// A zero delay still yields once before completing.
pub async fn sleep_on<T: HostTimer>(timer: &mut T, millis: impl Into<Millis>) {
    let millis = millis.into();

    if millis.is_zero() {
        let mut yielded = false;
        poll_fn(|cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await;
    }

    timer.delay_ms(millis.get()).await;
}
