//! One-shot deferred value built on [`embassy_sync::signal::Signal`].
//!
//! A [`DeferredSlot`] lives in caller-provided storage (a `static`, a
//! `StaticCell`, or a local that outlives both halves). Splitting it hands
//! out a [`Resolver`], typically moved into a timer task, and a
//! [`Deferred`] future awaited elsewhere. Resolution consumes the resolver,
//! so a deferred value is fulfilled at most once. No allocation is
//! performed.

use core::cell::Cell;
use core::future::Future;
use core::pin::{pin, Pin};
use core::task::{Context, Poll};

use embassy_sync::{
    blocking_mutex::{raw::RawMutex, Mutex},
    signal::Signal,
};
use futures_util::future::{FutureExt, Map};

use crate::error::DeferredError;
use crate::millis::Millis;
use crate::sleep::sleep_on;
use crate::timer::HostTimer;

/// Observable state of a deferred value. There is no rejected state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeferredState {
    Pending,
    Fulfilled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Vacant,
    Pending,
    Fulfilled,
}

/// Storage shared by a [`Resolver`] / [`Deferred`] pair.
pub struct DeferredSlot<M: RawMutex> {
    state: Mutex<M, Cell<SlotState>>,
    signal: Signal<M, ()>,
}

impl<M: RawMutex> DeferredSlot<M> {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(SlotState::Vacant)),
            signal: Signal::new(),
        }
    }

    /// Hand out the resolver and the deferred value. Only the first call succeeds.
    pub fn split(&self) -> Result<(Resolver<'_, M>, Deferred<'_, M>), DeferredError> {
        let claimed = self.state.lock(|state| {
            if state.get() == SlotState::Vacant {
                state.set(SlotState::Pending);
                true
            } else {
                false
            }
        });

        if !claimed {
            return Err(DeferredError::AlreadySplit);
        }

        Ok((Resolver { slot: self }, Deferred { slot: self }))
    }

    fn load(&self) -> SlotState {
        self.state.lock(|state| state.get())
    }
}

impl<M: RawMutex> Default for DeferredSlot<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write half: fulfils the paired [`Deferred`] exactly once.
pub struct Resolver<'a, M: RawMutex> {
    slot: &'a DeferredSlot<M>,
}

impl<M: RawMutex> Resolver<'_, M> {
    pub fn resolve(self) {
        self.slot.state.lock(|state| state.set(SlotState::Fulfilled));
        self.slot.signal.signal(());

        #[cfg(feature = "defmt")]
        defmt::debug!("Deferred value fulfilled");
    }
}

/// Read half: a future completing with `()` once the resolver ran.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Deferred<'a, M: RawMutex> {
    slot: &'a DeferredSlot<M>,
}

impl<'a, M: RawMutex> Deferred<'a, M> {
    pub fn state(&self) -> DeferredState {
        match self.slot.load() {
            SlotState::Fulfilled => DeferredState::Fulfilled,
            _ => DeferredState::Pending,
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        self.state() == DeferredState::Fulfilled
    }

    /// Attach a continuation that runs once the value is fulfilled.
    ///
    /// The returned future yields the continuation's result.
    pub fn on_fulfilled<R, F>(self, continuation: F) -> Map<Self, impl FnOnce(()) -> R>
    where
        F: FnOnce() -> R,
    {
        self.map(move |()| continuation())
    }
}

impl<M: RawMutex> Future for Deferred<'_, M> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.slot.load() == SlotState::Fulfilled {
            return Poll::Ready(());
        }
        pin!(self.slot.signal.wait()).poll(cx)
    }
}

/// Timer callback for a deferred value: wait `millis` on `timer`, then resolve.
pub async fn resolve_after<M, T>(
    timer: &mut T,
    millis: impl Into<Millis>,
    resolver: Resolver<'_, M>,
) where
    M: RawMutex,
    T: HostTimer,
{
    let millis = millis.into();

    #[cfg(feature = "defmt")]
    defmt::debug!("Resolving deferred value in {} ms", millis.get());

    sleep_on(timer, millis).await;
    resolver.resolve();
}
