//! Host timer abstraction: the facility that wakes a waiting task once a
//! delay has elapsed.

use embassy_time::Timer;

/// Wake-up facility provided by the host: an embassy driver, a tokio
/// runtime, or `setTimeout` behind a wasm binding.
///
/// The returned future must not complete before `millis` milliseconds have
/// elapsed since it was first polled.
pub trait HostTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(
        &'a mut self,
        millis: u32,
    ) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`HostTimer`] backed by the embassy time driver linked into the application.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyTimer;

impl HostTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        Timer::after_millis(millis as u64).await;
    }
}
