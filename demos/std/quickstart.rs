//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of korri-sleep:
//! - Wait on a delay and attach a continuation
//! - Coerce raw script-style numbers into durations
//! - Resolve an explicit deferred value from a timer callback
//!
//! The embassy time driver is chosen by the final application; this demo
//! plugs tokio in through the `HostTimer` trait instead.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use futures_util::FutureExt;
use korri_sleep::{resolve_after, sleep_on, DeferredSlot, HostTimer, Millis};
use tokio::time::{Duration, Instant};

/// Host timer backed by the tokio runtime.
struct TokioTimer;

impl HostTimer for TokioTimer {
    async fn delay_ms(&mut self, millis: u32) {
        tokio::time::sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[tokio::main]
async fn main() {
    println!("=== korri-sleep Quickstart ===\n");
    let mut timer = TokioTimer;

    // ======================================================================
    // 1. Delay, then run a continuation
    // ======================================================================
    println!("1. Sleeping 500 ms");

    let start = Instant::now();
    let message = sleep_on(&mut timer, 500u32)
        .map(|()| "continuation ran")
        .await;
    println!("   {} after {:?}\n", message, start.elapsed());

    // ======================================================================
    // 2. Raw numbers from a scripting host
    // ======================================================================
    println!("2. Coercing raw numbers");

    for raw in [250.7, -40.0, f64::NAN] {
        let lossy = Millis::from_f64_lossy(raw);
        let strict = Millis::try_from(raw);
        println!("   {raw:>7} -> lossy {lossy}, strict {strict:?}");
    }
    println!();

    // ======================================================================
    // 3. Deferred value resolved by a timer callback
    // ======================================================================
    println!("3. Deferred value");

    let slot = DeferredSlot::<CriticalSectionRawMutex>::new();
    let (resolver, deferred) = match slot.split() {
        Ok(parts) => parts,
        Err(e) => {
            println!("   Error: {}", e);
            return;
        }
    };

    let start = Instant::now();
    let ((), elapsed) = tokio::join!(
        resolve_after(&mut timer, 300u32, resolver),
        deferred.on_fulfilled(|| start.elapsed()),
    );
    println!("   Fulfilled after {:?}", elapsed);

    println!("\n=== Done ===");
}
