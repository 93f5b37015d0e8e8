//! Lock-free audio frame relay.
//!
//! Bridges an interrupt-driven sampling source to a cooperative polling
//! loop through a fixed set of frame slots with explicit ownership handoff.
//!
//! ```text
//! Sampling ISR                 FramePool (static)               Poll loop
//! ┌───────────────┐      ┌──────────┬──────────┬─────┐      ┌─────────────┐
//! │ on_sample_    │─────►│ Filling  │  Full    │ ... │─────►│ poll_next_  │
//! │ ready(sample) │      │ LEN×i16  │ LEN×i16  │     │      │ frame()     │
//! └───────────────┘      └──────────┴──────────┴─────┘      └─────────────┘
//! ```
//!
//! ## Components
//!
//! | Type | Context | Role |
//! |------|---------|------|
//! | [`FramePool`] | shared | Slot storage and state machine |
//! | [`CaptureProducer`] | interrupt | Writes samples, publishes full frames |
//! | [`FrameConsumer`] | polling | FIFO retrieval of complete frames |
//! | [`FrameGuard`] | polling | Scoped frame access, releases slot on drop |
//!
//! ## Safety Contract
//!
//! - Exactly ONE context may drive the [`CaptureProducer`] (the sampling
//!   interrupt).
//! - Exactly ONE context may drive the [`FrameConsumer`] (the main loop).
//! - These may run concurrently at different priorities. Synchronization is
//!   per-slot atomic state tags with acquire/release ordering; neither side
//!   ever blocks or waits on the other.
//!
//! [`FrameRelay::split`] enforces the single-producer/single-consumer
//! structure by borrowing the relay mutably for the lifetime of both halves.

pub mod consumer;
pub mod pool;
pub mod producer;

pub use consumer::{FrameConsumer, FrameGuard};
pub use pool::{FramePool, SlotState};
pub use producer::CaptureProducer;

use crate::constants::{FRAME_SAMPLES, RELAY_SLOTS};

/// A relay sized for the default detection engine window.
pub type WakeFrameRelay = FrameRelay<FRAME_SAMPLES, RELAY_SLOTS>;

/// Owns the slot pool and hands out the producer/consumer halves.
///
/// # Type Parameters
///
/// - `LEN`: Samples per frame (the detection window size).
/// - `N`: Number of slots. Must be ≥ 2.
///
/// # Example
///
/// ```ignore
/// static RELAY: StaticCell<WakeFrameRelay> = StaticCell::new();
///
/// let (producer, consumer) = RELAY.init(WakeFrameRelay::new()).split();
/// // move `producer` into the sampling ISR, `consumer` into the main loop
/// ```
pub struct FrameRelay<const LEN: usize, const N: usize> {
    pool: FramePool<LEN, N>,
}

impl<const LEN: usize, const N: usize> FrameRelay<LEN, N> {
    /// Create a new relay. All slots start empty and reusable.
    pub const fn new() -> Self {
        FrameRelay {
            pool: FramePool::new(),
        }
    }

    /// Split the relay into its producer and consumer halves.
    ///
    /// The mutable borrow guarantees at most one producer and one consumer
    /// exist at a time. Each half is `Send`, so they may be moved into
    /// different execution contexts.
    pub fn split(&mut self) -> (CaptureProducer<'_, LEN, N>, FrameConsumer<'_, LEN, N>) {
        (
            CaptureProducer::new(&self.pool),
            FrameConsumer::new(&self.pool),
        )
    }

    /// Number of frames dropped so far because no slot was reusable.
    pub fn overruns(&self) -> u32 {
        self.pool.overruns()
    }
}

impl<const LEN: usize, const N: usize> Default for FrameRelay<LEN, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod integration_tests;
