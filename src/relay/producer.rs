//! Interrupt-side sample writer.
//!
//! [`CaptureProducer`] converts the periodic hardware sampling event into
//! sample writes against the frame pool. It is designed to run at interrupt
//! priority: every call does bounded O(1) work, never blocks, and never
//! allocates.
//!
//! ## Overrun policy
//!
//! Drop-newest, frame-aligned. When a frame boundary is reached and the next
//! cyclic slot is not yet `Consumed`, the entire incoming frame (`LEN`
//! samples) is discarded and the overrun counter is incremented once. A
//! `Full` slot the consumer has not released is never written. Dropping
//! whole frames keeps subsequent frame boundaries aligned to the sample
//! clock.
//!
//! ## Usage
//!
//! ```ignore
//! // In the audio sampling ISR (e.g. DMA half-complete / SAI FIFO):
//! producer.on_sample_ready(sample);
//! ```

use super::pool::FramePool;

/// Producer half of a frame relay. Owned by the interrupt context.
///
/// Fills slots strictly in cyclic order, which is what makes the consumer's
/// cyclic reads FIFO: the next fill target is always the oldest-released
/// slot, so checking only that slot is equivalent to scanning for any
/// `Consumed` one.
pub struct CaptureProducer<'a, const LEN: usize, const N: usize> {
    pool: &'a FramePool<LEN, N>,
    /// Cyclic fill cursor: the slot being filled, or the next target.
    slot: usize,
    /// Write position within the current slot.
    fill_pos: usize,
    /// Whether `slot` is currently claimed in `Filling` state.
    filling: bool,
    /// Whether the current incoming frame is being dropped (overrun).
    dropping: bool,
    /// Position within the frame being dropped.
    drop_pos: usize,
}

impl<'a, const LEN: usize, const N: usize> CaptureProducer<'a, LEN, N> {
    pub(crate) fn new(pool: &'a FramePool<LEN, N>) -> Self {
        CaptureProducer {
            pool,
            slot: 0,
            fill_pos: 0,
            filling: false,
            dropping: false,
            drop_pos: 0,
        }
    }

    /// Accept one sample from the hardware sampling source.
    ///
    /// Call once per audio tick, from interrupt context. Bounded O(1),
    /// non-blocking, non-allocating.
    pub fn on_sample_ready(&mut self, sample: i16) {
        if self.dropping {
            self.drop_pos += 1;
            if self.drop_pos == LEN {
                self.dropping = false;
            }
            return;
        }

        if !self.filling {
            if self.pool.begin_fill(self.slot) {
                self.filling = true;
                self.fill_pos = 0;
            } else {
                // Consumer has fallen behind: drop this frame whole.
                self.pool.record_overrun();
                if LEN > 1 {
                    self.dropping = true;
                    self.drop_pos = 1;
                }
                return;
            }
        }

        // SAFETY: We are the sole producer and hold `slot` in Filling
        // state; `fill_pos < LEN` by construction.
        unsafe {
            self.pool.write_sample(self.slot, self.fill_pos, sample);
        }
        self.fill_pos += 1;

        if self.fill_pos == LEN {
            // Publishes all sample writes to the consumer side.
            self.pool.mark_full(self.slot);
            self.filling = false;
            self.slot = (self.slot + 1) % N;
        }
    }

    /// Number of frames dropped so far because no slot was reusable.
    pub fn overruns(&self) -> u32 {
        self.pool.overruns()
    }

    /// Whether a slot is currently claimed and partially filled.
    pub fn is_filling(&self) -> bool {
        self.filling
    }

    /// Write position within the current fill slot (0 when idle).
    pub fn fill_pos(&self) -> usize {
        if self.filling {
            self.fill_pos
        } else {
            0
        }
    }
}
