//! Poll-side frame reader.
//!
//! [`FrameConsumer`] is the non-blocking retrieval interface used by the
//! main loop. [`poll_next_frame()`](FrameConsumer::poll_next_frame) returns
//! the oldest `Full` frame as a scoped [`FrameGuard`], or `None` when
//! nothing is ready — never suspending, so the calling loop may busy-poll.
//!
//! ## Release discipline
//!
//! The guard releases its slot back to the producer when dropped. Because
//! the downstream detector may fail after the frame was handed over, tying
//! the release to `Drop` guarantees the slot is returned even on error
//! paths; a slot can never be starved by a forgotten release.
//!
//! ## Usage
//!
//! ```ignore
//! loop {
//!     if let Some(frame) = consumer.poll_next_frame() {
//!         detector.process(&frame)?;
//!     } // slot released here
//! }
//! ```

use core::ops::Deref;

use super::pool::{FramePool, SlotState};

/// Consumer half of a frame relay. Owned by the polling context.
pub struct FrameConsumer<'a, const LEN: usize, const N: usize> {
    pool: &'a FramePool<LEN, N>,
    /// Cyclic read cursor: the oldest slot not yet polled.
    slot: usize,
}

impl<'a, const LEN: usize, const N: usize> FrameConsumer<'a, LEN, N> {
    pub(crate) fn new(pool: &'a FramePool<LEN, N>) -> Self {
        FrameConsumer { pool, slot: 0 }
    }

    /// Retrieve the oldest complete frame, or `None` if no frame is ready.
    ///
    /// Never blocks. Frames are delivered in strict production order for
    /// any slot count: the producer fills slots cyclically, so the cyclic
    /// read cursor always points at the oldest `Full` slot.
    ///
    /// The returned guard borrows the consumer, so the next poll can only
    /// happen after the current frame has been released.
    pub fn poll_next_frame(&mut self) -> Option<FrameGuard<'_, LEN, N>> {
        let index = self.slot;
        if self.pool.state(index) != SlotState::Full {
            return None;
        }
        self.slot = (index + 1) % N;
        Some(FrameGuard {
            pool: self.pool,
            index,
        })
    }

    /// Whether a complete frame is waiting (without consuming it).
    pub fn has_frame(&self) -> bool {
        self.pool.state(self.slot) == SlotState::Full
    }

    /// Number of frames the producer dropped because no slot was reusable.
    pub fn overruns(&self) -> u32 {
        self.pool.overruns()
    }
}

/// Scoped handle to one complete frame.
///
/// Derefs to the `[i16; LEN]` samples. Dropping the guard marks the slot
/// `Consumed`, releasing it to the producer for reuse.
pub struct FrameGuard<'a, const LEN: usize, const N: usize> {
    pool: &'a FramePool<LEN, N>,
    index: usize,
}

impl<const LEN: usize, const N: usize> FrameGuard<'_, LEN, N> {
    /// Pool index of the slot holding this frame.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<const LEN: usize, const N: usize> Deref for FrameGuard<'_, LEN, N> {
    type Target = [i16; LEN];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The guard was created from a slot observed as Full, and
        // the producer will not write to it until mark_consumed on drop.
        unsafe { self.pool.frame(self.index) }
    }
}

impl<const LEN: usize, const N: usize> Drop for FrameGuard<'_, LEN, N> {
    fn drop(&mut self) {
        self.pool.mark_consumed(self.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the pool directly, standing in for the producer.
    fn produce_frame<const LEN: usize, const N: usize>(
        pool: &FramePool<LEN, N>,
        index: usize,
        samples: &[i16; LEN],
    ) {
        assert!(pool.begin_fill(index));
        for (pos, &s) in samples.iter().enumerate() {
            unsafe { pool.write_sample(index, pos, s) };
        }
        pool.mark_full(index);
    }

    #[test]
    fn empty_poll_returns_none() {
        let pool: FramePool<4, 2> = FramePool::new();
        let mut consumer = FrameConsumer::new(&pool);

        assert!(!consumer.has_frame());
        assert!(consumer.poll_next_frame().is_none());
        assert!(consumer.poll_next_frame().is_none());
    }

    #[test]
    fn guard_exposes_frame_samples() {
        let pool: FramePool<4, 2> = FramePool::new();
        produce_frame(&pool, 0, &[7, -8, 9, -10]);

        let mut consumer = FrameConsumer::new(&pool);
        assert!(consumer.has_frame());

        let frame = consumer.poll_next_frame().unwrap();
        assert_eq!(frame.index(), 0);
        assert_eq!(*frame, [7, -8, 9, -10]);
    }

    #[test]
    fn drop_releases_slot_to_producer() {
        let pool: FramePool<4, 2> = FramePool::new();
        produce_frame(&pool, 0, &[1, 2, 3, 4]);

        let mut consumer = FrameConsumer::new(&pool);
        {
            let _frame = consumer.poll_next_frame().unwrap();
            assert_eq!(pool.state(0), SlotState::Full);
        }
        assert_eq!(pool.state(0), SlotState::Consumed);
        assert!(pool.begin_fill(0));
    }

    #[test]
    fn frames_polled_in_fifo_order() {
        let pool: FramePool<2, 3> = FramePool::new();
        produce_frame(&pool, 0, &[1, 1]);
        produce_frame(&pool, 1, &[2, 2]);
        produce_frame(&pool, 2, &[3, 3]);

        let mut consumer = FrameConsumer::new(&pool);
        assert_eq!(*consumer.poll_next_frame().unwrap(), [1, 1]);
        assert_eq!(*consumer.poll_next_frame().unwrap(), [2, 2]);
        assert_eq!(*consumer.poll_next_frame().unwrap(), [3, 3]);
        assert!(consumer.poll_next_frame().is_none());
    }

    #[test]
    fn cursor_wraps_around() {
        let pool: FramePool<2, 2> = FramePool::new();
        let mut consumer = FrameConsumer::new(&pool);

        for round in 0..5i16 {
            let index = (round as usize) % 2;
            produce_frame(&pool, index, &[round, round]);
            let frame = consumer.poll_next_frame().unwrap();
            assert_eq!(*frame, [round, round]);
        }
    }
}
