use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// Lifecycle state of one frame slot.
///
/// Transitions are single-writer per direction:
/// - `Consumed → Filling` and `Filling → Full`: producer only
/// - `Full → Consumed`: consumer only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SlotState {
    /// Eligible as the next fill target (initial state).
    Consumed = 0,
    /// The producer is writing samples into this slot.
    Filling = 1,
    /// Holds a complete frame, waiting for the consumer.
    Full = 2,
}

impl SlotState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => SlotState::Consumed,
            1 => SlotState::Filling,
            _ => SlotState::Full,
        }
    }
}

/// Fixed pool of `N` frame slots of `LEN` samples each.
///
/// Holds the slot state machine and the sample storage. All slots are
/// allocated inline (no heap) and live for the lifetime of the pool.
/// State tags are per-slot atomics; a `Full` tag published with release
/// ordering guarantees the consumer's acquire-load observes every sample
/// write that preceded it, and symmetrically for `Consumed`.
///
/// # Type Parameters
///
/// - `LEN`: Samples per frame. Must be ≥ 1.
/// - `N`: Number of slots. Must be ≥ 2 so one slot can fill while
///   another is being consumed.
pub struct FramePool<const LEN: usize, const N: usize> {
    /// Sample storage, one frame per slot.
    frames: UnsafeCell<[[i16; LEN]; N]>,
    /// Per-slot state tags (see [`SlotState`]).
    states: [AtomicU8; N],
    /// Count of frames dropped because no slot was reusable.
    overruns: AtomicU32,
}

// SAFETY: All cross-context state lives in atomics. The UnsafeCell storage
// is only written through a slot the producer holds in Filling state and
// only read through a slot the consumer observed as Full; the acquire/
// release pairs on the state tags order those accesses.
unsafe impl<const LEN: usize, const N: usize> Sync for FramePool<LEN, N> {}
unsafe impl<const LEN: usize, const N: usize> Send for FramePool<LEN, N> {}

impl<const LEN: usize, const N: usize> FramePool<LEN, N> {
    /// Create a new pool. All slots start in `Consumed` state, zeroed.
    #[allow(clippy::declare_interior_mut_const)]
    pub const fn new() -> Self {
        assert!(LEN >= 1, "frame length must be at least 1 sample");
        assert!(N >= 2, "pool must have at least 2 slots");

        const CONSUMED: AtomicU8 = AtomicU8::new(SlotState::Consumed as u8);
        FramePool {
            frames: UnsafeCell::new([[0i16; LEN]; N]),
            states: [CONSUMED; N],
            overruns: AtomicU32::new(0),
        }
    }

    /// Current state of a slot.
    pub fn state(&self, index: usize) -> SlotState {
        SlotState::from_u8(self.states[index].load(Ordering::Acquire))
    }

    /// Try to claim a slot as the fill target (producer side).
    ///
    /// Succeeds only if the slot is `Consumed`. Returns `false` otherwise
    /// (the consumer has fallen behind — an overrun situation).
    pub fn begin_fill(&self, index: usize) -> bool {
        if self.states[index].load(Ordering::Acquire) != SlotState::Consumed as u8 {
            return false;
        }
        // Only the producer moves a slot out of Consumed, so no CAS is
        // needed; the acquire load above orders us after the consumer's
        // final read of the previous frame.
        self.states[index].store(SlotState::Filling as u8, Ordering::Relaxed);
        true
    }

    /// Transition a slot `Filling → Full` (producer side).
    ///
    /// The release store makes every sample write to this slot visible to
    /// a consumer that observes the `Full` state.
    pub fn mark_full(&self, index: usize) {
        debug_assert_eq!(
            self.state(index),
            SlotState::Filling,
            "mark_full on a slot that is not Filling"
        );
        self.states[index].store(SlotState::Full as u8, Ordering::Release);
    }

    /// Transition a slot `Full → Consumed` (consumer side), releasing it
    /// back to the producer.
    ///
    /// Marking a slot that is not `Full` is a contract violation.
    pub fn mark_consumed(&self, index: usize) {
        debug_assert_eq!(
            self.state(index),
            SlotState::Full,
            "mark_consumed on a slot that is not Full"
        );
        self.states[index].store(SlotState::Consumed as u8, Ordering::Release);
    }

    /// Record one dropped frame.
    pub(crate) fn record_overrun(&self) {
        self.overruns.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of frames dropped because no slot was reusable.
    pub fn overruns(&self) -> u32 {
        self.overruns.load(Ordering::Relaxed)
    }

    /// Number of slots currently holding a complete, unconsumed frame.
    pub fn full_count(&self) -> usize {
        (0..N).filter(|&i| self.state(i) == SlotState::Full).count()
    }

    /// Write one sample into a slot.
    ///
    /// # Safety
    /// Caller must be the sole producer and must hold `index` in `Filling`
    /// state. `pos` must be `< LEN`.
    pub(crate) unsafe fn write_sample(&self, index: usize, pos: usize, sample: i16) {
        let frames = self.frames.get();
        unsafe {
            (*frames)[index][pos] = sample;
        }
    }

    /// Borrow a slot's frame for reading.
    ///
    /// # Safety
    /// Caller must have observed `index` in `Full` state and must not hold
    /// the reference past `mark_consumed(index)`.
    pub(crate) unsafe fn frame(&self, index: usize) -> &[i16; LEN] {
        unsafe { &(*self.frames.get())[index] }
    }
}
