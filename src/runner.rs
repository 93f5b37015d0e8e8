//! Cooperative detection loop.
//!
//! [`WakeRunner`] packages the busy-poll cycle that glues the relay to the
//! detection engine: poll for a complete frame, feed it to the engine,
//! report any match. Busy-polling is intentional on the bare-metal target —
//! the consumer side never suspends, it simply sees `None` until the
//! sampling interrupt publishes the next frame.
//!
//! Overruns are non-fatal and only logged; an engine failure is returned
//! to the caller, who decides between retry and halt.

use log::{info, warn};

use crate::engine::WakeEngine;
use crate::relay::FrameConsumer;

/// Drives one consumer half of a relay against a detection engine.
pub struct WakeRunner<'a, E, const LEN: usize, const N: usize> {
    consumer: FrameConsumer<'a, LEN, N>,
    engine: E,
    /// Overrun count already reported, for delta logging.
    seen_overruns: u32,
}

impl<'a, E, const LEN: usize, const N: usize> WakeRunner<'a, E, LEN, N>
where
    E: WakeEngine<LEN>,
{
    pub fn new(consumer: FrameConsumer<'a, LEN, N>, engine: E) -> Self {
        WakeRunner {
            consumer,
            engine,
            seen_overruns: 0,
        }
    }

    /// One iteration of the detection loop.
    ///
    /// Returns `Ok(None)` when no frame was ready or the frame contained no
    /// keyword, `Ok(Some(index))` on a detection, and the engine's error on
    /// a failed detection call. The frame's slot is released back to the
    /// producer in every case, including the error path.
    pub fn poll_once(&mut self) -> Result<Option<usize>, E::Error> {
        let overruns = self.consumer.overruns();
        if overruns != self.seen_overruns {
            warn!(
                "capture overrun: {} frame(s) dropped",
                overruns - self.seen_overruns
            );
            self.seen_overruns = overruns;
        }

        let Some(frame) = self.consumer.poll_next_frame() else {
            return Ok(None);
        };
        let hit = self.engine.process(&frame)?;
        if let Some(index) = hit {
            info!("wake word detected: keyword {index}");
        }
        Ok(hit)
    }

    /// Busy-poll forever, invoking `on_wake` once per detection.
    ///
    /// Returns only when the engine fails, handing the error to the caller
    /// for its halt policy.
    pub fn run<F>(&mut self, mut on_wake: F) -> E::Error
    where
        F: FnMut(usize),
    {
        loop {
            match self.poll_once() {
                Ok(Some(index)) => on_wake(index),
                Ok(None) => {}
                Err(err) => return err,
            }
        }
    }

    /// Total frames dropped by the producer so far.
    pub fn dropped_frames(&self) -> u32 {
        self.consumer.overruns()
    }

    /// Access the engine (e.g. to read detector-side state).
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Tear the runner apart, recovering the consumer half and the engine.
    pub fn into_parts(self) -> (FrameConsumer<'a, LEN, N>, E) {
        (self.consumer, self.engine)
    }
}
