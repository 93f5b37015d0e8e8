//! Boundary to the opaque wake-word detection engine.
//!
//! The actual keyword-spotting algorithm is an external, pre-built
//! component; this crate only defines the seam it is called through and
//! the statically-allocated working memory it is given at init.

use core::mem::align_of;

/// One full detection window of samples, ready for the engine.
pub trait WakeEngine<const LEN: usize> {
    /// Error type surfaced by a failed detection call. Retry-vs-halt
    /// policy is the caller's decision.
    type Error;

    /// Scan one frame for configured keywords.
    ///
    /// Returns `Ok(Some(index))` when the keyword at `index` (in
    /// configuration order) was spotted in the audio ending at this frame,
    /// `Ok(None)` when nothing matched.
    fn process(&mut self, frame: &[i16; LEN]) -> Result<Option<usize>, Self::Error>;
}

/// Fixed working memory handed to the engine at init.
///
/// Engines operate out of a caller-provided arena instead of allocating;
/// place one in a `static` to match the init-once/no-teardown lifecycle.
/// 16-byte alignment satisfies the widest vector loads engines use on
/// Cortex-M and desktop hosts alike.
#[repr(C, align(16))]
pub struct EngineArena<const SIZE: usize> {
    bytes: [u8; SIZE],
}

impl<const SIZE: usize> EngineArena<SIZE> {
    /// Create a zeroed arena.
    pub const fn new() -> Self {
        EngineArena { bytes: [0u8; SIZE] }
    }

    /// Arena size in bytes.
    pub const fn len(&self) -> usize {
        SIZE
    }

    /// Whether the arena is zero-sized.
    pub const fn is_empty(&self) -> bool {
        SIZE == 0
    }

    /// Borrow the whole arena for the engine's exclusive use.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Raw base pointer, for engines with a C-style init signature.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }
}

impl<const SIZE: usize> Default for EngineArena<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile-time check that the arena type carries its alignment.
const _: () = assert!(align_of::<EngineArena<16>>() == 16);
