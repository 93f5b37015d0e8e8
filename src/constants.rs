/// Number of 16-bit samples per detection frame (one engine window).
pub const FRAME_SAMPLES: usize = 512;

/// Number of frame slots in the default relay (double buffering).
pub const RELAY_SLOTS: usize = 2;

/// Microphone sample rate in Hz expected by the detection engine.
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Size in bytes of the working arena handed to the detection engine.
pub const ENGINE_ARENA_BYTES: usize = 70 * 1024;

/// Default per-keyword detection sensitivity.
pub const DEFAULT_SENSITIVITY: f32 = 0.75;
