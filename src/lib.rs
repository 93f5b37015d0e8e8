//! # wake-relay
//!
//! A `no_std`, zero-allocation capture frontend for wake-word detection on
//! bare-metal targets. It bridges an interrupt-driven microphone source to
//! a cooperative polling loop that feeds an external detection engine,
//! using a lock-free pool of fixed-size frame slots.
//!
//! The detection algorithm itself is an opaque collaborator; this crate
//! owns everything around it: frame transport, engine configuration, the
//! working-memory arena, and the polling loop.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Transport | [`relay`] | Lock-free SPSC frame slot pool with overrun accounting |
//! | Boundary | [`engine`] | `WakeEngine` trait and static working arena |
//! | Config | [`config`] | Validated keyword/sensitivity tables |
//! | Loop | [`runner`] | Busy-poll detection cycle with error propagation |
//! | Analysis | [`metering`] | Frame RMS level (feature-gated) |
//!
//! ## Quick start
//!
//! ```ignore
//! use wake_relay::relay::WakeFrameRelay;
//! use wake_relay::runner::WakeRunner;
//!
//! let mut relay = WakeFrameRelay::new();
//! let (mut producer, consumer) = relay.split();
//!
//! // In the audio sampling ISR, once per tick:
//! //     producer.on_sample_ready(sample);
//!
//! // In the main loop:
//! let mut runner = WakeRunner::new(consumer, engine);
//! let err = runner.run(|keyword| {
//!     // light an LED, print the label, ...
//! });
//! // run() only returns on an engine failure; halt policy is yours.
//! ```
//!
//! ## Concurrency model
//!
//! Exactly two execution contexts: a high-priority sampling interrupt
//! (producer) and one cooperative polling context (consumer). The producer
//! does bounded O(1) work per sample and never blocks or allocates; the
//! consumer's poll returns immediately with `None` when no frame is ready.
//! Handoff is per-slot atomic state tags with acquire/release ordering —
//! no locks anywhere.
//!
//! ## Capture parameters
//!
//! - **Frame size:** 512 samples ([`constants::FRAME_SAMPLES`])
//! - **Sample rate:** 16 kHz ([`constants::SAMPLE_RATE_HZ`])
//! - **Sample format:** `i16` (signed 16-bit PCM, mono)
//! - **Slots:** 2 ([`constants::RELAY_SLOTS`])
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `metering` | yes | [`metering`] frame RMS meter (requires `libm`) |

#![no_std]

pub mod config;
pub mod constants;
pub mod engine;
pub mod relay;
pub mod runner;

#[cfg(feature = "metering")]
pub mod metering;
