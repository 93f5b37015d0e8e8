//! End-to-end producer/consumer scenarios over a shared relay.
//!
//! These tests drive both halves from one thread, interleaving calls the
//! way the sampling ISR and the polling loop would interleave in time.

use super::FrameRelay;

#[test]
fn both_slots_fill_then_third_frame_overruns() {
    // FrameLength = 4, N = 2, feed [1..=8] with no polling: slot 0 holds
    // [1,2,3,4], slot 1 holds [5,6,7,8]; sample 9 has nowhere to go.
    let mut relay: FrameRelay<4, 2> = FrameRelay::new();
    let (mut producer, mut consumer) = relay.split();

    for s in 1..=8 {
        producer.on_sample_ready(s);
    }
    assert_eq!(producer.overruns(), 0);

    producer.on_sample_ready(9);
    assert_eq!(producer.overruns(), 1);

    // Both full frames survive intact — the dropped frame never touched
    // an unconsumed slot.
    assert_eq!(*consumer.poll_next_frame().unwrap(), [1, 2, 3, 4]);
    assert_eq!(*consumer.poll_next_frame().unwrap(), [5, 6, 7, 8]);
    assert!(consumer.poll_next_frame().is_none());
}

#[test]
fn consuming_mid_stream_avoids_overrun() {
    // Same setup, but the consumer keeps up: release slot 0 after sample
    // 4, then feed 5..=12. Slot 1 fills, slot 0 is reused, no overrun.
    let mut relay: FrameRelay<4, 2> = FrameRelay::new();
    let (mut producer, mut consumer) = relay.split();

    for s in 1..=4 {
        producer.on_sample_ready(s);
    }
    {
        let frame = consumer.poll_next_frame().unwrap();
        assert_eq!(*frame, [1, 2, 3, 4]);
    } // slot 0 released

    for s in 5..=12 {
        producer.on_sample_ready(s);
    }
    assert_eq!(producer.overruns(), 0);

    assert_eq!(*consumer.poll_next_frame().unwrap(), [5, 6, 7, 8]);
    assert_eq!(*consumer.poll_next_frame().unwrap(), [9, 10, 11, 12]);
}

#[test]
fn consumer_sees_exactly_the_produced_samples() {
    let mut relay: FrameRelay<8, 3> = FrameRelay::new();
    let (mut producer, mut consumer) = relay.split();

    // Interleave production and consumption over many frames; every frame
    // read must equal, in order, the samples written for its window.
    let mut next = 0i16;
    for _ in 0..20 {
        for _ in 0..8 {
            producer.on_sample_ready(next);
            next = next.wrapping_add(1);
        }
        let frame = consumer.poll_next_frame().expect("frame should be ready");
        let base = frame[0];
        for (i, &s) in frame.iter().enumerate() {
            assert_eq!(s, base.wrapping_add(i as i16), "sample {i} out of order");
        }
    }
    assert_eq!(consumer.overruns(), 0);
}

#[test]
fn fifo_order_with_more_than_two_slots() {
    let mut relay: FrameRelay<2, 4> = FrameRelay::new();
    let (mut producer, mut consumer) = relay.split();

    // Produce three frames, drain, produce two more across the wrap point.
    for s in [1i16, 1, 2, 2, 3, 3] {
        producer.on_sample_ready(s);
    }
    assert_eq!(*consumer.poll_next_frame().unwrap(), [1, 1]);
    assert_eq!(*consumer.poll_next_frame().unwrap(), [2, 2]);

    for s in [4i16, 4, 5, 5] {
        producer.on_sample_ready(s);
    }
    assert_eq!(*consumer.poll_next_frame().unwrap(), [3, 3]);
    assert_eq!(*consumer.poll_next_frame().unwrap(), [4, 4]);
    assert_eq!(*consumer.poll_next_frame().unwrap(), [5, 5]);
    assert!(consumer.poll_next_frame().is_none());
}

#[test]
fn recovery_after_sustained_overrun() {
    let mut relay: FrameRelay<4, 2> = FrameRelay::new();
    let (mut producer, mut consumer) = relay.split();

    // Saturate, then drop three whole frames.
    for s in 1..=8 {
        producer.on_sample_ready(s);
    }
    for s in 0..12 {
        producer.on_sample_ready(100 + s);
    }
    assert_eq!(producer.overruns(), 3);

    // Drain both stale frames, then confirm fresh capture resumes.
    assert_eq!(*consumer.poll_next_frame().unwrap(), [1, 2, 3, 4]);
    assert_eq!(*consumer.poll_next_frame().unwrap(), [5, 6, 7, 8]);

    for s in [20i16, 21, 22, 23] {
        producer.on_sample_ready(s);
    }
    assert_eq!(*consumer.poll_next_frame().unwrap(), [20, 21, 22, 23]);
    assert_eq!(producer.overruns(), 3);
}

#[test]
fn long_run_no_drift() {
    // Steady-state lockstep over enough frames to wrap every cursor many
    // times; the relay must neither drop nor reorder anything.
    let mut relay: FrameRelay<4, 2> = FrameRelay::new();
    let (mut producer, mut consumer) = relay.split();

    for frame_num in 0..1000i16 {
        for i in 0..4 {
            producer.on_sample_ready(frame_num.wrapping_mul(4).wrapping_add(i));
        }
        let frame = consumer.poll_next_frame().expect("frame should be ready");
        assert_eq!(frame[0], frame_num.wrapping_mul(4));
    }
    assert_eq!(consumer.overruns(), 0);
}
