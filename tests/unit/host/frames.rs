use super::*;
use crate::{AnimOptions, MemoryElement};

fn slide(frames: &ManualFrames) -> Animator<MemoryElement> {
    let opts = AnimOptions::new()
        .with_from("left", 0.0)
        .with_to("left", 100.0)
        .with_duration(100.0)
        .with_easing("Linear");
    Animator::new([MemoryElement::new()], opts, frames.clone())
}

#[test]
fn requests_are_counted_and_consumed() {
    let frames = ManualFrames::new();
    assert_eq!(frames.pending(), 0);
    frames.request_frame();
    frames.request_frame();
    assert_eq!(frames.pending(), 2);
    assert!(frames.inner.requests.take());
    assert!(frames.inner.requests.take());
    assert!(!frames.inner.requests.take());
}

#[test]
fn clock_moves_only_when_told() {
    let frames = ManualFrames::new();
    assert_eq!(frames.now_ms(), 0.0);
    frames.advance(16.0);
    frames.advance(16.0);
    assert_eq!(frames.now_ms(), 32.0);
    frames.set_now(1000.0);
    assert_eq!(frames.now_ms(), 1000.0);
}

#[test]
fn fire_without_request_does_nothing() {
    let frames = ManualFrames::new();
    let mut anim = slide(&frames);
    assert_eq!(frames.fire(&mut anim).unwrap(), None);
    assert!(!anim.is_running());
}

#[test]
fn run_until_idle_drains_the_loop() {
    let frames = ManualFrames::new();
    let mut anim = slide(&frames);
    anim.run().unwrap();
    let fired = frames.run_until_idle(&mut anim, 10.0).unwrap();
    // ten moving frames (10..=100ms) and the completing one at 110ms
    assert_eq!(fired, 11);
    assert_eq!(anim.queue_len(), 0);
    assert_eq!(frames.pending(), 0);
}

#[test]
fn run_until_idle_rejects_non_positive_steps() {
    let frames = ManualFrames::new();
    let mut anim = slide(&frames);
    let err = frames.run_until_idle(&mut anim, 0.0).unwrap_err();
    assert!(matches!(err, AnimError::Validation(_)));
}

#[test]
fn realtime_clock_is_monotonic() {
    let frames = RealtimeFrames::new();
    let a = frames.now_ms();
    std::thread::sleep(Duration::from_millis(2));
    assert!(frames.now_ms() > a);
}

#[test]
fn realtime_drive_completes_a_short_animation() {
    let frames = RealtimeFrames::new();
    let el = MemoryElement::new();
    let opts = AnimOptions::new()
        .with_from("opacity", 1.0)
        .with_to("opacity", 0.0)
        .with_duration(20.0)
        .with_easing("Sine.easeOut");
    let mut anim = Animator::new([el.clone()], opts, frames.clone());
    anim.run().unwrap();
    let fired = frames
        .drive_blocking(&mut anim, Duration::from_millis(2))
        .unwrap();
    assert!(fired >= 1);
    assert!(!anim.is_running());
    assert_eq!(el.style("opacity"), Some(crate::StyleValue::Number(0.0)));
}
