//! styletween animates an element's inline style toward target values.
//!
//! An [`Animator`] is bound to one element and owns a FIFO queue of
//! [`AnimationDescriptor`]s. The front descriptor is active: [`Animator::run`]
//! captures start values, then every frame granted by the [`FrameHost`]
//! interpolates each property with the descriptor's easing function until the
//! duration elapses, at which point the exact targets are written and the
//! descriptor is dequeued.
//!
//! # Lifecycle
//!
//! `Idle -> begin -> moving* -> complete -> Idle`, with [`Animator::stop`]
//! returning to `Idle` without completing. Listeners registered with
//! [`Animator::on`] observe the `begin`, `moving` and `complete` [`Phase`]s.
//! Completion does not start the next queued descriptor; call `run` again.
//!
//! # Collaborators
//!
//! - [`StyleTarget`]: computed-style reads and inline-style writes
//!   ([`MemoryElement`] is a headless implementation).
//! - [`FrameHost`]: clock and next-frame requests ([`ManualFrames`] for
//!   deterministic stepping, [`RealtimeFrames`] for wall-clock playback).
//! - [`EasingRegistry`]: dotted easing identifiers such as `"Linear"` or
//!   `"Quad.easeIn"` resolved to `(t, b, c, d)` functions.
//!
//! ```
//! use styletween::{
//!     AnimOptions, FrameOutcome, ManualFrames, MemoryElement, StyleValue, create_animator,
//! };
//!
//! let el = MemoryElement::with_stylesheet("left", "10px");
//! let frames = ManualFrames::new();
//! let opts = AnimOptions::new()
//!     .with_to("left", 110.0)
//!     .with_duration("1s")
//!     .with_easing("Linear");
//! let mut anim = create_animator([el.clone()], opts, frames.clone());
//! anim.run().unwrap();
//!
//! frames.advance(500.0);
//! assert_eq!(frames.fire(&mut anim).unwrap(), Some(FrameOutcome::Moving));
//! assert_eq!(el.style("left"), Some(StyleValue::Number(60.0)));
//!
//! frames.advance(501.0);
//! assert_eq!(frames.fire(&mut anim).unwrap(), Some(FrameOutcome::Completed));
//! assert_eq!(el.style("left"), Some(StyleValue::Number(110.0)));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod host;

pub use animation::animator::{
    Animator, FrameOutcome, Listener, Phase, create_animator, listener,
};
pub use animation::descriptor::{AnimOptions, AnimationDescriptor, DescriptorPatch};
pub use animation::duration::{DEFAULT_DURATION_MS, DurationSpec, to_ms};
pub use animation::ease::{
    EASE_IN, EASE_IN_OUT, EASE_OUT, EaseFn, EaseGroup, EasingRegistry, LINEAR,
};
pub use foundation::error::{AnimError, AnimResult};
pub use foundation::value::{StyleMap, StyleValue, parse_float};
pub use host::element::{MemoryElement, StyleTarget};
pub use host::frames::{FrameHost, ManualFrames, RealtimeFrames};
