//! # Animation Module
//!
//! One-shot tweens driven by the same frame timestamp as the render loop.
//!
//! A [`Tween`] is a small state machine (`Pending` -> `Running` -> `Done`)
//! interpolating a [`Vector3`] between two values with an [`Easing`] curve.
//! Nothing here owns a timeline or a thread; the caller samples each tween
//! once per frame with the current time in seconds.
//!
//! ```
//! use cgmath::Vector3;
//! use floating_shapes::animation::{Easing, Tween};
//!
//! let mut scale_in = Tween::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), 2.0)
//!     .with_delay(0.2)
//!     .with_easing(Easing::ExpoOut);
//!
//! assert_eq!(scale_in.sample(0.0), Vector3::new(0.0, 0.0, 0.0));
//! assert_eq!(scale_in.sample(5.0), Vector3::new(1.0, 1.0, 1.0));
//! assert!(scale_in.is_done());
//! ```
//!
//! [`Vector3`]: cgmath::Vector3

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::{Tween, TweenState};
