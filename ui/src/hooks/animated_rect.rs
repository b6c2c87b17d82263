//! Animate a rectangle toward a target with spring motion.
use crate::animation::{Spring, SpringConfig};
use crate::types::IndicatorRect;
use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Springs for both rect dimensions plus frame bookkeeping.
struct Motion {
    left: Spring,
    width: Spring,
    config: SpringConfig,

    /// Timestamp of the previous animation frame, in milliseconds.
    last_frame: Option<f64>,

    /// In-flight frame request.
    /// Dropping it cancels the loop.
    frame: Option<AnimationFrame>,

    /// Whether a first target has been applied.
    started: bool,
}

impl Motion {
    fn new(config: SpringConfig) -> Self {
        Self {
            left: Spring::new(0.0),
            width: Spring::new(0.0),
            config,
            last_frame: None,
            frame: None,
            started: false,
        }
    }

    fn is_settled(&self) -> bool {
        self.left.is_settled() && self.width.is_settled()
    }
}

/// Animates toward `target` with spring motion,
/// yielding the rect to render.
///
/// The first target is applied immediately so mounting does not animate
/// in from an arbitrary origin. Later targets transition on an animation
/// frame loop that stops once both springs settle.
/// A `None` target leaves the last rect in place.
#[hook]
pub fn use_animated_rect(target: Option<IndicatorRect>, config: SpringConfig) -> IndicatorRect {
    let rendered = use_state(|| IndicatorRect::ZERO);
    let motion = use_mut_ref(|| Motion::new(config));

    {
        let rendered = rendered.clone();
        let motion = motion.clone();

        use_effect_with(target, move |target| {
            let Some(target) = *target else {
                return;
            };

            let mut state = motion.borrow_mut();
            state.config = config;

            if !state.started {
                state.started = true;
                state.left.snap_to(target.left);
                state.width.snap_to(target.width);
                drop(state);

                rendered.set(target);
                return;
            }

            state.left.set_target(target.left);
            state.width.set_target(target.width);
            state.last_frame = None;
            drop(state);

            schedule_frame(motion, rendered);
        });
    }

    *rendered
}

// ***************
// *** helpers ***
// ***************

/// Requests the next animation frame,
/// ticking the springs until both settle.
///
/// Rescheduling replaces any in-flight request,
/// so at most one loop runs per hook instance.
fn schedule_frame(motion: Rc<RefCell<Motion>>, rendered: UseStateHandle<IndicatorRect>) {
    let handle = request_animation_frame({
        let motion = motion.clone();
        let rendered = rendered.clone();

        move |time| {
            let mut state = motion.borrow_mut();
            let dt = match state.last_frame {
                Some(last) => (time - last) / 1_000.0,
                None => 0.0,
            };
            state.last_frame = Some(time);

            let config = state.config;
            let mut left = state.left.tick(dt, &config);
            let mut width = state.width.tick(dt, &config);

            let settled = state.is_settled();
            if settled {
                // settled springs land exactly on their targets
                left = state.left.tick(0.0, &config);
                width = state.width.tick(0.0, &config);
                state.frame = None;
            }
            drop(state);

            rendered.set(IndicatorRect { left, width });
            if !settled {
                schedule_frame(motion, rendered);
            }
        }
    });

    motion.borrow_mut().frame = Some(handle);
}
