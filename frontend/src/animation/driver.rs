//! Browser frame loop driving an [`EntranceController`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::{EntranceController, Transition};
use crate::types::{AppError, AppResult};
use crate::{REDUCED_MOTION_QUERY, SETTLE_GRACE};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop that runs until its callback returns
/// `false` or [`stop`](FrameLoop::stop) is called.
struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// `on_frame` receives the frame timestamp in milliseconds.
    fn start(window: Window, mut on_frame: impl FnMut(f64) -> bool + 'static) -> AppResult<Self> {
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next_pending = pending.clone();
        let next_callback = callback.clone();
        let next_window = window.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            next_pending.set(None);
            if !on_frame(timestamp) {
                return;
            }
            let requested = next_callback
                .borrow()
                .as_ref()
                .map(|cb| next_window.request_animation_frame(cb.as_ref().unchecked_ref()));
            match requested {
                Some(Ok(id)) => next_pending.set(Some(id)),
                // the settle timeout takes over
                Some(Err(e)) => log::warn!("requestAnimationFrame failed: {:?}", e),
                None => {}
            }
        }));

        let id = request_first(&*callback, |cb| {
            window.request_animation_frame(cb.as_ref().unchecked_ref())
        })?;
        pending.set(Some(id));

        Ok(Self {
            window,
            pending,
            callback,
        })
    }

    fn stop(&self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure's self-reference
        self.callback.borrow_mut().take();
    }
}

/// Issue the first frame request for the callback in `slot`. On failure the
/// slot is emptied, releasing the callback's own handle on it.
fn request_first<C, E>(
    slot: &RefCell<Option<C>>,
    request: impl FnOnce(&C) -> Result<i32, E>,
) -> AppResult<i32>
where
    E: fmt::Debug,
{
    let requested = slot.borrow().as_ref().map(request);
    match requested {
        Some(Ok(id)) => Ok(id),
        Some(Err(e)) => {
            slot.borrow_mut().take();
            Err(AppError::Scheduler(format!("requestAnimationFrame failed: {:?}", e)))
        }
        None => Err(AppError::Scheduler("frame callback missing".to_string())),
    }
}

/// Window and current time (seconds) if frames can be scheduled at all.
fn frame_clock() -> AppResult<(Window, f64)> {
    let window = web_sys::window().ok_or_else(|| AppError::Scheduler("no global window".to_string()))?;
    let now = window
        .performance()
        .ok_or_else(|| AppError::Scheduler("performance API unavailable".to_string()))?
        .now();
    Ok((window, now / 1000.0))
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Target-state style to render without animating, or `None` when the
/// entrance should play.
fn fallback_style<T>(transition: &Transition, clock: &AppResult<T>, reduced_motion: bool) -> Option<String> {
    match clock {
        Err(e) => {
            log::warn!("Entrance skipped: {}", e);
            Some(transition.to().to_css())
        }
        Ok(_) if reduced_motion => {
            log::debug!("Reduced motion requested, skipping entrance");
            Some(transition.to().to_css())
        }
        Ok(_) => None,
    }
}

/// Play `transition` once for the calling component instance.
///
/// Returns the inline style to bind on the animated element. When frames
/// cannot be scheduled (or the visitor prefers reduced motion) the style
/// is the target state from the start.
pub fn use_entrance(transition: Transition) -> Signal<String> {
    let controller = Rc::new(RefCell::new(EntranceController::new(transition)));

    let clock = transition.validate().and_then(|_| frame_clock());
    let reduced_motion = matches!(&clock, Ok((window, _)) if prefers_reduced_motion(window));
    let fallback = fallback_style(&transition, &clock, reduced_motion);
    let (window, now) = match clock {
        Ok((window, now)) if fallback.is_none() => (window, now),
        _ => {
            controller.borrow_mut().skip();
            let settled = fallback.unwrap_or_else(|| transition.to().to_css());
            return Signal::derive(move || settled.clone());
        }
    };

    let (style, set_style) = create_signal(transition.from().to_css());
    controller.borrow_mut().attach(now);

    let frame_controller = controller.clone();
    let frame_loop = match FrameLoop::start(window, move |timestamp| {
        let mut controller = frame_controller.borrow_mut();
        let state = controller.frame(timestamp / 1000.0);
        set_style.set(state.to_css());
        !controller.is_settled()
    }) {
        Ok(frame_loop) => Rc::new(frame_loop),
        Err(e) => {
            log::warn!("Entrance skipped: {}", e);
            set_style.set(controller.borrow_mut().skip().to_css());
            return style.into();
        }
    };

    // Frames may stop arriving (background tab, throttling): force the
    // target state once the window has passed.
    let settle_ms = ((transition.total() + SETTLE_GRACE) * 1000.0).ceil() as u32;
    let settle_controller = controller.clone();
    let settle_loop = frame_loop.clone();
    let settle = Timeout::new(settle_ms, move || {
        let mut controller = settle_controller.borrow_mut();
        if !controller.is_settled() {
            log::debug!("Entrance forced to target after {}ms", settle_ms);
            settle_loop.stop();
            set_style.set(controller.skip().to_css());
        }
    });

    on_cleanup(move || {
        controller.borrow_mut().detach();
        frame_loop.stop();
        // dropping a pending timeout cancels it
        drop(settle);
    });

    style.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CARD_ENTRANCE, TEXT_ENTRANCE};
    use crate::types::VisualState;

    #[test]
    fn test_missing_scheduler_renders_settled() {
        let clock: AppResult<f64> = Err(AppError::Scheduler("no global window".to_string()));
        for transition in [TEXT_ENTRANCE, CARD_ENTRANCE] {
            assert_eq!(
                fallback_style(&transition, &clock, false),
                Some(VisualState::SETTLED.to_css())
            );
        }
    }

    #[test]
    fn test_reduced_motion_renders_settled() {
        let clock: AppResult<f64> = Ok(0.0);
        assert_eq!(
            fallback_style(&CARD_ENTRANCE, &clock, true),
            Some(VisualState::SETTLED.to_css())
        );
    }

    #[test]
    fn test_invalid_timing_renders_settled() {
        let broken = TEXT_ENTRANCE.lasting(-1.0);
        let clock: AppResult<f64> = broken.validate().map(|_| 0.0);
        assert_eq!(
            fallback_style(&broken, &clock, false),
            Some(VisualState::SETTLED.to_css())
        );
    }

    #[test]
    fn test_available_scheduler_animates() {
        let clock: AppResult<f64> = Ok(12.5);
        assert_eq!(fallback_style(&TEXT_ENTRANCE, &clock, false), None);
    }

    #[test]
    fn test_failed_first_request_releases_callback() {
        type Slot = Rc<RefCell<Option<Box<dyn Fn()>>>>;
        let slot: Slot = Rc::new(RefCell::new(None));
        let held = slot.clone();
        *slot.borrow_mut() = Some(Box::new(move || {
            let _ = held.borrow();
        }));
        assert_eq!(Rc::strong_count(&slot), 2);

        let result = request_first(&*slot, |_| Err::<i32, _>("blocked"));

        assert!(matches!(result, Err(AppError::Scheduler(_))));
        assert!(slot.borrow().is_none());
        assert_eq!(Rc::strong_count(&slot), 1);
    }

    #[test]
    fn test_successful_first_request_keeps_callback() {
        let slot = RefCell::new(Some(7));
        assert_eq!(request_first(&slot, |v| Ok::<_, ()>(*v * 2)).unwrap(), 14);
        assert!(slot.borrow().is_some());
    }
}
