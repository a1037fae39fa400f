//! Window resize handling, rate limited by [`Throttle`].

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use pdfdeck_core::Throttle;

use super::dom;

/// What a throttle timer should do when it wakes up.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TimerStep {
    /// The window closed with a value pending.
    Settle,
    /// Woke before the deadline; sleep again until it.
    Wait(f64),
    /// Nothing pending, or the owning component is gone.
    Idle,
}

fn timer_step(throttle: &mut Throttle<()>, now_ms: f64) -> TimerStep {
    if throttle.fire(now_ms).is_some() {
        return TimerStep::Settle;
    }
    match throttle.deadline() {
        Some(deadline) => TimerStep::Wait(deadline),
        None => TimerStep::Idle,
    }
}

/// Timer wake-up against the owner-scoped throttle. Disposed storage is idle.
fn wake(throttle: StoredValue<Throttle<()>>, now_ms: f64) -> TimerStep {
    throttle
        .try_update_value(|t| timer_step(t, now_ms))
        .unwrap_or(TimerStep::Idle)
}

/// Call `on_settle` at most once per `window_ms` while the window is being
/// resized, after the last event of each burst window.
///
/// The listener is removed and any pending window dropped when the calling
/// owner is cleaned up, so a timer already in flight never calls `on_settle`.
pub fn on_resize_throttled(window_ms: u32, on_settle: impl Fn() + 'static) {
    let throttle = StoredValue::new(Throttle::new(window_ms));
    let on_settle: Rc<dyn Fn()> = Rc::new(on_settle);

    let handle = window_event_listener(ev::resize, move |_| {
        let opened = throttle
            .try_update_value(|t| t.offer(dom::now_ms(), ()))
            .flatten();
        if let Some(deadline) = opened {
            schedule(throttle, Rc::clone(&on_settle), deadline);
        }
    });

    on_cleanup(move || {
        handle.remove();
        throttle.try_update_value(Throttle::cancel);
    });
}

fn schedule(throttle: StoredValue<Throttle<()>>, on_settle: Rc<dyn Fn()>, deadline: f64) {
    let delay = (deadline - dom::now_ms()).max(0.0).ceil() as u32;

    Timeout::new(delay, move || match wake(throttle, dom::now_ms()) {
        TimerStep::Settle => on_settle(),
        TimerStep::Wait(deadline) => schedule(throttle, on_settle, deadline),
        TimerStep::Idle => {}
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_step_settles_after_window() {
        let mut throttle = Throttle::new(250);
        throttle.offer(0.0, ());
        assert_eq!(timer_step(&mut throttle, 250.0), TimerStep::Settle);
        assert_eq!(timer_step(&mut throttle, 300.0), TimerStep::Idle);
    }

    #[test]
    fn test_timer_step_early_wake_waits() {
        let mut throttle = Throttle::new(250);
        throttle.offer(0.0, ());
        assert_eq!(timer_step(&mut throttle, 249.0), TimerStep::Wait(250.0));
    }

    #[test]
    fn test_cancelled_window_is_idle() {
        let mut throttle = Throttle::new(250);
        throttle.offer(0.0, ());
        throttle.offer(40.0, ());
        throttle.cancel();
        assert_eq!(timer_step(&mut throttle, 250.0), TimerStep::Idle);
    }

    #[test]
    fn test_wake_after_owner_cleanup_is_idle() {
        // Resize, then the preview unmounts before the window closes.
        let owner = Owner::new();
        let throttle = owner.with(|| StoredValue::new(Throttle::new(250)));
        throttle.update_value(|t| {
            t.offer(0.0, ());
        });

        owner.cleanup();

        assert_eq!(wake(throttle, 250.0), TimerStep::Idle);
        assert_eq!(wake(throttle, 1_000.0), TimerStep::Idle);
    }

    #[test]
    fn test_wake_while_mounted_settles() {
        let owner = Owner::new();
        let throttle = owner.with(|| StoredValue::new(Throttle::new(250)));
        throttle.update_value(|t| {
            t.offer(0.0, ());
        });

        assert_eq!(wake(throttle, 100.0), TimerStep::Wait(250.0));
        assert_eq!(wake(throttle, 250.0), TimerStep::Settle);
    }
}
