//! Timed interpolation for the stat counters, kept apart from the DOM so it
//! can be driven with injected timestamps.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub target: u64,
    pub easing: fn(f64) -> f64,
}

impl Tween {
    pub fn new(start_ms: f64, duration_ms: f64, target: u64) -> Self {
        Self {
            start_ms,
            duration_ms,
            target,
            easing: ease_out_cubic,
        }
    }

    /// Elapsed fraction clamped to `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn value_at(&self, now_ms: f64) -> u64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.target;
        }
        let eased = (self.target as f64 * (self.easing)(p)).floor();
        (eased as u64).min(self.target)
    }
}

/// Western digits with `,` every three places.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Continue,
    Stop,
}

/// Runs `step` once per display refresh until it returns `Frame::Stop`.
pub fn run_frames<F>(mut step: F)
where
    F: FnMut(f64) -> Frame + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_clone = slot.clone();
    let window_clone = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if step(now) == Frame::Stop {
            // Breaks the self-reference so the closure is freed.
            slot_clone.borrow_mut().take();
            return;
        }
        if let Some(callback) = slot_clone.borrow().as_ref() {
            if window_clone
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("requestAnimationFrame rejected, counter stopped early");
            }
        };
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = slot.borrow().as_ref() {
        if window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("requestAnimationFrame unavailable");
        }
    };
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_follows_cubic_ease_out() {
        let tween = Tween::new(1000.0, 1500.0, 1500);
        for step in 0..=20 {
            let p = step as f64 / 20.0;
            let now = 1000.0 + p * 1500.0;
            let expected = if p >= 1.0 {
                1500
            } else {
                (1500.0 * (1.0 - (1.0 - p).powi(3))).floor() as u64
            };
            assert_eq!(tween.value_at(now), expected, "p = {p}");
        }
    }

    #[test]
    fn finishes_exactly_on_target() {
        for target in [0, 1, 7, 98, 320, 1500, 123_457] {
            let tween = Tween::new(0.0, 1500.0, target);
            assert_eq!(tween.value_at(1500.0), target);
            assert_eq!(tween.value_at(10_000.0), target);
            assert!(tween.is_finished(1500.0));
        }
    }

    #[test]
    fn progress_is_clamped() {
        let tween = Tween::new(500.0, 1500.0, 10);
        assert_eq!(tween.progress(0.0), 0.0);
        assert_eq!(tween.value_at(0.0), 0);
        assert_eq!(tween.progress(5000.0), 1.0);
    }

    #[test]
    fn never_overshoots_midway() {
        let tween = Tween::new(0.0, 1500.0, 98);
        let mut last = 0;
        for ms in 0..1500 {
            let v = tween.value_at(ms as f64);
            assert!(v <= 98);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(Tween::new(0.0, 0.0, 42).value_at(0.0), 42);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(98), "98");
        assert_eq!(format_grouped(1500), "1,500");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
        assert_eq!(format_grouped(100_000), "100,000");
    }
}
