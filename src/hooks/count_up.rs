use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A metric string split into its literal decoration and the number to
/// animate, e.g. `"$10M+"` -> prefix `"$"`, value `10`, suffix `"M+"`.
pub struct MetricParts {
    prefix: String,
    value: u64,
    suffix: String,
}

impl MetricParts {
    /// The prefix is everything before the first digit, the suffix everything
    /// after the last one. A string without digits animates as a plain 0.
    pub fn parse(raw: &str) -> Self {
        let first = raw.find(|c: char| c.is_ascii_digit());
        let last = raw.rfind(|c: char| c.is_ascii_digit());
        match (first, last) {
            (Some(first), Some(last)) => {
                let value = raw[first..=last]
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect::<String>()
                    .parse()
                    .unwrap_or(0);
                MetricParts {
                    prefix: raw[..first].to_string(),
                    value,
                    suffix: raw[last + 1..].to_string(),
                }
            }
            _ => MetricParts {
                prefix: String::new(),
                value: 0,
                suffix: raw.to_string(),
            },
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn render(&self, count: u64) -> String {
        format!("{}{}{}", self.prefix, count, self.suffix)
    }
}

fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Fraction of the animation completed after `elapsed` ms, holding at 0 until
/// the start delay has passed and saturating at 1.
fn animation_progress(elapsed: f64, delay: f64, duration: f64) -> f64 {
    if elapsed < delay {
        return 0.0;
    }
    if duration <= 0.0 {
        return 1.0;
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}

fn eased_count(progress: f64, target: u64) -> u64 {
    (ease_out_quart(progress) * target as f64).floor() as u64
}

/// Animates a metric string from its zero baseline up to `target` over
/// `duration_ms`, starting `delay_ms` after `visible` flips true.
///
/// The animation runs on `requestAnimationFrame` and stops scheduling once it
/// reaches the target. Changing any input, or tearing the component down,
/// cancels the pending frame so stale loops never touch the display.
#[hook]
pub fn use_count_up(target: String, duration_ms: u32, delay_ms: u32, visible: bool) -> String {
    let parts = MetricParts::parse(&target);
    let count = use_state(|| 0u64);

    {
        let count = count.clone();
        let target_value = parts.value();
        use_effect_with_deps(
            move |(_, duration_ms, delay_ms, visible)| {
                let duration = f64::from(*duration_ms);
                let delay = f64::from(*delay_ms);
                let pending_frame = Rc::new(Cell::new(None::<i32>));
                let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));

                if *visible {
                    let window = web_sys::window().unwrap();
                    let frame_window = window.clone();
                    let start_time = Cell::new(None::<f64>);
                    let tick_handle = tick.clone();
                    let frame_slot = pending_frame.clone();

                    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let started = start_time.get().unwrap_or_else(|| {
                            start_time.set(Some(now));
                            now
                        });
                        let progress = animation_progress(now - started, delay, duration);
                        count.set(eased_count(progress, target_value));

                        if progress < 1.0 {
                            if let Some(tick) = tick_handle.borrow().as_ref() {
                                let id = frame_window
                                    .request_animation_frame(tick.as_ref().unchecked_ref())
                                    .unwrap();
                                frame_slot.set(Some(id));
                            }
                        } else {
                            frame_slot.set(None);
                        }
                    })
                        as Box<dyn FnMut(f64)>));

                    if let Some(tick) = tick.borrow().as_ref() {
                        let id = window
                            .request_animation_frame(tick.as_ref().unchecked_ref())
                            .unwrap();
                        pending_frame.set(Some(id));
                    }
                }

                move || {
                    if let Some(id) = pending_frame.take() {
                        if let Some(window) = web_sys::window() {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                    tick.borrow_mut().take();
                }
            },
            (target, duration_ms, delay_ms, visible),
        );
    }

    parts.render(*count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_prefix_and_suffix() {
        let parts = MetricParts::parse("$10M+");
        assert_eq!(parts.value(), 10);
        assert_eq!(parts.render(0), "$0M+");
        assert_eq!(parts.render(10), "$10M+");
    }

    #[test]
    fn parse_handles_suffix_only() {
        let parts = MetricParts::parse("35%");
        assert_eq!(parts.value(), 35);
        assert_eq!(parts.render(35), "35%");
    }

    #[test]
    fn parse_handles_prefix_only() {
        let parts = MetricParts::parse("50+");
        assert_eq!(parts.value(), 50);
        assert_eq!(parts.render(12), "12+");
    }

    #[test]
    fn parse_without_digits_falls_back_to_zero() {
        let parts = MetricParts::parse("N/A");
        assert_eq!(parts.value(), 0);
        assert_eq!(parts.render(0), "0N/A");
    }

    #[test]
    fn progress_holds_at_zero_during_delay() {
        assert_eq!(animation_progress(0.0, 200.0, 2000.0), 0.0);
        assert_eq!(animation_progress(199.0, 200.0, 2000.0), 0.0);
    }

    #[test]
    fn progress_saturates_at_one() {
        assert_eq!(animation_progress(2000.0, 0.0, 2000.0), 1.0);
        assert_eq!(animation_progress(9999.0, 0.0, 2000.0), 1.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        assert_eq!(animation_progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn count_starts_at_zero_and_ends_exactly_on_target() {
        assert_eq!(eased_count(0.0, 10), 0);
        assert_eq!(eased_count(1.0, 10), 10);
    }

    #[test]
    fn count_never_decreases_and_never_overshoots() {
        let target = 35;
        let mut previous = 0;
        for step in 0..=200 {
            let progress = animation_progress(f64::from(step) * 10.0, 0.0, 2000.0);
            let count = eased_count(progress, target);
            assert!(count >= previous);
            assert!(count <= target);
            previous = count;
        }
        assert_eq!(previous, target);
    }

    #[test]
    fn easing_decelerates_toward_the_end() {
        let early = ease_out_quart(0.25) - ease_out_quart(0.0);
        let late = ease_out_quart(1.0) - ease_out_quart(0.75);
        assert!(early > late);
    }
}
