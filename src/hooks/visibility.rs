use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

/// A region counts as visible once at least `threshold` of its area is inside
/// the viewport.
fn past_threshold(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

/// Tracks whether the element behind `node` is visible in the viewport.
///
/// The observer is attached after the element has mounted and disconnected on
/// teardown or when the inputs change. If the `NodeRef` never resolves to an
/// element the flag simply stays false.
#[hook]
pub fn use_visible(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let threshold = *threshold;
                let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                    if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                        visible.set(past_threshold(entry.intersection_ratio(), threshold));
                    }
                }) as Box<dyn FnMut(js_sys::Array)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(threshold));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

                if let Some(element) = node.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (node, threshold),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::past_threshold;

    #[test]
    fn ratio_at_or_above_threshold_is_visible() {
        assert!(past_threshold(0.2, 0.2));
        assert!(past_threshold(0.75, 0.2));
        assert!(past_threshold(1.0, 1.0));
    }

    #[test]
    fn ratio_below_threshold_is_hidden() {
        assert!(!past_threshold(0.19, 0.2));
        assert!(!past_threshold(0.0, 0.1));
    }

    #[test]
    fn zero_threshold_always_reports_visible() {
        assert!(past_threshold(0.0, 0.0));
        assert!(past_threshold(0.5, 0.0));
    }
}
