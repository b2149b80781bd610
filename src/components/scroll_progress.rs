use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Percentage of the maximum scroll offset the page is currently at.
///
/// When the document fits inside the viewport the denominator is zero; the
/// non-finite result is substituted with 0 so the bar stays empty.
fn scroll_fraction(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let progress = offset / (document_height - viewport_height) * 100.0;
    if progress.is_finite() {
        progress
    } else {
        0.0
    }
}

/// Thin bar fixed to the top of the viewport showing how far down the page
/// the reader has scrolled.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_state(|| 0.0f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let listener_window = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let document_height = document
                        .document_element()
                        .map(|root| f64::from(root.scroll_height()))
                        .unwrap_or(0.0);
                    let viewport_height = listener_window
                        .inner_height()
                        .ok()
                        .and_then(|height| height.as_f64())
                        .unwrap_or(0.0);
                    let offset = listener_window.page_y_offset().unwrap_or(0.0);
                    progress.set(scroll_fraction(offset, document_height, viewport_height));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-progress-track">
            <style>
                {r#"
                    .scroll-progress-track {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 4px;
                        z-index: 60;
                    }

                    .scroll-progress-fill {
                        height: 100%;
                        background: #fbbf24;
                        transition: width 0.3s ease-out;
                    }
                "#}
            </style>
            <div class="scroll-progress-fill" style={format!("width: {}%;", *progress)}></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::scroll_fraction;

    #[test]
    fn halfway_through_the_scrollable_range_is_fifty_percent() {
        assert_eq!(scroll_fraction(500.0, 2000.0, 1000.0), 50.0);
    }

    #[test]
    fn top_of_page_is_zero_percent() {
        assert_eq!(scroll_fraction(0.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn bottom_of_page_is_one_hundred_percent() {
        assert_eq!(scroll_fraction(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn unscrollable_page_reports_zero_instead_of_nan() {
        assert_eq!(scroll_fraction(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(10.0, 1000.0, 1000.0), 0.0);
    }
}
