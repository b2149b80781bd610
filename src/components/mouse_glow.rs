use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Decorative blurred glow that trails the pointer. Purely cosmetic; the
/// layer ignores pointer events so it never blocks the page underneath.
#[function_component(MouseGlow)]
pub fn mouse_glow() -> Html {
    let position = use_state(|| (0i32, 0i32));

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let move_callback = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                    position.set((event.client_x(), event.client_y()));
                }) as Box<dyn FnMut(web_sys::MouseEvent)>);

                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        move_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            move_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let (x, y) = *position;

    html! {
        <div class="mouse-glow-layer">
            <style>
                {r#"
                    .mouse-glow-layer {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                        z-index: 0;
                    }

                    .mouse-glow {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        background: rgba(20, 184, 166, 0.05);
                        filter: blur(64px);
                        transform: translate(-50%, -50%);
                        transition: all 1s cubic-bezier(0.075, 0.82, 0.165, 1);
                    }
                "#}
            </style>
            <div class="mouse-glow" style={format!("left: {}px; top: {}px;", x, y)}></div>
        </div>
    }
}
