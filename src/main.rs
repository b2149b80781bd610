use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod content;
mod components {
    pub mod mouse_glow;
    pub mod scroll_progress;
}
mod hooks {
    pub mod count_up;
    pub mod visibility;
}
mod pages {
    pub mod home;
}

use components::mouse_glow::MouseGlow;
use components::scroll_progress::ScrollProgress;
use pages::home::Home;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Articles", "#articles"),
    ("Impact", "#impact"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #f0fdfa;
                        z-index: 50;
                    }

                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        height: 5rem;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #134e4a;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #4b5563;
                        text-decoration: none;
                        transition: color 0.3s;
                    }

                    .nav-link:hover {
                        color: #134e4a;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #134e4a;
                    }

                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        padding: 1rem 1.5rem;
                        border-top: 1px solid #e5e7eb;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }
                    }

                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <span class="nav-logo">{config::OWNER_NAME}</span>
                <nav class="nav-links">
                    { for NAV_ITEMS.iter().map(|(label, anchor)| html! {
                        <a key={*label} href={*anchor} class="nav-link">{*label}</a>
                    }) }
                </nav>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <nav class="mobile-menu">
                            { for NAV_ITEMS.iter().map(|(label, anchor)| html! {
                                <a key={*label} href={*anchor} class="nav-link" onclick={close_menu.clone()}>
                                    {*label}
                                </a>
                            }) }
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <ScrollProgress />
            <MouseGlow />
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
