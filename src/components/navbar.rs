use crate::components::theme_toggle::ThemeToggle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_start_assessment: Callback<()>,
}

/// Floating navigation bar, hidden until the visitor scrolls past the hero.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_cb = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_for_cb.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 120.0);
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

    let start_assessment = {
        let on_start = props.on_start_assessment.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_start.emit(());
        })
    };

    html! {
        <nav class={classes!("site-nav", (*is_scrolled).then(|| "visible"))}>
            <style>
            {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 1.5rem;
                    transform: translateY(-110%);
                    transition: transform 0.3s ease;
                }
                .site-nav.visible { transform: translateY(0); }
                .site-nav-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.9rem 1.5rem;
                    background: rgba(11, 14, 20, 0.75);
                    backdrop-filter: blur(16px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                }
                [data-theme="light"] .site-nav-inner {
                    background: rgba(255, 255, 255, 0.8);
                    border-color: rgba(0, 0, 0, 0.08);
                }
                .site-nav-logo {
                    font-weight: 700;
                    font-size: 1.15rem;
                    letter-spacing: 0.02em;
                    color: var(--fg);
                    text-decoration: none;
                }
                .site-nav-logo span { color: var(--primary); }
                .site-nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .site-nav-links a {
                    color: var(--fg);
                    opacity: 0.7;
                    text-decoration: none;
                    font-size: 0.92rem;
                    font-weight: 500;
                }
                .site-nav-links a:hover { opacity: 1; color: var(--primary); }
                .site-nav-cta {
                    padding: 0.55rem 1.3rem;
                    background: transparent;
                    border: 1px solid var(--primary);
                    border-radius: 10px;
                    color: var(--primary);
                    font-weight: 700;
                    font-size: 0.9rem;
                    cursor: pointer;
                }
                .site-nav-cta:hover { background: rgba(8, 97, 242, 0.08); }
                .site-nav-burger {
                    display: none;
                    border: none;
                    background: none;
                    color: var(--fg);
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .site-nav-burger { display: block; }
                    .site-nav-links {
                        display: none;
                        position: absolute;
                        top: calc(100% + 0.5rem);
                        left: 1.5rem;
                        right: 1.5rem;
                        flex-direction: column;
                        align-items: stretch;
                        text-align: center;
                        padding: 1.25rem;
                        background: rgba(11, 14, 20, 0.95);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                    }
                    .site-nav-links.open { display: flex; }
                }
            "#}
            </style>
            <div class="site-nav-inner">
                <a href="/" class="site-nav-logo">{"ITIS "}<span>{"Secure"}</span></a>
                <button class="site-nav-burger" onclick={toggle_menu}>{"☰"}</button>
                <div class={classes!("site-nav-links", (*menu_open).then(|| "open"))}>
                    <a href="#services" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="#faq" onclick={close_menu.clone()}>{"FAQ"}</a>
                    <a href="#contact" onclick={close_menu}>{"Contact"}</a>
                    <ThemeToggle />
                    <button class="site-nav-cta" onclick={start_assessment}>
                        {"Start Assessment"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
