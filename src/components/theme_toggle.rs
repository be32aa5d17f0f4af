use web_sys::MouseEvent;
use yew::prelude::*;

const THEME_KEY: &str = "theme";

pub fn stored_theme() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_KEY).ok())
        .flatten()
        .unwrap_or_else(|| "dark".to_string())
}

/// Sets the `data-theme` attribute the global stylesheet keys off.
pub fn apply_theme(theme: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme);
    }
}

fn persist_theme(theme: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(THEME_KEY, theme);
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(stored_theme);

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = if *theme == "dark" { "light" } else { "dark" };
            apply_theme(next);
            persist_theme(next);
            theme.set(next.to_string());
        })
    };

    html! {
        <button class="theme-toggle" onclick={toggle} aria-label="Toggle theme">
            <style>
            {r#"
                .theme-toggle {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 10px;
                    background: rgba(255, 255, 255, 0.05);
                    padding: 0.4rem 0.6rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                [data-theme="light"] .theme-toggle {
                    border-color: rgba(0, 0, 0, 0.1);
                    background: rgba(0, 0, 0, 0.05);
                }
            "#}
            </style>
            { if *theme == "dark" { "🌙" } else { "☀️" } }
        </button>
    }
}
