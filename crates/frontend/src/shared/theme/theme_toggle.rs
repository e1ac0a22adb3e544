use super::use_theme;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопка переключения светлой/тёмной темы в шапке
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label=move || if ctx.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
