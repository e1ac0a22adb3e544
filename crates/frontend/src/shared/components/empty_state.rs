use crate::shared::components::ui::Button;
use leptos::prelude::*;

/// Заглушка для пустого результата фильтра с кнопкой сброса
#[component]
pub fn EmptyState(
    #[prop(into)]
    message: String,
    #[prop(into)]
    reset_label: String,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__message">{message}</p>
            <Button
                variant="secondary"
                class="empty-state__action"
                on_click=Callback::new(move |_: leptos::ev::MouseEvent| on_reset.run(()))
            >
                {reset_label}
            </Button>
        </div>
    }
}

/// Панель ошибки загрузки данных страницы
#[component]
pub fn LoadError(error: String) -> impl IntoView {
    view! {
        <div class="load-error" role="alert">
            <h2 class="load-error__title">"Content unavailable"</h2>
            <p class="load-error__message">
                "This page could not be loaded. Please try again later or contact us directly."
            </p>
            <pre class="load-error__details">{error}</pre>
        </div>
    }
}
