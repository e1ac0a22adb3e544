use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно поверх страницы.
///
/// Закрывается кликом по подложке, кнопкой закрытия и клавишей Escape.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional footer actions ("Request Quote" etc.)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key; listener is removed together with the modal
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let aria_label = title.clone();

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                on:click=stop_propagation
            >
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        type="button"
                        class="modal__close"
                        aria-label="Close"
                        on:click=handle_close
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|actions| view! { <div class="modal-footer">{actions.run()}</div> })}
            </div>
        </div>
    }
}
