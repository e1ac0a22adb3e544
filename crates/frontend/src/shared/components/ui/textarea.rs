use leptos::prelude::*;

/// Textarea component with label and inline error
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(4);
    let has_error = move || error.with(Option::is_some);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <textarea
                id=textarea_id
                class=move || if has_error() { "form__textarea form__textarea--error" } else { "form__textarea" }
                placeholder=textarea_placeholder
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                aria-invalid=move || has_error().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
        </div>
    }
}
