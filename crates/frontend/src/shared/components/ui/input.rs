use leptos::prelude::*;

/// Input component with label and inline error
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let has_error = move || error.with(Option::is_some);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class=move || if has_error() { "form__input form__input--error" } else { "form__input" }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                autocomplete=input_autocomplete
                aria-invalid=move || has_error().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
        </div>
    }
}
