use leptos::prelude::*;

/// Button component with the site's call-to-action variants
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "ghost", "white" or "outline-white"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("{} {}", variant_class(variant.get().as_deref()), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Ссылка, оформленная как кнопка ("Explore Solutions", "Learn More")
#[component]
pub fn LinkButton(
    #[prop(into)]
    href: String,
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <a
            href=href
            class=move || format!("{} {}", variant_class(variant.get().as_deref()), additional_class())
        >
            {children()}
        </a>
    }
}

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "secondary" => "btn-secondary",
        "ghost" => "btn-ghost",
        "white" => "btn-white",
        "outline-white" => "btn-outline-white",
        "link" => "link-with-arrow",
        _ => "btn-primary",
    }
}

#[cfg(test)]
mod tests {
    use super::variant_class;

    #[test]
    fn test_variant_class() {
        assert_eq!(variant_class(None), "btn-primary");
        assert_eq!(variant_class(Some("secondary")), "btn-secondary");
        assert_eq!(variant_class(Some("outline-white")), "btn-outline-white");
        assert_eq!(variant_class(Some("unknown")), "btn-primary");
    }
}
