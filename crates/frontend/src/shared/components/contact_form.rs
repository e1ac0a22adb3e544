//! Форма обратной связи.
//!
//! У формы нет серверного API: заявка проверяется на клиенте, пишется в лог
//! и пользователь видит подтверждение.

use crate::shared::components::ui::{Button, Input, Textarea};
use contracts::domain::a108_contact_enquiry::{ContactEnquiry, EnquiryError};
use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactEnquiry::default());
    let errors = RwSignal::new(Vec::<EnquiryError>::new());
    let submitted = RwSignal::new(false);

    let error_for = move |field: &'static str| {
        Signal::derive(move || {
            errors.with(|list| {
                list.iter()
                    .find(|e| e.field() == field)
                    .map(ToString::to_string)
            })
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactEnquiry::validate) {
            Ok(()) => {
                let enquiry = form.get_untracked();
                log::info!(
                    "contact enquiry from {} <{}> ({} chars)",
                    enquiry.name,
                    enquiry.email,
                    enquiry.message.len()
                );
                errors.set(Vec::new());
                form.set(ContactEnquiry::default());
                submitted.set(true);
            }
            Err(list) => {
                log::debug!("contact form rejected: {} errors", list.len());
                errors.set(list);
            }
        }
    };

    view! {
        <div class="contact-form">
            <Show
                when=move || !submitted.get()
                fallback=move || view! {
                    <div class="contact-form__success" role="status">
                        <h3>"Thank you!"</h3>
                        <p>"Your message has been received. Our team will be in touch within one business day."</p>
                        <Button variant="secondary" on_click=Callback::new(move |_: leptos::ev::MouseEvent| submitted.set(false))>
                            "Send another message"
                        </Button>
                    </div>
                }
            >
                <form class="form" novalidate=true on:submit=on_submit>
                    <Input
                        id="contact-name"
                        label="Name"
                        required=true
                        autocomplete="name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        error=error_for("name")
                    />
                    <Input
                        id="contact-email"
                        label="Email"
                        input_type="email"
                        required=true
                        autocomplete="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                        error=error_for("email")
                    />
                    <Input
                        id="contact-company"
                        label="Company"
                        autocomplete="organization"
                        value=Signal::derive(move || form.with(|f| f.company.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.company = v))
                    />
                    <Textarea
                        id="contact-message"
                        label="How can we help?"
                        required=true
                        rows=5
                        value=Signal::derive(move || form.with(|f| f.message.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.message = v))
                        error=error_for("message")
                    />
                    <Button button_type="submit" class="contact-form__submit">
                        "Send Message"
                    </Button>
                </form>
            </Show>
        </div>
    }
}
