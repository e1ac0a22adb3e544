use crate::shared::icons::icon;
use contracts::shared::config::site_config;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let config = site_config();
    let phone_href = format!("tel:{}", config.contact.phone.replace(' ', ""));
    let email_href = format!("mailto:{}", config.contact.email);

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content container">
                <div class="footer__brand">
                    <span class="footer__title">{config.site.name.clone()}</span>
                    <p class="footer__tagline">{config.site.tagline.clone()}</p>
                </div>

                <nav class="footer__links" aria-label="Footer">
                    <A href="/solutions">"Solutions"</A>
                    <A href="/products">"Products"</A>
                    <A href="/use-cases">"Use Cases"</A>
                </nav>

                <address class="footer__contact">
                    <a href=phone_href class="footer__contact-item">
                        {icon("phone")}
                        <span>{config.contact.phone.clone()}</span>
                    </a>
                    <a href=email_href class="footer__contact-item">
                        {icon("mail")}
                        <span>{config.contact.email.clone()}</span>
                    </a>
                </address>
            </div>
            <p class="footer__copyright">
                {format!("© {}. All rights reserved.", config.site.name)}
            </p>
        </footer>
    }
}
