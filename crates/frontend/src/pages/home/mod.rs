//! Главная страница.

mod blog_post_card;
mod solution_card;
mod testimonial_carousel;

use blog_post_card::BlogPostCard;
use solution_card::SolutionCard;
use testimonial_carousel::TestimonialCarousel;

use crate::shared::components::ui::LinkButton;
use crate::shared::components::{stagger_delay, CardAnimated, ContactForm, LoadError, SectionHeader};
use crate::shared::icons::icon;
use crate::shared::page_meta::PageMeta;
use contracts::pages::load_home_page;
use contracts::shared::config::site_config;
use leptos::prelude::*;

/// Блок "Why Choose NextWave": (иконка, заголовок, текст, ссылка)
static VALUE_PROPOSITIONS: [(&str, &str, &str, &str); 3] = [
    (
        "/icons/ai-brain.svg",
        "Smart AI Solutions",
        "Custom artificial intelligence solutions designed to automate processes and deliver actionable insights.",
        "/solutions",
    ),
    (
        "/icons/iot-device.svg",
        "IoT Innovation",
        "Connected devices and sensors that transform physical operations into smart, data-driven systems.",
        "/products",
    ),
    (
        "/icons/australia-map.svg",
        "Australian Expertise",
        "Local knowledge and support tailored to Australian business needs and compliance requirements.",
        "/use-cases",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let tagline = site_config().site.tagline.clone();

    let content = match load_home_page() {
        Ok(props) => view! { <HomeContent props=props /> }.into_any(),
        Err(e) => {
            log::error!("home page: {:#}", e);
            view! { <LoadError error=format!("{:#}", e) /> }.into_any()
        }
    };

    view! {
        <PageMeta
            title=tagline
            description="NextWave delivers cutting-edge AI solutions and IoT products for Australian businesses"
            keywords="AI solutions, IoT products, automation, Australia, smart technology"
            path="/"
        />
        {content}
    }
}

#[component]
fn HomeContent(props: contracts::pages::HomePageProps) -> impl IntoView {
    let contracts::pages::HomePageProps {
        featured_solutions,
        testimonials,
        blog_posts,
        ..
    } = props;
    let contact = &site_config().contact;

    view! {
        // Hero
        <section class="home-hero">
            <div class="container home-hero__content">
                <h1 class="home-hero__title fade-up">"Intelligent Automation for Tomorrow's Challenges"</h1>
                <p class="home-hero__lead fade-up fade-up--delay-1">
                    "NextWave delivers cutting-edge AI solutions and IoT products for Australian businesses"
                </p>
                <div class="home-hero__actions fade-up fade-up--delay-2">
                    <LinkButton href="/solutions">"Explore Solutions"</LinkButton>
                    <LinkButton href="/use-cases" variant="secondary">"See Use Cases"</LinkButton>
                </div>
            </div>
        </section>

        // Value propositions
        <section class="section section--muted">
            <div class="container">
                <SectionHeader title="Why Choose NextWave" />
                <div class="grid grid--3">
                    {VALUE_PROPOSITIONS
                        .iter()
                        .enumerate()
                        .map(|(index, (image, title, text, href))| view! {
                            <CardAnimated delay_ms=stagger_delay(index)>
                                <div class="icon-container">
                                    <img src=*image alt=*title width="64" height="64" />
                                </div>
                                <h3 class="card__title">{*title}</h3>
                                <p class="card__text">{*text}</p>
                                <LinkButton href=*href variant="link">"Learn More"</LinkButton>
                            </CardAnimated>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        // Featured solutions
        <section class="section section--waves">
            <div class="container">
                <SectionHeader title="Transformative Technology Solutions" />
                <div class="grid grid--2">
                    {featured_solutions
                        .into_iter()
                        .enumerate()
                        .map(|(index, solution)| view! { <SolutionCard solution=solution index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>

        // Use case showcase
        <section class="section section--neutral">
            <div class="container">
                <SectionHeader title="Real-World Impact" />
                <div class="showcase">
                    <div class="showcase__text">
                        <span class="showcase__eyebrow">"Manufacturing Industry"</span>
                        <h3 class="showcase__title">"Predictive Maintenance Solution"</h3>
                        <p>
                            "A leading Australian manufacturer was experiencing costly downtime due to unexpected equipment failures."
                        </p>
                        <h4>"Our Solution:"</h4>
                        <p>
                            "Implementation of IoT sensors and AI-powered predictive analytics to forecast maintenance needs before failures occur."
                        </p>
                        <h4>"Results:"</h4>
                        <ul class="check-list">
                            <li>"73% reduction in unplanned downtime"</li>
                            <li>"$1.2M annual maintenance cost savings"</li>
                            <li>"15% increase in equipment lifespan"</li>
                        </ul>
                        <LinkButton href="/use-cases" variant="secondary">"View Full Case Study"</LinkButton>
                    </div>
                    <div class="showcase__image">
                        <img
                            src="/images/use-cases/predictive-maintenance-diagram.svg"
                            alt="Predictive Maintenance Implementation"
                        />
                    </div>
                </div>
            </div>
        </section>

        // Testimonials
        <section class="section section--secondary">
            <div class="container">
                <SectionHeader title="What Our Clients Say" />
                <TestimonialCarousel testimonials=testimonials />
            </div>
        </section>

        // Latest insights
        <section class="section">
            <div class="container">
                <SectionHeader title="Latest Insights" />
                <div class="grid grid--3">
                    {blog_posts
                        .into_iter()
                        .enumerate()
                        .map(|(index, post)| view! { <BlogPostCard post=post index=index /> })
                        .collect_view()}
                </div>
                <div class="section__footer">
                    <LinkButton href="/use-cases" variant="secondary">"View All Articles"</LinkButton>
                </div>
            </div>
        </section>

        // Contact
        <section id="contact" class="section section--neutral">
            <div class="container contact-section">
                <div class="contact-section__intro">
                    <h2>"Ready to Transform Your Business?"</h2>
                    <p class="contact-section__lead">
                        "Get in touch with our team to discuss how NextWave's AI and IoT solutions can help you overcome challenges and drive innovation."
                    </p>
                    <ul class="contact-section__details">
                        <li>
                            <span class="contact-section__icon">{icon("phone")}</span>
                            <span>{contact.phone.clone()}</span>
                        </li>
                        <li>
                            <span class="contact-section__icon">{icon("mail")}</span>
                            <span>{contact.email.clone()}</span>
                        </li>
                    </ul>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
