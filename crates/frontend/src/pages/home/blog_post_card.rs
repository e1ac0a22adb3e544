use crate::shared::components::ui::{Badge, LinkButton};
use crate::shared::components::{stagger_delay, CardAnimated};
use contracts::domain::a106_blog_post::BlogPost;
use leptos::prelude::*;

#[component]
pub fn BlogPostCard(post: BlogPost, index: usize) -> impl IntoView {
    let date = post.display_date();
    let datetime = post.date.format("%Y-%m-%d").to_string();
    let href = post.href();

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="blog-card">
            <img class="blog-card__image" src=post.image alt=post.title.clone() loading="lazy" />
            <div class="blog-card__meta">
                <Badge variant="secondary">{post.category}</Badge>
                <time datetime=datetime>{date}</time>
            </div>
            <h3 class="card__title">{post.title}</h3>
            <p class="card__text">{post.excerpt}</p>
            <LinkButton href=href variant="link">"Read More"</LinkButton>
        </CardAnimated>
    }
}
