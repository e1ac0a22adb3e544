use leptos::prelude::*;

/// Этапы внедрения: (заголовок, срок, описание)
static STEPS: [(&str, &str, &str); 5] = [
    (
        "Discovery",
        "1-2 weeks",
        "We map your processes, data sources and business goals to identify where AI delivers the most value.",
    ),
    (
        "Solution Design",
        "2-3 weeks",
        "Our team designs the models, data pipelines and integrations, and agrees success metrics with you.",
    ),
    (
        "Development",
        "4-8 weeks",
        "Models are trained and validated on your data, with regular demos so you can shape the result.",
    ),
    (
        "Deployment",
        "1-2 weeks",
        "The solution goes live alongside your existing systems, with training for your staff.",
    ),
    (
        "Optimisation",
        "Ongoing",
        "We monitor performance, retrain models as your data changes and extend the solution as you grow.",
    ),
];

#[component]
pub fn ImplementationTimeline() -> impl IntoView {
    view! {
        <ol class="timeline">
            {STEPS
                .iter()
                .enumerate()
                .map(|(index, (title, duration, text))| view! {
                    <li class="timeline__step">
                        <span class="timeline__marker">{index + 1}</span>
                        <div class="timeline__body">
                            <h3 class="timeline__title">{*title}</h3>
                            <span class="timeline__duration">{*duration}</span>
                            <p class="timeline__text">{*text}</p>
                        </div>
                    </li>
                })
                .collect_view()}
        </ol>
    }
}
