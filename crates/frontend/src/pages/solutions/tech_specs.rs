use crate::shared::icons::icon;
use leptos::prelude::*;

/// Панели технических характеристик: (иконка, заголовок, пункты)
static PANELS: [(&str, &str, [&str; 5]); 4] = [
    (
        "cpu",
        "Technologies Used",
        [
            "TensorFlow and PyTorch for deep learning models",
            "Natural Language Processing with BERT and GPT",
            "Computer Vision with OpenCV and YOLO",
            "Time Series Analysis with Prophet and LSTM",
            "Cloud-based infrastructure on AWS and Azure",
        ],
    ),
    (
        "code",
        "Integration Capabilities",
        [
            "RESTful API and GraphQL interfaces",
            "Webhook support for real-time notifications",
            "Integration with major ERP and CRM systems",
            "Custom connectors for legacy systems",
            "Data pipeline integration with ETL tools",
        ],
    ),
    (
        "shield",
        "Security Features",
        [
            "End-to-end encryption for data in transit and at rest",
            "Role-based access control (RBAC)",
            "Multi-factor authentication",
            "Regular security audits and penetration testing",
            "Compliance with Australian data protection regulations",
        ],
    ),
    (
        "cloud",
        "Scalability Options",
        [
            "Horizontal scaling for increased load",
            "Auto-scaling based on demand",
            "Distributed processing for large datasets",
            "Multi-region deployment options",
            "Modular architecture for easy expansion",
        ],
    ),
];

#[component]
pub fn TechSpecs() -> impl IntoView {
    view! {
        <div class="grid grid--2">
            {PANELS
                .iter()
                .enumerate()
                .map(|(index, (icon_name, title, points))| {
                    let dot = if index % 2 == 0 { "spec-panel__dot" } else { "spec-panel__dot spec-panel__dot--secondary" };
                    view! {
                        <div class="spec-panel">
                            <h3 class="spec-panel__title">
                                {icon(icon_name)}
                                <span>{*title}</span>
                            </h3>
                            <ul class="spec-panel__list">
                                {points
                                    .iter()
                                    .map(|point| view! { <li><span class=dot></span>{*point}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
