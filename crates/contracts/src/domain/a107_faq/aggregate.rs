use serde::{Deserialize, Serialize};

/// Вопрос-ответ для аккордеона FAQ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
