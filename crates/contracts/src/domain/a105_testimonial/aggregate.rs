use serde::{Deserialize, Serialize};

/// Отзыв клиента для карусели на главной
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub image: String,
}

impl Testimonial {
    /// "Operations Director, Australian Manufacturing Co."
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.title, self.company)
    }
}
