pub mod badge;
pub mod button;
pub mod input;
pub mod textarea;

pub use badge::Badge;
pub use button::{Button, LinkButton};
pub use input::Input;
pub use textarea::Textarea;
