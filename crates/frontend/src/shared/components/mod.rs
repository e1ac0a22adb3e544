pub mod accordion;
pub mod card_animated;
pub mod contact_form;
pub mod empty_state;
pub mod filter_panel;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use accordion::Accordion;
pub use card_animated::{stagger_delay, CardAnimated};
pub use contact_form::ContactForm;
pub use empty_state::{EmptyState, LoadError};
pub use filter_panel::CategoryFilterBar;
pub use page_header::{PageHero, SectionHeader};
pub use stat_card::{ResultsMetrics, StatBox};
