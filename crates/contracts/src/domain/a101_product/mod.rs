pub mod aggregate;
pub mod configuration;

pub use aggregate::{Product, ProductId, Specification};
pub use configuration::{ConfigurationSummary, ProductConfiguration};
