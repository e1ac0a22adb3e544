pub mod aggregate;

pub use aggregate::{FeaturedStory, IndustryResults, ResultMetric, UseCase};
