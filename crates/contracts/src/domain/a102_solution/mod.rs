pub mod aggregate;

pub use aggregate::{FeaturedSolution, SolutionCategory};
