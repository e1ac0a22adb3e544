pub mod aggregate;

pub use aggregate::CaseStudy;
