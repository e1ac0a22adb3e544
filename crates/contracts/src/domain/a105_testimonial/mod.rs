pub mod aggregate;

pub use aggregate::Testimonial;
