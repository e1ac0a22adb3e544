pub mod aggregate;

pub use aggregate::BlogPost;
