pub mod aggregate;

pub use aggregate::{ContactEnquiry, EnquiryError};
