pub mod home;
pub mod not_found;
pub mod products;
pub mod solutions;
pub mod use_cases;
