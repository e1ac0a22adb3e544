pub mod domain;
pub mod pages;
pub mod shared;
