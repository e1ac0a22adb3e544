pub mod accordion;
pub mod carousel;
pub mod catalog;
pub mod config;
