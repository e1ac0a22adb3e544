pub mod catalog_state;
pub mod components;
pub mod icons;
pub mod modal;
pub mod page_meta;
pub mod theme;
