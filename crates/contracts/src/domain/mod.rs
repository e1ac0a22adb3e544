pub mod a101_product;
pub mod a102_solution;
pub mod a103_use_case;
pub mod a104_case_study;
pub mod a105_testimonial;
pub mod a106_blog_post;
pub mod a107_faq;
pub mod a108_contact_enquiry;
pub mod common;
