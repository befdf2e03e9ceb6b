pub mod accordion;
pub mod accordion_list;
pub mod checkbox;
pub mod footer;
