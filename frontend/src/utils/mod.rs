pub mod dom;

pub use dom::{blocking_alert, count_rendered_titles};
