pub mod accordion;
pub mod footer;
pub mod types;

pub use accordion::{panel_max_height, AccordionState};
pub use footer::FooterContent;
pub use types::*;
