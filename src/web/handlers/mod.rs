//! HTML template rendering handlers.

mod contact_page;

pub use contact_page::{ContactPageTemplate, contact_page_handler};
