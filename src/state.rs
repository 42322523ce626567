//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ContactService;

/// State shared by all routes.
///
/// Holds no mutable data: each request is handled independently.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
}

impl AppState {
    pub fn new(contact_service: Arc<ContactService>) -> Self {
        Self { contact_service }
    }
}
