#![allow(dead_code)]

use async_trait::async_trait;
use contact_relay::application::services::{ContactService, ContactSettings};
use contact_relay::domain::entities::{FieldLimits, OutboundEmail, SendReceipt};
use contact_relay::domain::providers::{EmailProvider, ProviderError};
use contact_relay::state::AppState;
use std::sync::{Arc, Mutex};

/// Provider fake that records every email and answers with a scripted result.
pub struct RecordingProvider {
    sent: Mutex<Vec<OutboundEmail>>,
    reply: Result<SendReceipt, ProviderError>,
}

impl RecordingProvider {
    pub fn replying(reply: Result<SendReceipt, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            reply,
        })
    }

    pub fn confirming(id: &str) -> Arc<Self> {
        Self::replying(Ok(SendReceipt::confirmed(id)))
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, email: OutboundEmail) -> Result<SendReceipt, ProviderError> {
        self.sent.lock().unwrap().push(email);
        self.reply.clone()
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub fn test_settings() -> ContactSettings {
    ContactSettings {
        sender: "Portfolio <onboarding@resend.dev>".to_string(),
        recipient: "owner@example.com".to_string(),
        honeypot_field: "website".to_string(),
        limits: FieldLimits::default(),
    }
}

pub fn create_test_state(provider: Option<Arc<RecordingProvider>>) -> AppState {
    create_test_state_with(provider, test_settings())
}

pub fn create_test_state_with(
    provider: Option<Arc<RecordingProvider>>,
    settings: ContactSettings,
) -> AppState {
    let provider = provider.map(|p| p as Arc<dyn EmailProvider>);
    AppState::new(Arc::new(ContactService::new(provider, settings)))
}
