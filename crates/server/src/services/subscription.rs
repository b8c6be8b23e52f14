use std::sync::Arc;

use async_trait::async_trait;
use payments::{CustomerState, PaymentsClient, PaymentsError};
use thiserror::Error;

use crate::models::SubscriptionState;

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Payments provider error: {0}")]
    Payments(#[from] PaymentsError),
}

/// Source of a customer's subscription state
#[async_trait]
pub trait SubscriptionProvider: Send + Sync {
    async fn customer_state(&self, user_id: &str) -> payments::Result<CustomerState>;
}

#[async_trait]
impl SubscriptionProvider for PaymentsClient {
    async fn customer_state(&self, user_id: &str) -> payments::Result<CustomerState> {
        PaymentsClient::customer_state(self, user_id).await
    }
}

pub struct SubscriptionService {
    provider: Option<Arc<dyn SubscriptionProvider>>,
}

impl SubscriptionService {
    /// `None` means no payments provider is configured; everyone is on the free plan
    pub fn new(provider: Option<Arc<dyn SubscriptionProvider>>) -> Self {
        if provider.is_none() {
            tracing::info!("Payments provider not configured, subscriptions report inactive");
        }
        Self { provider }
    }

    pub async fn state(&self, user_id: &str) -> Result<SubscriptionState, SubscriptionError> {
        let Some(provider) = &self.provider else {
            return Ok(SubscriptionState::default());
        };

        let state = provider.customer_state(user_id).await.map_err(|e| {
            tracing::error!("Failed to get subscription state for {}: {}", user_id, e);
            e
        })?;
        Ok(state.into())
    }
}
