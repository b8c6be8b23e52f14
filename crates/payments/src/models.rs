use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer state as reported by the payments provider.
///
/// Accepts both the provider's snake_case payload and the camelCase shape
/// produced by auth-side plugins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerState {
    #[serde(default, alias = "activeSubscriptions")]
    pub active_subscriptions: Vec<ActiveSubscription>,
}

impl CustomerState {
    pub fn has_active_subscription(&self) -> bool {
        !self.active_subscriptions.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSubscription {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "productId")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, alias = "recurringInterval")]
    pub recurring_interval: Option<String>,
    #[serde(default, alias = "currentPeriodEnd")]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(default, alias = "cancelAtPeriodEnd")]
    pub cancel_at_period_end: bool,
}
