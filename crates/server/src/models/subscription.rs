use chrono::{DateTime, Utc};
use payments::{ActiveSubscription, CustomerState};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plan state of the current user
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionState {
    pub active: bool,
    /// First active subscription, if any
    pub subscription: Option<SubscriptionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub id: String,
    pub status: Option<String>,
    pub product_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub recurring_interval: Option<String>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

impl From<ActiveSubscription> for SubscriptionSummary {
    fn from(sub: ActiveSubscription) -> Self {
        Self {
            id: sub.id,
            status: sub.status,
            product_id: sub.product_id,
            amount: sub.amount,
            currency: sub.currency,
            recurring_interval: sub.recurring_interval,
            current_period_end: sub.current_period_end,
            cancel_at_period_end: sub.cancel_at_period_end,
        }
    }
}

impl From<CustomerState> for SubscriptionState {
    fn from(state: CustomerState) -> Self {
        let active = state.has_active_subscription();
        Self {
            active,
            subscription: state
                .active_subscriptions
                .into_iter()
                .next()
                .map(Into::into),
        }
    }
}
