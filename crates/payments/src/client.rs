use reqwest::{Client, StatusCode, Url};

use crate::error::PaymentsError;
use crate::models::CustomerState;

pub struct PaymentsClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl PaymentsClient {
    pub fn new(client: Client, base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Get the state of the customer whose external id is `external_id`.
    ///
    /// A customer the provider has never seen has no subscriptions, so a 404
    /// is reported as an empty state.
    pub async fn customer_state(&self, external_id: &str) -> crate::Result<CustomerState> {
        let response = self
            .client
            .get(self.customer_state_url(external_id)?)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(CustomerState::default());
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(PaymentsError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| PaymentsError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }

    /// `{base}/v1/customers/external/{id}/state`, with the id encoded as a
    /// single path segment
    fn customer_state_url(&self, external_id: &str) -> crate::Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PaymentsError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| PaymentsError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v1", "customers", "external", external_id, "state"]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::get,
        Router,
    };

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn state_handler(Path(id): Path<String>, headers: HeaderMap) -> impl IntoResponse {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer tok") {
            return (StatusCode::UNAUTHORIZED, "bad token".to_string());
        }
        match id.as_str() {
            "paying" => (
                StatusCode::OK,
                r#"{"active_subscriptions": [{"id": "sub_1", "status": "active", "amount": 500, "currency": "usd"}]}"#
                    .to_string(),
            ),
            "free" => (StatusCode::OK, r#"{"active_subscriptions": []}"#.to_string()),
            "team/a?b" => (
                StatusCode::OK,
                r#"{"active_subscriptions": [{"id": "sub_team"}]}"#.to_string(),
            ),
            _ => (StatusCode::NOT_FOUND, "not found".to_string()),
        }
    }

    fn router() -> Router {
        Router::new().route("/v1/customers/external/{id}/state", get(state_handler))
    }

    #[tokio::test]
    async fn test_customer_state() {
        let base = spawn_stub(router()).await;
        let client = PaymentsClient::new(Client::new(), &base, "tok");

        let paying = client.customer_state("paying").await.unwrap();
        assert!(paying.has_active_subscription());
        assert_eq!(paying.active_subscriptions[0].id, "sub_1");

        let free = client.customer_state("free").await.unwrap();
        assert!(!free.has_active_subscription());

        let unknown = client.customer_state("nobody").await.unwrap();
        assert!(!unknown.has_active_subscription());
    }

    #[tokio::test]
    async fn test_external_id_is_one_path_segment() {
        let base = spawn_stub(router()).await;
        let client = PaymentsClient::new(Client::new(), &base, "tok");

        let state = client.customer_state("team/a?b").await.unwrap();
        assert_eq!(state.active_subscriptions[0].id, "sub_team");
    }

    #[test]
    fn test_customer_state_url_keeps_base_path() {
        let client = PaymentsClient::new(Client::new(), "https://pay.example/api/", "tok");
        let url = client.customer_state_url("u 1/x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://pay.example/api/v1/customers/external/u%201%2Fx/state"
        );

        let client = PaymentsClient::new(Client::new(), "not a url", "tok");
        assert!(matches!(
            client.customer_state_url("u1"),
            Err(PaymentsError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_rejected_token_is_api_error() {
        let base = spawn_stub(router()).await;
        let client = PaymentsClient::new(Client::new(), &base, "wrong");

        let err = client.customer_state("paying").await.unwrap_err();
        assert!(matches!(err, PaymentsError::Api { status_code: 401, .. }));
    }

    #[test]
    fn test_camel_case_state() {
        let state: CustomerState = serde_json::from_str(
            r#"{"activeSubscriptions": [{"id": "s", "productId": "p", "cancelAtPeriodEnd": true}]}"#,
        )
        .unwrap();
        assert!(state.has_active_subscription());
        assert_eq!(state.active_subscriptions[0].product_id.as_deref(), Some("p"));
        assert!(state.active_subscriptions[0].cancel_at_period_end);
    }
}
