use reqwest::Client;
use serde_json::Value;

use crate::error::YoutubeError;
use crate::models::{ListResponse, VideoItem};

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (used by tests and proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the API key, failing when none is configured
    pub(crate) fn api_key(&self) -> crate::Result<&str> {
        if self.api_key.is_empty() {
            return Err(YoutubeError::MissingApiKey);
        }
        Ok(&self.api_key)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the status, decode the envelope and require the `items` list.
    ///
    /// Items are decoded one by one; an item that does not fit [`VideoItem`]
    /// is skipped so the rest of the page survives.
    pub(crate) async fn handle_list_response(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<Vec<VideoItem>> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(YoutubeError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        let envelope: ListResponse<Value> = match serde_path_to_error::deserialize(deserializer) {
            Ok(envelope) => envelope,
            // Valid JSON of the wrong shape, e.g. `items` is not a list
            Err(e) if e.inner().is_data() => {
                return Err(YoutubeError::MissingItems {
                    status_code: status.as_u16(),
                })
            }
            Err(e) => {
                return Err(YoutubeError::Json {
                    path: e.path().to_string(),
                    source: e.into_inner(),
                })
            }
        };

        let items = envelope.items.ok_or(YoutubeError::MissingItems {
            status_code: status.as_u16(),
        })?;

        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                match serde_path_to_error::deserialize::<_, VideoItem>(item) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        tracing::debug!(
                            "Skipping item {} at '{}': {}",
                            index,
                            e.path(),
                            e.inner()
                        );
                        None
                    }
                }
            })
            .collect())
    }
}
