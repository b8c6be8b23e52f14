use crate::{models::VideoItem, YoutubeClient};

/// Parameters for a free-text search (`search.list?type=video`)
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub max_results: u32,
    pub region_code: String,
    pub relevance_language: Option<String>,
}

impl YoutubeClient {
    /// Search videos by free text, ordered by view count.
    ///
    /// Items come back with `id` nested as `{ videoId }` and without statistics.
    pub async fn search(&self, params: &SearchParams) -> crate::Result<Vec<VideoItem>> {
        let url = self.url("/search");
        let api_key = self.api_key()?;
        let max_results = params.max_results.to_string();

        let mut request = self.http().get(&url).query(&[
            ("part", "snippet"),
            ("type", "video"),
            ("q", params.query.as_str()),
            ("order", "viewCount"),
            ("regionCode", params.region_code.as_str()),
            ("maxResults", max_results.as_str()),
            ("key", api_key),
        ]);

        if let Some(lang) = &params.relevance_language {
            request = request.query(&[("relevanceLanguage", lang.as_str())]);
        }

        let response = request.send().await?;
        self.handle_list_response(response).await
    }
}
