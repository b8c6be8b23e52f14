use crate::{models::VideoItem, YoutubeClient};

/// Parameters for the most-popular chart (`videos.list?chart=mostPopular`)
#[derive(Debug, Clone)]
pub struct PopularParams {
    pub max_results: u32,
    pub region_code: String,
}

impl YoutubeClient {
    /// Fetch the most popular videos for a region.
    ///
    /// Items come back with `id` as a plain string and include statistics.
    pub async fn most_popular(&self, params: &PopularParams) -> crate::Result<Vec<VideoItem>> {
        let url = self.url("/videos");
        let api_key = self.api_key()?;
        let max_results = params.max_results.to_string();

        let response = self
            .http()
            .get(&url)
            .query(&[
                ("part", "snippet,statistics"),
                ("chart", "mostPopular"),
                ("regionCode", params.region_code.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?;

        self.handle_list_response(response).await
    }
}
