use std::sync::Arc;

use payments::PaymentsClient;
use sqlx::SqlitePool;
use youtube::YoutubeClient;

use crate::config::Config;
use crate::services::{
    build_http_client, FeedService, GenreCatalog, HttpClientError, OnboardingService,
    ResponseCache, SubscriptionProvider, SubscriptionService, VideoProvider, VideoService,
    VIDEO_CACHE_TTL,
};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub videos: Arc<VideoService>,
    pub catalog: Arc<GenreCatalog>,
    pub onboarding: Arc<OnboardingService>,
    pub feed: Arc<FeedService>,
    pub subscription: Arc<SubscriptionService>,
}

impl AppState {
    /// Wire the services against the real upstream clients
    pub fn new(db: SqlitePool, config: Config) -> Result<Self, HttpClientError> {
        let http_client = build_http_client()?;

        let youtube: Arc<dyn VideoProvider> = Arc::new(YoutubeClient::new(
            http_client.clone(),
            config.video.api_key.clone(),
        ));

        let payments = config.payments.as_ref().map(|p| {
            Arc::new(PaymentsClient::new(
                http_client.clone(),
                p.api_url.clone(),
                p.access_token.clone(),
            )) as Arc<dyn SubscriptionProvider>
        });

        Ok(Self::with_providers(db, config, youtube, payments))
    }

    /// Wire the services against arbitrary providers
    pub fn with_providers(
        db: SqlitePool,
        config: Config,
        video_provider: Arc<dyn VideoProvider>,
        subscription_provider: Option<Arc<dyn SubscriptionProvider>>,
    ) -> Self {
        let videos = Arc::new(
            VideoService::new(
                video_provider,
                ResponseCache::new().with_default_ttl(VIDEO_CACHE_TTL),
            )
            .with_relevance_language(config.video.relevance_language.clone()),
        );
        let catalog = Arc::new(GenreCatalog::new(db.clone()));
        let onboarding = Arc::new(OnboardingService::new(db.clone(), Arc::clone(&catalog)));
        let feed = Arc::new(FeedService::new(
            db.clone(),
            Arc::clone(&videos),
            Arc::clone(&catalog),
            config.video.region_code.clone(),
        ));
        let subscription = Arc::new(SubscriptionService::new(subscription_provider));

        Self {
            db,
            config: Arc::new(config),
            videos,
            catalog,
            onboarding,
            feed,
            subscription,
        }
    }
}
