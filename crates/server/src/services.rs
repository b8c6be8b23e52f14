mod feed;
pub mod genre_catalog;
mod http_client;
mod onboarding;
mod subscription;
pub mod video;
pub mod video_cache;

pub use feed::{FeedService, RECOMMENDED_SECTION_ID, RECOMMENDED_SECTION_LABEL};
pub use genre_catalog::{GenreCatalog, GenreSearchParams};
pub use http_client::{build_http_client, HttpClientError};
pub use onboarding::{OnboardingError, OnboardingService};
pub use subscription::{SubscriptionError, SubscriptionProvider, SubscriptionService};
pub use video::{VideoProvider, VideoService, VIDEO_CACHE_TTL};
pub use video_cache::{Clock, ManualClock, ResponseCache, SystemClock};
