use utoipa::OpenApi;

use crate::api::handlers::HealthResponse;
use crate::error::ErrorResponse;
use crate::models::{
    CompleteOnboardingRequest, CompleteOnboardingResponse, Genre, GenreSections,
    OnboardingStatus, PopularVideos, SubscriptionState, SubscriptionSummary, VideoErrorKind,
    VideoRecord, VideoSection,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Genrefeed API",
        version = "1.0.0"
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "genres", description = "Genre catalog endpoints"),
        (name = "onboarding", description = "Genre onboarding endpoints"),
        (name = "videos", description = "Video grid endpoints"),
        (name = "subscription", description = "Subscription state endpoints")
    ),
    components(schemas(
        ErrorResponse,
        HealthResponse,
        Genre,
        OnboardingStatus,
        CompleteOnboardingRequest,
        CompleteOnboardingResponse,
        VideoRecord,
        VideoErrorKind,
        VideoSection,
        PopularVideos,
        GenreSections,
        SubscriptionState,
        SubscriptionSummary
    ))
)]
pub struct ApiDoc;
