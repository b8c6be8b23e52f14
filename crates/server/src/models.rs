mod genre;
mod onboarding;
mod subscription;
mod user;
mod video;

pub use genre::Genre;
pub use onboarding::{
    CompleteOnboardingRequest, CompleteOnboardingResponse, GenreSelection, OnboardingFlow,
    OnboardingPhase, OnboardingStatus, MAX_SELECTED_GENRES,
};
pub use subscription::{SubscriptionState, SubscriptionSummary};
pub use user::{Identity, NewUser};
pub use video::{
    GenreSections, PopularVideos, VideoErrorKind, VideoRecord, VideoSection, VideoServiceError,
    VideoServiceResult,
};
