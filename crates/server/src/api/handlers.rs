mod genre;
mod health;
mod onboarding;
mod subscription;
mod video;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

/// Upper bound accepted for `maxResults`, matching the upstream API
const MAX_RESULTS_LIMIT: u32 = 50;
const DEFAULT_POPULAR_RESULTS: u32 = 12;
const DEFAULT_GENRE_RESULTS: u32 = 8;

/// Query parameters for video listings
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MaxResultsQuery {
    /// Number of videos per list (1-50)
    pub max_results: Option<u32>,
}

impl MaxResultsQuery {
    fn resolve(&self, default: u32) -> AppResult<u32> {
        match self.max_results {
            None => Ok(default),
            Some(n) if (1..=MAX_RESULTS_LIMIT).contains(&n) => Ok(n),
            Some(n) => Err(AppError::bad_request(format!(
                "maxResults must be between 1 and {}, got {}",
                MAX_RESULTS_LIMIT, n
            ))),
        }
    }
}

// Re-export all handlers
pub use genre::list_genres;
pub use health::{health, HealthResponse};
pub use onboarding::{complete_onboarding, get_onboarding_status};
pub use subscription::get_subscription;
pub use video::{get_popular_videos, get_videos_by_genres};

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use genre::__path_list_genres;
#[doc(hidden)]
pub use health::__path_health;
#[doc(hidden)]
pub use onboarding::{__path_complete_onboarding, __path_get_onboarding_status};
#[doc(hidden)]
pub use subscription::__path_get_subscription;
#[doc(hidden)]
pub use video::{__path_get_popular_videos, __path_get_videos_by_genres};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_results_defaults_and_bounds() {
        let query = MaxResultsQuery::default();
        assert_eq!(query.resolve(12).unwrap(), 12);

        let query = MaxResultsQuery {
            max_results: Some(50),
        };
        assert_eq!(query.resolve(12).unwrap(), 50);

        for bad in [0, 51] {
            let query = MaxResultsQuery {
                max_results: Some(bad),
            };
            assert!(matches!(query.resolve(8), Err(AppError::BadRequest(_))));
        }
    }
}
