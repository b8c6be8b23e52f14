use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of genres a user can pick
pub const MAX_SELECTED_GENRES: usize = 3;

/// Onboarding status of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OnboardingStatus {
    pub completed: bool,
    /// Selected genre ids in selection order
    pub genres: Vec<String>,
}

/// Request body for completing onboarding; an empty list means "skip"
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CompleteOnboardingRequest {
    pub genres: Vec<String>,
}

impl CompleteOnboardingRequest {
    /// Shape check applied before any catalog lookup
    pub fn validate(&self) -> Result<(), String> {
        if self.genres.len() > MAX_SELECTED_GENRES {
            return Err(format!(
                "At most {} genres can be selected",
                MAX_SELECTED_GENRES
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompleteOnboardingResponse {
    pub success: bool,
}

/// Ordered set of picked genre ids, never larger than [`MAX_SELECTED_GENRES`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSelection {
    ids: Vec<String>,
}

impl GenreSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ids, dropping duplicates and anything past the limit
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if !selection.is_selected(&id) && !selection.is_full() {
                selection.ids.push(id);
            }
        }
        selection
    }

    /// Toggle a genre and return whether it is selected afterwards.
    ///
    /// Selecting a new genre while full is ignored.
    pub fn toggle(&mut self, genre_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == genre_id) {
            self.ids.remove(pos);
            return false;
        }
        if self.is_full() {
            return false;
        }
        self.ids.push(genre_id.to_string());
        true
    }

    pub fn is_selected(&self, genre_id: &str) -> bool {
        self.ids.iter().any(|id| id == genre_id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTED_GENRES
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Per-user onboarding phase. Only `Completed` is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingPhase {
    NotStarted,
    InProgress,
    Completed,
}

/// Client-side onboarding flow: a selection being built toward submission
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    phase: OnboardingPhase,
    selection: GenreSelection,
}

impl OnboardingFlow {
    pub fn new(status: &OnboardingStatus) -> Self {
        let phase = if status.completed {
            OnboardingPhase::Completed
        } else {
            OnboardingPhase::NotStarted
        };
        Self {
            phase,
            selection: GenreSelection::from_ids(status.genres.iter().cloned()),
        }
    }

    pub fn phase(&self) -> OnboardingPhase {
        self.phase
    }

    pub fn selection(&self) -> &GenreSelection {
        &self.selection
    }

    /// Toggle a genre; ignored once onboarding is completed
    pub fn toggle(&mut self, genre_id: &str) -> bool {
        if self.phase == OnboardingPhase::Completed {
            return self.selection.is_selected(genre_id);
        }
        self.phase = OnboardingPhase::InProgress;
        self.selection.toggle(genre_id)
    }

    /// Request that submits the current selection
    pub fn submit_request(&self) -> CompleteOnboardingRequest {
        CompleteOnboardingRequest {
            genres: self.selection.ids().to_vec(),
        }
    }

    /// Request that completes onboarding without any genre
    pub fn skip_request(&self) -> CompleteOnboardingRequest {
        CompleteOnboardingRequest::default()
    }

    /// Record that the server accepted a submission
    pub fn mark_completed(&mut self) {
        self.phase = OnboardingPhase::Completed;
    }
}
