use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who is making a request, as resolved from the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub is_anonymous: bool,
}

/// Data required to mirror a user issued by the auth provider
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub is_anonymous: bool,
}
