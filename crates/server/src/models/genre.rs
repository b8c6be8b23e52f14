use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entry of the genre catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Genre {
    pub id: String,
    pub label: String,
}
