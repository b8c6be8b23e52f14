use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::Genre;
use crate::repositories::GenreRepository;

/// Upstream search parameters for one genre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreSearchParams {
    pub search_query: &'static str,
}

// Queries target the JP region, hence Japanese keywords
const GENRE_SEARCH_PARAMS: &[(&str, GenreSearchParams)] = &[
    ("action", GenreSearchParams { search_query: "アクション映画 予告" }),
    ("comedy", GenreSearchParams { search_query: "コメディ 面白い" }),
    ("drama", GenreSearchParams { search_query: "ドラマ 感動" }),
    ("horror", GenreSearchParams { search_query: "ホラー映画 怖い" }),
    ("sci-fi", GenreSearchParams { search_query: "SF 映画 サイエンスフィクション" }),
    ("romance", GenreSearchParams { search_query: "恋愛映画 ラブストーリー" }),
    ("anime", GenreSearchParams { search_query: "アニメ PV 予告" }),
    ("documentary", GenreSearchParams { search_query: "ドキュメンタリー" }),
    ("thriller", GenreSearchParams { search_query: "スリラー映画 サスペンス" }),
    ("fantasy", GenreSearchParams { search_query: "ファンタジー映画" }),
];

const DEFAULT_SEARCH_PARAMS: GenreSearchParams = GenreSearchParams {
    search_query: "おすすめ",
};

/// Search parameters for a genre, or the generic default when unmapped
pub fn search_params(genre_id: &str) -> GenreSearchParams {
    GENRE_SEARCH_PARAMS
        .iter()
        .find(|(id, _)| *id == genre_id)
        .map(|(_, params)| *params)
        .unwrap_or(DEFAULT_SEARCH_PARAMS)
}

/// Whether a genre has its own search mapping
pub fn is_supported(genre_id: &str) -> bool {
    GENRE_SEARCH_PARAMS.iter().any(|(id, _)| *id == genre_id)
}

pub fn default_search_params() -> GenreSearchParams {
    DEFAULT_SEARCH_PARAMS
}

/// Read-only view of the genre catalog stored in the database.
///
/// The stored ids are the authority on which genres a user may pick.
pub struct GenreCatalog {
    db: SqlitePool,
}

impl GenreCatalog {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Genre>, sqlx::Error> {
        GenreRepository::list(&self.db).await
    }

    /// Map of genre id to display label
    pub async fn labels(&self) -> Result<HashMap<String, String>, sqlx::Error> {
        let genres = GenreRepository::list(&self.db).await?;
        Ok(genres.into_iter().map(|g| (g.id, g.label)).collect())
    }

    /// Return the ids from `ids` that are not in the catalog, in input order
    pub async fn find_unknown(&self, ids: &[String]) -> Result<Vec<String>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let valid = GenreRepository::list_ids(&self.db).await?;
        Ok(ids
            .iter()
            .filter(|id| !valid.contains(*id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;

    #[test]
    fn test_search_params_mapping() {
        assert_eq!(search_params("anime").search_query, "アニメ PV 予告");
        assert_eq!(search_params("sci-fi").search_query, "SF 映画 サイエンスフィクション");
        assert_eq!(search_params("unmapped"), default_search_params());
        assert!(is_supported("fantasy"));
        assert!(!is_supported("unmapped"));
    }

    #[tokio::test]
    async fn test_every_seeded_genre_is_mapped() {
        let catalog = GenreCatalog::new(create_test_pool().await);
        let genres = catalog.list().await.unwrap();

        assert_eq!(genres.len(), GENRE_SEARCH_PARAMS.len());
        assert_eq!(genres[0].id, "action");
        assert!(genres.iter().all(|g| is_supported(&g.id)));
    }

    #[tokio::test]
    async fn test_find_unknown() {
        let catalog = GenreCatalog::new(create_test_pool().await);
        let ids = vec![
            "action".to_string(),
            "comedy".to_string(),
            "bogus-id".to_string(),
        ];

        assert_eq!(
            catalog.find_unknown(&ids).await.unwrap(),
            vec!["bogus-id".to_string()]
        );
        assert!(catalog.find_unknown(&[]).await.unwrap().is_empty());
    }
}
