//! Postgres-backed element and recipe lookups.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{Postgres, QueryBuilder, Row};

use anycraft_domain::{ChallengeCandidate, Element, ElementId, GameCode, ParentPair};

use crate::infrastructure::ports::{ElementRepo, RepoError};

const LIST_BASE_ELEMENTS_SQL: &str = r#"
    SELECT e.element_id, e.slug, e.name, e.emoji, e.is_character, e.is_base_element,
           e.image_url, e.rarity, e.difficulty
    FROM element e
    JOIN game g ON e.game_id = g.game_id
    WHERE g.code = $1 AND e.is_base_element = true
    ORDER BY e.name
"#;

/// Recipes store their parents normalized (`parent_a_id <= parent_b_id`).
const FIND_RECIPE_RESULT_SQL: &str = r#"
    SELECT e.element_id, e.slug, e.name, e.emoji, e.is_character, e.is_base_element,
           e.image_url, e.rarity, e.difficulty
    FROM recipe r
    JOIN game g ON r.game_id = g.game_id
    JOIN element e ON e.element_id = r.result_id
    WHERE g.code = $1 AND r.parent_a_id = $2 AND r.parent_b_id = $3
"#;

/// Postgres implementation of [`ElementRepo`].
#[derive(Clone)]
pub struct PgElementRepo {
    pool: PgPool,
}

impl PgElementRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ElementRepo for PgElementRepo {
    async fn list_base_elements(&self, game: &GameCode) -> Result<Vec<Element>, RepoError> {
        let rows = sqlx::query(LIST_BASE_ELEMENTS_SQL)
            .bind(game.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_base_elements", e))?;

        rows.iter()
            .map(row_to_element)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::database("list_base_elements", e))
    }

    async fn find_recipe_result(
        &self,
        game: &GameCode,
        pair: ParentPair,
    ) -> Result<Option<Element>, RepoError> {
        let row = sqlx::query(FIND_RECIPE_RESULT_SQL)
            .bind(game.as_str())
            .bind(pair.first().get())
            .bind(pair.second().get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_recipe_result", e))?;

        row.as_ref()
            .map(row_to_element)
            .transpose()
            .map_err(|e| RepoError::database("find_recipe_result", e))
    }

    async fn list_challenge_candidates(
        &self,
        game: &GameCode,
        exclude: &[ElementId],
    ) -> Result<Vec<ChallengeCandidate>, RepoError> {
        let mut query = challenge_candidates_query(game, exclude);
        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_challenge_candidates", e))?;

        rows.iter()
            .map(row_to_challenge_candidate)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::database("list_challenge_candidates", e))
    }
}

/// Character elements of `game`, minus `exclude`.
///
/// The exclusion predicate is only emitted for a non-empty set.
fn challenge_candidates_query<'a>(
    game: &'a GameCode,
    exclude: &[ElementId],
) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT e.element_id, e.name, e.image_url \
         FROM element e \
         JOIN game g ON e.game_id = g.game_id \
         WHERE g.code = ",
    );
    query.push_bind(game.as_str());
    query.push(" AND e.is_character = true");

    if !exclude.is_empty() {
        let ids: Vec<i32> = exclude.iter().map(|id| id.get()).collect();
        query.push(" AND NOT (e.element_id = ANY(");
        query.push_bind(ids);
        query.push("))");
    }

    query.push(" ORDER BY e.element_id");
    query
}

fn row_to_element(row: &PgRow) -> Result<Element, sqlx::Error> {
    Ok(Element {
        id: ElementId::new(row.try_get("element_id")?),
        slug: row.try_get("slug")?,
        name: row.try_get("name")?,
        emoji: row.try_get("emoji")?,
        is_character: row.try_get("is_character")?,
        is_base_element: row.try_get("is_base_element")?,
        image_url: row.try_get("image_url")?,
        rarity: row.try_get("rarity")?,
        difficulty: row.try_get("difficulty")?,
    })
}

fn row_to_challenge_candidate(row: &PgRow) -> Result<ChallengeCandidate, sqlx::Error> {
    Ok(ChallengeCandidate {
        id: ElementId::new(row.try_get("element_id")?),
        name: row.try_get("name")?,
        image_url: row.try_get("image_url")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameCode {
        GameCode::new("anycraft").unwrap()
    }

    #[test]
    fn empty_exclusion_omits_the_predicate() {
        let game = game();
        let query = challenge_candidates_query(&game, &[]);
        let sql = query.sql();

        assert!(sql.contains("WHERE g.code = $1"));
        assert!(sql.contains("e.is_character = true"));
        assert!(!sql.contains("ANY"));
        assert!(!sql.contains("$2"));
    }

    #[test]
    fn exclusion_binds_one_array_parameter() {
        let game = game();
        let exclude = [ElementId::new(4), ElementId::new(9), ElementId::new(12)];
        let query = challenge_candidates_query(&game, &exclude);
        let sql = query.sql();

        assert!(sql.contains("AND NOT (e.element_id = ANY($2))"));
        assert!(!sql.contains("$3"));
        assert!(sql.trim_end().ends_with("ORDER BY e.element_id"));
    }

    #[test]
    fn recipe_lookup_filters_on_both_parents() {
        assert!(FIND_RECIPE_RESULT_SQL.contains("r.parent_a_id = $2"));
        assert!(FIND_RECIPE_RESULT_SQL.contains("r.parent_b_id = $3"));
    }

    #[test]
    fn base_elements_are_ordered_by_name() {
        assert!(LIST_BASE_ELEMENTS_SQL.contains("e.is_base_element = true"));
        assert!(LIST_BASE_ELEMENTS_SQL.trim_end().ends_with("ORDER BY e.name"));
    }
}
