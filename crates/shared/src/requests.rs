//! Request payloads for the compose endpoints.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/v1/compose/base-elements`.
///
/// `game_code` is optional at the decoding level so a missing value can be
/// reported as `missing game_code` rather than a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseElementsQuery {
    #[serde(default)]
    pub game_code: Option<String>,
}

/// Body of `POST /api/v1/compose/combine`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineRequest {
    pub game_code: String,
    pub parent_a_id: i32,
    pub parent_b_id: i32,
}

/// Body of `POST /api/v1/compose/challenges`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengesRequest {
    pub game_code: String,
    /// Characters the player already found; omitted means none.
    #[serde(default)]
    pub discovered_character_ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovered_ids_default_to_empty() {
        let req: ChallengesRequest = serde_json::from_str(r#"{"game_code":"demo"}"#).unwrap();
        assert!(req.discovered_character_ids.is_empty());
    }

    #[test]
    fn combine_requires_both_parents() {
        let result =
            serde_json::from_str::<CombineRequest>(r#"{"game_code":"demo","parent_a_id":1}"#);
        assert!(result.is_err());
    }
}
