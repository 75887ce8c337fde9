//! Response payloads for the compose endpoints.
//!
//! Every response carries `ok`. A domain miss (no recipe) or a store outage
//! is reported with `ok: false` and an [`ErrorCode`].

use serde::{Deserialize, Serialize};

use crate::dto::{ChallengeItemData, ElementData};

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No recipe exists for the submitted pair
    NoRecipe,
    /// The element store could not be reached or failed the query
    Unavailable,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseElementsResponse {
    pub ok: bool,
    pub items: Vec<ElementData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl BaseElementsResponse {
    pub fn items(items: Vec<ElementData>) -> Self {
        Self {
            ok: true,
            items,
            error: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            error: Some(ErrorCode::Unavailable),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ElementData>,
}

impl CombineResponse {
    pub fn found(result: ElementData) -> Self {
        Self {
            ok: true,
            error: None,
            result: Some(result),
        }
    }

    pub fn no_recipe() -> Self {
        Self::failed(ErrorCode::NoRecipe)
    }

    pub fn unavailable() -> Self {
        Self::failed(ErrorCode::Unavailable)
    }

    fn failed(code: ErrorCode) -> Self {
        Self {
            ok: false,
            error: Some(code),
            result: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengesResponse {
    pub ok: bool,
    pub items: Vec<ChallengeItemData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl ChallengesResponse {
    pub fn items(items: Vec<ChallengeItemData>) -> Self {
        Self {
            ok: true,
            items,
            error: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            error: Some(ErrorCode::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_recipe_wire_shape() {
        let json = serde_json::to_value(CombineResponse::no_recipe()).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": false, "error": "NO_RECIPE" }));
    }

    #[test]
    fn unavailable_lists_encode_empty_items() {
        let json = serde_json::to_value(ChallengesResponse::unavailable()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ok": false, "items": [], "error": "UNAVAILABLE" })
        );
    }

    #[test]
    fn successful_list_has_no_error_key() {
        let json = serde_json::to_value(BaseElementsResponse::items(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true, "items": [] }));
    }

    #[test]
    fn unknown_codes_deserialize_to_unknown() {
        let code: ErrorCode = serde_json::from_str("\"RATE_LIMITED\"").unwrap();
        assert_eq!(code, ErrorCode::Unknown);
    }
}
