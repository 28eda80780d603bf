//! Request and reply shapes for the game finder.

use serde::{Deserialize, Serialize};

/// Search criteria submitted by the front-end form.
///
/// Every field is optional; absent and `null` are treated the same.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayload {
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub with_group: Option<bool>,
    pub device: Option<String>,
    pub mechanics: Option<Vec<String>>,
    pub vibes: Option<Vec<String>>,
}

/// One recommended game, in the shape the front-end renders.
///
/// Gemini produces these; the handler forwards its reply as-is, so this type
/// only describes the contract (it renders the example in the prompt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSuggestion {
    pub game_name: String,
    /// URL-friendly version of the name.
    pub url_name: String,
    pub game_id: u64,
    pub description: String,
    /// 1 to 10
    pub match_rating: u8,
}
