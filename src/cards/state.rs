use serde::{Deserialize, Serialize};

use crate::domain::Card;
use crate::store::SliceState;

/// Cached cards page for the pack last fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsState {
    pub cards: Vec<Card>,
    pub page: u32,
    pub page_count: u32,
    pub cards_total_count: u32,
    pub max_grade: f64,
    pub min_grade: f64,
    /// Owner of the pack the cards belong to; drives edit affordances.
    pub pack_user_id: String,
}

impl Default for CardsState {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            page: 1,
            page_count: 10,
            cards_total_count: 0,
            max_grade: 0.0,
            min_grade: 0.0,
            pack_user_id: String::new(),
        }
    }
}

impl SliceState for CardsState {}
