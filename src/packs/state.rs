use serde::{Deserialize, Serialize};

use crate::domain::Pack;
use crate::store::SliceState;

/// Which packs the listing shows: everyone's or only the current user's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackOwnership {
    #[default]
    All,
    My,
}

/// Cached packs page plus the request parameters that produced it.
///
/// `card_packs_total_count` reflects the last successful fetch only;
/// mutations never update it optimistically, a refetch does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacksState {
    /// `None` until the first fetch lands.
    pub card_packs: Option<Vec<Pack>>,
    /// Current page, 1-based.
    pub page: u32,
    /// Packs per page.
    pub page_count: u32,
    pub card_packs_total_count: u32,
    pub max_cards_count: u32,
    pub min_cards_count: u32,
    pub sort_by_all_my: PackOwnership,
}

impl Default for PacksState {
    fn default() -> Self {
        Self {
            card_packs: None,
            page: 1,
            page_count: 10,
            card_packs_total_count: 0,
            max_cards_count: 0,
            min_cards_count: 0,
            sort_by_all_my: PackOwnership::All,
        }
    }
}

impl SliceState for PacksState {}
