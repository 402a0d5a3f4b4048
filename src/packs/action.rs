use crate::api::PacksPage;
use crate::store::SliceAction;

use super::state::PackOwnership;

#[derive(Debug, Clone)]
pub enum PacksAction {
    /// Apply a fetched page: list and counts, pagination included.
    SetPacks(PacksPage),
    SetPage(u32),
    SetPageCount(u32),
    SetSortByAllMy(PackOwnership),
}

impl SliceAction for PacksAction {}
