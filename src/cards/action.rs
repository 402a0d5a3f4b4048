use crate::api::CardsPage;
use crate::store::SliceAction;

#[derive(Debug, Clone)]
pub enum CardsAction {
    /// Apply a fetched page: list, grade bounds, pagination.
    SetCards(CardsPage),
    SetPage(u32),
    SetPageCount(u32),
}

impl SliceAction for CardsAction {}
