use crate::store::SliceAction;

use super::state::RequestStatus;

#[derive(Debug, Clone)]
pub enum AppAction {
    SetStatus(RequestStatus),
    SetError(Option<String>),
    SetInitialized,
}

impl SliceAction for AppAction {}
