use crate::domain::Profile;
use crate::store::SliceAction;

#[derive(Debug, Clone)]
pub enum AuthAction {
    SetProfile(Profile),
    SetLoggedIn(bool),
    ClearProfile,
}

impl SliceAction for AuthAction {}
