use crate::domain::Profile;
use crate::store::SliceState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub profile: Option<Profile>,
    pub is_logged_in: bool,
}

impl AuthState {
    /// The signed-in user's id, or empty when nobody is logged in.
    /// The packs ownership filter sends exactly this value.
    pub fn user_id(&self) -> String {
        self.profile
            .as_ref()
            .map(|profile| profile.id.clone())
            .unwrap_or_default()
    }
}

impl SliceState for AuthState {}
