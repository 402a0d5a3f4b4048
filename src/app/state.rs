use crate::store::SliceState;

/// Progress of the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub status: RequestStatus,
    /// Last surfaced error, if any. Cleared by dispatching `SetError(None)`.
    pub error: Option<String>,
    /// Set once the initial session probe has finished, logged in or not.
    pub is_initialized: bool,
}

impl SliceState for AppState {}
