//! Filters panel for the packs listing.
//!
//! Presentational composition of four independent controls: text
//! search, all/my ownership toggle, card-count range, and a reset
//! control. The callbacks only emit diagnostics; they were never wired
//! to state in the application this mirrors, and that behavior is kept
//! as-is rather than guessed at.
//! TODO: dispatch the matching packs filter actions once the server-side
//! search parameters (`packName`, `min`, `max`) are driven by the UI.

/// Text search over pack names.
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub placeholder: &'static str,
}

/// Switch between everyone's packs and the signed-in user's.
#[derive(Debug, Clone, Default)]
pub struct OwnershipToggle;

/// Bounds for the card-count range control.
#[derive(Debug, Clone)]
pub struct CardCountRange {
    pub min: u32,
    pub max: u32,
}

/// Clears every filter at once.
#[derive(Debug, Clone, Default)]
pub struct ResetControl;

/// The assembled panel.
pub struct FiltersPanel {
    pub search: SearchInput,
    pub ownership: OwnershipToggle,
    pub range: CardCountRange,
    pub reset: ResetControl,
}

impl FiltersPanel {
    pub fn new() -> Self {
        Self {
            search: SearchInput {
                placeholder: "Provide your text",
            },
            ownership: OwnershipToggle,
            range: CardCountRange { min: 0, max: 50 },
            reset: ResetControl,
        }
    }

    /// Search text callback.
    pub fn change_search_text(&self, value: &str) {
        tracing::debug!(value, "search text changed");
    }

    /// Range callback with the current `[min, max]` selection.
    pub fn change_slider(&self, min: u32, max: u32) {
        tracing::debug!(min, max, "card count range changed");
    }

    /// Reset callback.
    pub fn turn_off_filters(&self) {
        tracing::debug!("filters off");
    }
}

impl Default for FiltersPanel {
    fn default() -> Self {
        Self::new()
    }
}
