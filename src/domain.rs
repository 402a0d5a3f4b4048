//! Wire entities of the flashcards service.
//!
//! Field names follow the remote API exactly (`_id`, `cardsCount`,
//! `cardsPack_id`, `__v`, ...) via serde renames, so these types can be
//! used both for responses and for `PUT` bodies. The canonical copy of
//! every entity lives server-side; the client only holds cached pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning user. Empty for packs created by other users in older data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "cardsCount", default, skip_serializing_if = "Option::is_none")]
    pub cards_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub pack_type: Option<String>,
    /// Optimistic-lock counter, bumped by the server on every update.
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl Pack {
    /// A pack carrying only an id, for partial `PUT` bodies.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: None,
            user_name: None,
            name: None,
            cards_count: None,
            created: None,
            updated: None,
            grade: None,
            rating: None,
            shots: None,
            more_id: None,
            path: None,
            private: None,
            pack_type: None,
            version: None,
        }
    }
}

/// A single flashcard. Belongs to exactly one pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "cardsPack_id")]
    pub cards_pack_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(rename = "questionImg", default, skip_serializing_if = "Option::is_none")]
    pub question_img: Option<String>,
    #[serde(rename = "answerImg", default, skip_serializing_if = "Option::is_none")]
    pub answer_img: Option<String>,
    #[serde(rename = "questionVideo", default, skip_serializing_if = "Option::is_none")]
    pub question_video: Option<String>,
    #[serde(rename = "answerVideo", default, skip_serializing_if = "Option::is_none")]
    pub answer_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// The signed-in user, as returned by login / me.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(
        rename = "publicCardPacksCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub public_card_packs_count: Option<u32>,
}
