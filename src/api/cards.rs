//! Card endpoints: `/cards/card`. All operations are scoped to a pack.

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::Card;

/// Query for `GET /cards/card`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCardsRequest {
    #[serde(rename = "cardsPack_id")]
    pub cards_pack_id: String,
    #[serde(rename = "cardQuestion", skip_serializing_if = "Option::is_none")]
    pub card_question: Option<String>,
    #[serde(rename = "cardAnswer", skip_serializing_if = "Option::is_none")]
    pub card_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(rename = "sortCards", skip_serializing_if = "Option::is_none")]
    pub sort_cards: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageCount", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

/// One page of cards, as returned by `GET /cards/card`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsPage {
    pub cards: Vec<Card>,
    pub cards_total_count: u32,
    pub max_grade: f64,
    pub min_grade: f64,
    pub page: u32,
    pub page_count: u32,
    pub pack_user_id: String,
}

/// Fields accepted by `POST /cards/card`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCard {
    #[serde(rename = "cardsPack_id")]
    pub cards_pack_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    #[serde(rename = "questionImg", skip_serializing_if = "Option::is_none")]
    pub question_img: Option<String>,
    #[serde(rename = "answerImg", skip_serializing_if = "Option::is_none")]
    pub answer_img: Option<String>,
    #[serde(rename = "questionVideo", skip_serializing_if = "Option::is_none")]
    pub question_video: Option<String>,
    #[serde(rename = "answerVideo", skip_serializing_if = "Option::is_none")]
    pub answer_video: Option<String>,
}

impl NewCard {
    /// A plain question/answer card for `pack_id`.
    pub fn text(pack_id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            cards_pack_id: pack_id.into(),
            question: Some(question.into()),
            answer: Some(answer.into()),
            grade: None,
            shots: None,
            question_img: None,
            answer_img: None,
            question_video: None,
            answer_video: None,
        }
    }
}

#[derive(Serialize)]
struct CreateCardBody<'a> {
    card: &'a NewCard,
}

#[derive(Serialize)]
struct UpdateCardBody<'a> {
    card: &'a Card,
}

impl ApiClient {
    /// `GET /cards/card` — fetch one page of a pack's cards.
    pub async fn get_cards(&self, request: &GetCardsRequest) -> Result<CardsPage, ApiError> {
        self.get_json("/cards/card", request).await
    }

    /// `POST /cards/card`.
    pub async fn add_card(&self, card: &NewCard) -> Result<(), ApiError> {
        self.post_ok("/cards/card", &CreateCardBody { card }).await
    }

    /// `PUT /cards/card` — the whole card is sent back.
    pub async fn update_card(&self, card: &Card) -> Result<(), ApiError> {
        self.put_ok("/cards/card", &UpdateCardBody { card }).await
    }

    /// `DELETE /cards/card?id=`.
    pub async fn delete_card(&self, id: &str) -> Result<(), ApiError> {
        self.delete_ok("/cards/card", &[("id", id)]).await
    }
}
