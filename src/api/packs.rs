//! Pack endpoints: `/cards/pack`.

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::Pack;

/// Query for `GET /cards/pack`.
///
/// `user_id` narrows the listing to one owner; the service treats an
/// empty string the same as an absent filter.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPacksRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageCount", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "packName", skip_serializing_if = "Option::is_none")]
    pub pack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(rename = "sortPacks", skip_serializing_if = "Option::is_none")]
    pub sort_packs: Option<String>,
}

/// One page of packs, as returned by `GET /cards/pack`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacksPage {
    pub card_packs: Vec<Pack>,
    pub page: u32,
    pub page_count: u32,
    pub card_packs_total_count: u32,
    pub max_cards_count: u32,
    pub min_cards_count: u32,
}

/// Fields accepted by `POST /cards/pack`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPack {
    pub name: String,
    #[serde(rename = "deckCover", skip_serializing_if = "Option::is_none")]
    pub deck_cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl NewPack {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deck_cover: None,
            private: None,
        }
    }
}

#[derive(Serialize)]
struct CreatePackBody<'a> {
    #[serde(rename = "cardsPack")]
    cards_pack: &'a NewPack,
}

#[derive(Serialize)]
struct UpdatePackBody<'a> {
    #[serde(rename = "cardsPack")]
    cards_pack: &'a Pack,
}

impl ApiClient {
    /// `GET /cards/pack` — fetch one page of packs.
    pub async fn get_packs(&self, request: &GetPacksRequest) -> Result<PacksPage, ApiError> {
        self.get_json("/cards/pack", request).await
    }

    /// `POST /cards/pack` — create a pack. The created entity is not
    /// returned; callers refetch the list.
    pub async fn add_pack(&self, pack: &NewPack) -> Result<(), ApiError> {
        self.post_ok("/cards/pack", &CreatePackBody { cards_pack: pack })
            .await
    }

    /// `PUT /cards/pack` — update a pack. Absent fields keep their
    /// server-side values; the server bumps `__v`.
    pub async fn update_pack(&self, pack: &Pack) -> Result<(), ApiError> {
        self.put_ok("/cards/pack", &UpdatePackBody { cards_pack: pack })
            .await
    }

    /// `DELETE /cards/pack?id=`.
    pub async fn delete_pack(&self, id: &str) -> Result<(), ApiError> {
        self.delete_ok("/cards/pack", &[("id", id)]).await
    }
}
