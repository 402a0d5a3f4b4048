//! Shared test utilities and the mock flashcards service.

#![allow(dead_code)]

pub mod mock_api;

use cardbox::domain::Profile;

/// A minimal profile with the given id.
pub fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        email: "user@example.com".to_string(),
        name: "Test User".to_string(),
        avatar: None,
        public_card_packs_count: None,
    }
}

/// A well-formed `GET /cards/pack` response body.
pub fn packs_page_body(page: u32, page_count: u32) -> String {
    serde_json::json!({
        "cardPacks": [
            {
                "_id": "p1",
                "user_id": "u1",
                "name": "Biology",
                "cardsCount": 4,
                "private": false,
                "__v": 0
            }
        ],
        "page": page,
        "pageCount": page_count,
        "cardPacksTotalCount": 1,
        "maxCardsCount": 50,
        "minCardsCount": 0
    })
    .to_string()
}

/// A well-formed `GET /cards/card` response body.
pub fn cards_page_body(pack_user_id: &str) -> String {
    serde_json::json!({
        "cards": [
            {
                "_id": "c1",
                "cardsPack_id": "p1",
                "user_id": pack_user_id,
                "question": "2 + 2?",
                "answer": "4",
                "grade": 3.5,
                "shots": 2,
                "__v": 0
            }
        ],
        "cardsTotalCount": 1,
        "maxGrade": 5.0,
        "minGrade": 0.0,
        "page": 1,
        "pageCount": 10,
        "packUserId": pack_user_id
    })
    .to_string()
}
