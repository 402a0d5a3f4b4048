//! Typed access to the remote flashcards service.
//!
//! One stateless method per verb/path combination, grouped by resource.
//! Structural typing only: a malformed body surfaces as
//! [`ApiError::Unexpected`], nothing is validated beyond the shape.

mod auth;
mod cards;
mod client;
mod error;
mod packs;

pub use auth::LoginRequest;
pub use cards::{CardsPage, GetCardsRequest, NewCard};
pub use client::ApiClient;
pub use error::ApiError;
pub use packs::{GetPacksRequest, NewPack, PacksPage};
