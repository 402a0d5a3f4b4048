mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{packs_page_body, profile};

use cardbox::api::{ApiClient, NewPack};
use cardbox::app::RequestStatus;
use cardbox::auth::AuthAction;
use cardbox::domain::Pack;
use cardbox::packs::{self, PackOwnership, PacksAction};
use cardbox::store::Store;

fn client_for(mock: &MockApi) -> ApiClient {
    ApiClient::new(mock.base_url()).expect("client")
}

#[tokio::test]
async fn fetch_with_all_filter_sends_empty_user_id() {
    let mock = MockApi::start().await;
    let api = client_for(&mock);
    let store = Store::new();

    mock.enqueue(MockResponse::json(packs_page_body(1, 10))).await;
    packs::fetch_packs(&api, &store).await;

    let requests = mock.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/cards/pack");
    assert_eq!(requests[0].query_param("user_id").as_deref(), Some(""));
    assert_eq!(requests[0].query_param("page").as_deref(), Some("1"));
    assert_eq!(requests[0].query_param("pageCount").as_deref(), Some("10"));

    let packs = store.state().packs;
    assert_eq!(packs.card_packs.map(|p| p.len()), Some(1));
    assert_eq!(packs.card_packs_total_count, 1);
    assert_eq!(store.state().app.status, RequestStatus::Succeeded);
}

#[tokio::test]
async fn fetch_with_my_filter_sends_profile_id() {
    let mock = MockApi::start().await;
    let api = client_for(&mock);
    let store = Store::new();

    store.dispatch(AuthAction::SetProfile(profile("u1")));
    store.dispatch(PacksAction::SetSortByAllMy(PackOwnership::My));

    mock.enqueue(MockResponse::json(packs_page_body(1, 10))).await;
    packs::fetch_packs(&api, &store).await;

    let requests = mock.requests().await;
    assert_eq!(requests[0].query_param("user_id").as_deref(), Some("u1"));
}

#[tokio::test]
async fn add_pack_refetches_current_page_exactly_once() {
    let mock = MockApi::start().await;
    let api = client_for(&mock);
    let store = Store::new();

    store.dispatch(PacksAction::SetPage(2));
    store.dispatch(PacksAction::SetPageCount(5));

    mock.enqueue(MockResponse::ok()).await; // POST
    mock.enqueue(MockResponse::json(packs_page_body(2, 5))).await; // refetch

    packs::add_pack(&api, &store, &NewPack::named("Chemistry")).await;

    let posts = mock.requests_matching("POST", "/cards/pack").await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body_json()["cardsPack"]["name"], "Chemistry");

    let gets = mock.requests_matching("GET", "/cards/pack").await;
    assert_eq!(gets.len(), 1);
    assert_eq!(gets[0].query_param("page").as_deref(), Some("2"));
    assert_eq!(gets[0].query_param("pageCount").as_deref(), Some("5"));
}

#[tokio::test]
async fn delete_pack_refetches_exactly_once() {
    let mock = MockApi::start().await;
    let api = client_for(&mock);
    let store = Store::new();

    mock.enqueue(MockResponse::ok()).await; // DELETE
    mock.enqueue(MockResponse::json(packs_page_body(1, 10))).await;

    packs::delete_pack(&api, &store, "p1").await;

    let deletes = mock.requests_matching("DELETE", "/cards/pack").await;
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].query_param("id").as_deref(), Some("p1"));
    assert_eq!(mock.requests_matching("GET", "/cards/pack").await.len(), 1);
}

#[tokio::test]
async fn update_pack_sends_the_pack_and_refetches() {
    let mock = MockApi::start().await;
    let api = client_for(&mock);
    let store = Store::new();

    mock.enqueue(MockResponse::ok()).await; // PUT
    mock.enqueue(MockResponse::json(packs_page_body(1, 10))).await;

    let mut pack = Pack::with_id("p1");
    pack.name = Some("Renamed".to_string());
    packs::update_pack(&api, &store, &pack).await;

    let puts = mock.requests_matching("PUT", "/cards/pack").await;
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body_json()["cardsPack"]["_id"], "p1");
    assert_eq!(puts[0].body_json()["cardsPack"]["name"], "Renamed");
    assert_eq!(mock.requests_matching("GET", "/cards/pack").await.len(), 1);
}

#[tokio::test]
async fn failed_add_surfaces_error_and_skips_refetch() {
    let mock = MockApi::start().await;
    let api = client_for(&mock);
    let store = Store::new();

    mock.enqueue(MockResponse::error(400, "name required")).await;
    packs::add_pack(&api, &store, &NewPack::named("")).await;

    let app = store.state().app;
    assert_eq!(app.error.as_deref(), Some("name required"));
    assert_eq!(app.status, RequestStatus::Failed);
    assert!(mock.requests_matching("GET", "/cards/pack").await.is_empty());
}

#[tokio::test]
async fn failed_fetch_keeps_previous_slice() {
    let mock = MockApi::start().await;
    let api = client_for(&mock);
    let store = Store::new();

    mock.enqueue(MockResponse::json(packs_page_body(1, 10))).await;
    packs::fetch_packs(&api, &store).await;
    let before = store.state().packs;

    mock.enqueue(MockResponse::error(500, "server down")).await;
    packs::fetch_packs(&api, &store).await;

    assert_eq!(store.state().packs, before);
    assert_eq!(store.state().app.error.as_deref(), Some("server down"));
}
