// tests/detail_state_tests.rs - Detail page states

mod common;

use common::FakeApi;
use nutrient_scope::fixtures::payloads::ProductFound;
use nutrient_scope::fixtures::ApiPayload;
use nutrient_scope::web_app::api::{ApiError, FoodApi};
use nutrient_scope::web_app::model::detail::{FETCH_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
use nutrient_scope::web_app::model::{DetailState, ProductLookup};

async fn load(api: &FakeApi, id: &str) -> DetailState {
    DetailState::from_outcome(id, api.product(id).await)
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let state = load(&FakeApi::new(), "does-not-exist").await;
    assert_eq!(state, DetailState::NotFound);
    assert_eq!(state.message(), Some("No product found."));
    assert_eq!(state.message(), Some(NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn test_failure_shows_error_message() {
    let state = load(&FakeApi::failing(), "3017620422003").await;
    assert_eq!(state, DetailState::Failed);
    assert_eq!(
        state.message(),
        Some("Error fetching product details. Please try again later.")
    );
    assert_eq!(state.message(), Some(FETCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_found_product_is_loaded() {
    let detail = ProductFound::decode::<ProductLookup>().unwrap().into_product().unwrap();
    let api = FakeApi::new().with_product("3017620422003", detail.clone());

    let state = load(&api, "3017620422003").await;
    assert_eq!(state.message(), None);
    assert_eq!(state.product(), Some(&detail));
}

#[test]
fn test_transport_like_errors_map_to_failed() {
    let state = DetailState::from_outcome("1", Err(ApiError::Status(500)));
    assert_eq!(state, DetailState::Failed);

    let decode = serde_json::from_str::<ProductLookup>("not json").unwrap_err();
    let state = DetailState::from_outcome("1", Err(decode.into()));
    assert_eq!(state, DetailState::Failed);
}

#[test]
fn test_loading_message() {
    assert_eq!(DetailState::Loading.message(), Some("Loading..."));
    assert!(DetailState::Loading.product().is_none());
}

#[test]
fn test_previous_product_hidden_while_next_id_loads() {
    let detail = ProductFound::decode::<ProductLookup>().unwrap().into_product().unwrap();
    let previous = Some((
        "3017620422003".to_string(),
        DetailState::Loaded(Box::new(detail.clone())),
    ));

    // navigated from one product to another, lookup still running
    assert_eq!(DetailState::for_id("7622210449283", previous.clone()), DetailState::Loading);
    // same identifier: the finished lookup is shown
    assert_eq!(
        DetailState::for_id("3017620422003", previous),
        DetailState::Loaded(Box::new(detail))
    );
}

#[tokio::test]
async fn test_state_follows_the_lookup_for_the_current_id() {
    assert_eq!(DetailState::for_id("42", None), DetailState::Loading);

    let state = load(&FakeApi::new(), "42").await;
    assert_eq!(
        DetailState::for_id("42", Some(("42".to_string(), state))),
        DetailState::NotFound
    );
}
