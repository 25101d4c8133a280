#![allow(dead_code)]

use axum_test::TestServer;
use shortit::domain::entities::Shortlink;
use shortit::infrastructure::persistence::InMemoryShortlinkRepository;
use shortit::routes::router;
use shortit::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://shortit";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryShortlinkRepository::new()), BASE_URL)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_link(state: &AppState, url: &str, custom_name: Option<&str>) -> Shortlink {
    state
        .shortlink_service
        .create_shortlink(url.to_string(), custom_name.map(str::to_string))
        .await
        .unwrap()
        .into_shortlink()
}

/// Returns the code part of a public short URL.
pub fn code_of(short_url: &str) -> &str {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
}
