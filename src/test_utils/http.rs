use axum::{body::Body, http::StatusCode, response::Response};

/// Asserts that `response` is a "303 See Other" that tells htmx to load `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get("hx-redirect")
        .expect("Headers missing hx-redirect")
        .to_str()
        .expect("Could not convert hx-redirect to str");

    assert_eq!(location, endpoint);
}
