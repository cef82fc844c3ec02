#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;

pub fn json_request(
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "intranet.test")
        .header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header("x-remote-user", user);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub fn get_request(uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("GET")
        .uri(uri)
        .header("host", "intranet.test");
    if let Some(user) = user {
        builder = builder.header("x-remote-user", user);
    }
    builder.body(Body::empty()).expect("request")
}
