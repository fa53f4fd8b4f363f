use crate::cookie_key;
use crate::error::ServerError;

use googletest::prelude::*;

#[test]
fn given_no_secret_when_cookie_key_then_generates_key() {
    let result = cookie_key(None);

    assert_that!(result.is_ok(), eq(true));
}

#[test]
fn given_64_byte_secret_when_cookie_key_then_deterministic() {
    let secret = "s".repeat(64);

    let first = cookie_key(Some(&secret)).unwrap();
    let second = cookie_key(Some(&secret)).unwrap();

    assert_that!(first.master(), eq(second.master()));
}

#[test]
fn given_short_secret_when_cookie_key_then_session_key_error() {
    let result = cookie_key(Some("short"));

    assert!(matches!(result, Err(ServerError::SessionKey { .. })));
}
