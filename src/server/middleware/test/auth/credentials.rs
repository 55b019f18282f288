use super::*;

/// Tests decoding a well formed header.
///
/// Expected: Ok with username and password
#[test]
fn decodes_basic_credentials() {
    let headers = basic_auth("admin", "secret");

    let credentials = BasicCredentials::from_headers(&headers).unwrap();

    assert_eq!(credentials.username, "admin");
    assert_eq!(credentials.password, "secret");
}

/// Tests that only the first colon splits username from password.
///
/// Expected: Ok with the colon kept in the password
#[test]
fn keeps_colons_in_password() {
    let headers = basic_auth("admin", "se:cr:et");

    let credentials = BasicCredentials::from_headers(&headers).unwrap();

    assert_eq!(credentials.username, "admin");
    assert_eq!(credentials.password, "se:cr:et");
}

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingCredentials)
#[test]
fn rejects_missing_header() {
    let result = BasicCredentials::from_headers(&HeaderMap::new());

    assert!(matches!(result, Err(AuthError::MissingCredentials)));
}

/// Tests headers that aren't valid basic credentials.
///
/// Expected: Err(AuthError::MalformedCredentials) for each case
#[test]
fn rejects_malformed_headers() {
    let no_colon = format!("Basic {}", general_purpose::STANDARD.encode("admin"));
    let cases = ["Bearer abc.def.ghi", "Basic !!!not-base64!!!", "Basic", no_colon.as_str()];

    for value in cases {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());

        let result = BasicCredentials::from_headers(&headers);

        assert!(
            matches!(result, Err(AuthError::MalformedCredentials(_))),
            "expected malformed credentials for '{}'",
            value
        );
    }
}
