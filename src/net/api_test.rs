use super::*;

#[test]
fn login_endpoint_joins_base_url() {
    assert_eq!(login_endpoint("/api"), "/api/auth/login");
    assert_eq!(login_endpoint("https://api.example.com/"), "https://api.example.com/auth/login");
    assert_eq!(HttpLoginApi::new("/api").endpoint(), "/api/auth/login");
}

#[test]
fn parse_error_message_reads_message_field() {
    assert_eq!(
        parse_error_message(r#"{"message":"Invalid credentials"}"#).as_deref(),
        Some("Invalid credentials")
    );
}

#[test]
fn parse_error_message_ignores_blank_and_non_json() {
    assert_eq!(parse_error_message(r#"{"message":"  "}"#), None);
    assert_eq!(parse_error_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(parse_error_message(""), None);
}

#[test]
fn server_message_only_for_rejections_with_text() {
    let rejected = ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(rejected.server_message(), Some("Invalid credentials"));
    assert_eq!(ApiError::Rejected { status: 500, message: None }.server_message(), None);
    assert_eq!(ApiError::Transport("offline".to_owned()).server_message(), None);
}

#[test]
fn transport_message_covers_transport_and_unavailable() {
    assert_eq!(
        ApiError::Transport("Failed to fetch".to_owned()).transport_message().as_deref(),
        Some("Failed to fetch")
    );
    assert_eq!(ApiError::Transport("   ".to_owned()).transport_message(), None);
    assert_eq!(
        ApiError::Unavailable.transport_message().as_deref(),
        Some("login is not available on the server")
    );
    assert_eq!(ApiError::Decode("eof".to_owned()).transport_message(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_without_browser() {
    let api = HttpLoginApi::new("/api");
    let result = futures::executor::block_on(api.login(&Credentials::new("a@x.com", "pw")));
    assert_eq!(result, Err(ApiError::Unavailable));
}
