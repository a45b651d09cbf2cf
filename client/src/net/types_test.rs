use super::*;

#[test]
fn api_error_messages_are_human_readable() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Status(502).to_string(), "server responded with status 502");
    assert_eq!(ApiError::Decode("missing field".to_owned()).to_string(), "unexpected response: missing field");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
