use super::*;

#[test]
fn authenticated_slice_carries_user() {
    let slice = AuthSlice::authenticated(User { name: "alice".to_owned() });
    assert!(slice.is_authenticated);
    assert_eq!(slice.user, Some(User { name: "alice".to_owned() }));
}

#[test]
fn logged_out_slice_is_empty() {
    let slice = AuthSlice::logged_out();
    assert!(!slice.is_authenticated);
    assert!(slice.user.is_none());
}

#[test]
fn slice_round_trips_through_json() {
    let slice = AuthSlice::authenticated(User { name: "eve.holt@reqres.in".to_owned() });
    let json = serde_json::to_string(&slice).unwrap();
    let back: AuthSlice = serde_json::from_str(&json).unwrap();
    assert_eq!(back, slice);
}

#[test]
fn slice_deserializes_without_user_field() {
    // Older records stored only the flag; missing user must not fail.
    let slice: AuthSlice = serde_json::from_str(r#"{"is_authenticated":false}"#).unwrap();
    assert_eq!(slice, AuthSlice::logged_out());
}
