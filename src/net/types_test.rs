use super::*;

#[test]
fn user_round_trips_through_json() {
    let user = User { name: "eve.holt@reqres.in".to_owned() };
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn credentials_serialize_both_fields() {
    let creds = Credentials {
        username: "alice".to_owned(),
        password: "hunter2".to_owned(),
    };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["password"], "hunter2");
}

#[test]
fn api_error_deserializes_message_field() {
    let err: ApiError = serde_json::from_str(r#"{"message":"user not found"}"#).unwrap();
    assert_eq!(err, ApiError::new("user not found"));
}

#[test]
fn api_error_displays_message_verbatim() {
    assert_eq!(ApiError::new("user not found").to_string(), "user not found");
}
