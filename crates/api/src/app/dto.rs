use serde_json::{json, Value};

use userdesk_users::{NewUser, UserPatch};

use crate::app::errors::ApiError;

// -------------------------
// Request parsing
// -------------------------

// Bodies are parsed from raw bytes so the request Content-Type is irrelevant.
// Only bytes that are not JSON at all are `MalformedPayload`; the shape of
// well-formed JSON is judged field by field.

fn parse_json(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::MalformedPayload)
}

/// A string member of a JSON object. Non-objects, missing members and
/// non-string values all read as absent.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// `POST /users` body: `name` and `email` must be non-empty strings.
///
/// Valid JSON lacking either field (including non-object JSON and non-string
/// values) is a validation error. Extra fields are ignored.
pub fn parse_create_user(body: &[u8]) -> Result<NewUser, ApiError> {
    let value = parse_json(body)?;
    Ok(NewUser::from_parts(
        string_field(&value, "name"),
        string_field(&value, "email"),
    )?)
}

/// `PUT /users/{id}` body: any subset of string `name`/`email`.
///
/// Valid JSON of any other shape patches nothing.
pub fn parse_update_user(body: &[u8]) -> Result<UserPatch, ApiError> {
    let value = parse_json(body)?;
    Ok(UserPatch {
        name: string_field(&value, "name"),
        email: string_field(&value, "email"),
    })
}

// -------------------------
// Response helpers
// -------------------------

pub fn message(text: &str) -> Value {
    json!({ "message": text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdesk_users::REQUIRED_FIELDS_MESSAGE;

    fn required() -> ApiError {
        ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    }

    #[test]
    fn create_accepts_name_and_email() {
        let new = parse_create_user(br#"{"name":"Charlie","email":"charlie@example.com","x":1}"#)
            .unwrap();
        assert_eq!(new, NewUser::new("Charlie", "charlie@example.com").unwrap());
    }

    #[test]
    fn create_distinguishes_missing_fields_from_bad_json() {
        assert_eq!(parse_create_user(br#"{"name":"X"}"#).unwrap_err(), required());
        assert_eq!(parse_create_user(br#"{"name":"","email":"e"}"#).unwrap_err(), required());
        assert_eq!(parse_create_user(br#"{"name":1,"email":"e"}"#).unwrap_err(), required());
        assert_eq!(parse_create_user(b"[]").unwrap_err(), required());
        assert_eq!(parse_create_user(b"{not json").unwrap_err(), ApiError::MalformedPayload);
        assert_eq!(parse_create_user(b"").unwrap_err(), ApiError::MalformedPayload);
    }

    #[test]
    fn update_accepts_any_subset() {
        assert_eq!(parse_update_user(b"{}").unwrap(), UserPatch::default());
        let patch = parse_update_user(br#"{"email":"","role":"admin"}"#).unwrap();
        assert_eq!(patch.email.as_deref(), Some(""));
        assert!(patch.name.is_none());
    }

    #[test]
    fn update_with_non_object_json_patches_nothing() {
        let bodies: [&[u8]; 5] = [b"[1]", b"null", b"42", br#""x""#, br#"{"name":false}"#];
        for body in bodies {
            assert_eq!(parse_update_user(body).unwrap(), UserPatch::default());
        }
    }

    #[test]
    fn update_rejects_unparseable_bodies() {
        let bodies: [&[u8]; 3] = [b"nope", b"", b"{\"name\":"];
        for body in bodies {
            assert_eq!(parse_update_user(body).unwrap_err(), ApiError::MalformedPayload);
        }
    }
}
