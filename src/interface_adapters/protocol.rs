use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::fmt;

const USERNAME_FIELD: &str = "username";
const PASSWORD_FIELD: &str = "password";

// Request payload for login.
//
// Decoding is lenient: keys match their field case-insensitively, missing
// or null fields leave the value empty, unknown keys are skipped and a
// repeated key overwrites the earlier one. A literal `null` body is an empty
// request. Anything other than an object or `null` is rejected.
#[derive(Debug, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    // Invalid UTF-8 is replaced with U+FFFD before parsing, so a stray byte
    // inside a string value does not fail the request.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let text = String::from_utf8_lossy(body);
        serde_json::from_str(&text)
    }
}

// Case-insensitive key comparison against a lowercase ASCII field name.
// U+017F (long s) folds onto `s`, the way Unicode simple folding does.
fn key_matches(key: &str, field: &str) -> bool {
    key.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == '\u{17f}' { 's' } else { c })
        .eq(field.chars())
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LoginRequestVisitor)
    }
}

struct LoginRequestVisitor;

impl<'de> Visitor<'de> for LoginRequestVisitor {
    type Value = LoginRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a login object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LoginRequest::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = LoginRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = if key_matches(&key, USERNAME_FIELD) {
                &mut request.username
            } else if key_matches(&key, PASSWORD_FIELD) {
                &mut request.password
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            // null keeps whatever the field already holds.
            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }

        Ok(request)
    }
}
