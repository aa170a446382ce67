//! Customer record and request payload
//!
//! `Customer` is what the table stores and what the API returns.
//! `CustomerDraft` is what clients send on create and update; it never
//! carries an id, so a client-supplied `id` in the body is dropped during
//! deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::ValidationError;

/// Customer record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// Mutable customer fields as sent by clients.
///
/// Absent fields default to an empty string: updates are a full replace,
/// not a patch. Only a JSON object is accepted; PostgreSQL `TEXT` cannot
/// hold NUL, so strings containing one are rejected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub status: String,
}

#[derive(Deserialize)]
struct DraftFields {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    status: String,
}

impl TryFrom<Map<String, Value>> for CustomerDraft {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: DraftFields =
            serde_json::from_value(Value::Object(map)).map_err(|e| e.to_string())?;

        for (field, value) in [
            ("name", &fields.name),
            ("email", &fields.email),
            ("status", &fields.status),
        ] {
            if value.contains('\0') {
                return Err(format!("{} must not contain NUL characters", field));
            }
        }

        Ok(Self {
            name: fields.name,
            email: fields.email,
            status: fields.status,
        })
    }
}

/// Customer id as it appears in a request path.
///
/// Wider than the stored `SERIAL` column so that any integer the client
/// sends is a lookup (and possibly a miss) rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Parse a path segment as a customer id.
    ///
    /// # Example
    /// ```
    /// use custctl_server::models::CustomerId;
    ///
    /// assert_eq!(CustomerId::parse("42").unwrap().get(), 42);
    /// assert!(CustomerId::parse("abc").is_err());
    /// assert!(CustomerId::parse("1.5").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId {
                value: s.to_owned(),
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
