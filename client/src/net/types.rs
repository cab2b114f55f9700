//! Shared wire DTOs for the client/backend JSON boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend payloads field for field. Optional text fields
//! stay `Option` on the wire and are flattened to empty strings only at render
//! time, so a missing comment never shows up as `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity of the logged-in user as returned by `/api/login` and `/api/user`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user id, when the endpoint exposes it.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<i64>,
    /// Chosen display name.
    #[serde(default)]
    pub username: Option<String>,
    /// Login email.
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Best available label for the user: username, then email, then `"me"`.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref().filter(|email| !email.is_empty()))
            .unwrap_or("me")
    }
}

/// Successful `/api/login` body: the user fields plus the bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub user: User,
}

/// Credentials sent to `/api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload sent to `/api/register`. `username` is omitted when not provided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Generic `{ message, redirect }` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Generic `{ error }` failure body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry of a reference list (game title, car model or track).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    /// Number of laps a session on this track consists of. Tracks only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lap_count: Option<u32>,
}

/// A single lap time inside a record, numbered from 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapTimeEntry {
    pub lap_number: u32,
    pub time: String,
}

/// Leaderboard row from `GET /api/records`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub game_title: String,
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub total_time: String,
    #[serde(default)]
    pub lap_times: Vec<LapTimeEntry>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /api/records`. Ids are the raw select values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub game_title_id: String,
    pub track_id: String,
    pub car_model_id: String,
    pub lap_times: Vec<LapTimeEntry>,
    pub comment: String,
}

/// Single-lap record from `/api/laps`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lap {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub game_title: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub lap_time: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recorded_at: String,
}

/// Body of `POST /api/laps` and `PUT /api/laps/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LapPayload {
    pub game_title: String,
    pub car_model: String,
    pub track_name: String,
    pub lap_time: String,
    pub notes: String,
}

/// Accept an id encoded either as a JSON integer or a numeric string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(&value).map_err(D::Error::custom)
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(&value).map(Some).map_err(D::Error::custom)
}

fn id_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => number.as_i64().ok_or("expected integer id"),
        serde_json::Value::String(raw) => raw.trim().parse::<i64>().map_err(|_| "expected numeric id"),
        _ => Err("expected id"),
    }
}
