//! Wire DTOs for the practice API.
//!
//! DESIGN
//! ======
//! Field names follow the remote API (`_id`, camelCase, a few Spanish keys)
//! through `serde` renames so Rust code keeps English snake_case names.
//! Responses wrap payloads in a `data` envelope; the `*_from_body` helpers
//! enforce its shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;
use crate::state::list::Keyed;

/// Body of `GET /check-auth`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub authenticated: bool,
}

/// A patient row as listed by `GET /get-patients`.
///
/// Also used as the create/edit form body; `id` is empty for new patients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Sent as a string by some endpoints and a number by others.
    #[serde(default, deserialize_with = "deserialize_string_from_any")]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Full patient record returned by `POST /get-patient-byid/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_from_any")]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub sessions: Vec<SessionSummary>,
    #[serde(rename = "farm", default)]
    pub medications: Vec<Medication>,
}

/// Session row inside a patient record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub modality: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub description: String,
}

/// Session detail returned by `POST /get-session-byid/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub modality: String,
    #[serde(default, deserialize_with = "deserialize_string_from_any")]
    pub duration: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: Vec<SessionNote>,
}

/// A clinician note attached to a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionNote {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub note: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "createdAt", default)]
    pub created_at: i64,
}

/// Appointment as listed by `GET /get-appointments` and sent by the
/// calendar form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default, deserialize_with = "deserialize_string_from_any")]
    pub duration: String,
    #[serde(default)]
    pub modality: String,
    #[serde(rename = "patientId", default)]
    pub patient_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    /// Patient display name, denormalized by the API.
    #[serde(rename = "nombre", default)]
    pub patient_name: String,
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            id: String::new(),
            date: String::new(),
            time: String::new(),
            description: String::new(),
            reason: String::new(),
            duration: String::new(),
            modality: String::new(),
            patient_id: String::new(),
            status: default_status(),
            patient_name: String::new(),
        }
    }
}

/// Medication prescribed to a patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(rename = "dosis", default)]
    pub dose: String,
    #[serde(rename = "freq", default)]
    pub frequency: String,
    #[serde(rename = "patientId", default)]
    pub patient_id: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Medication {
    /// Empty medication form bound to `patient_id`.
    pub fn for_patient(patient_id: &str) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            date: String::new(),
            description: String::new(),
            duration: String::new(),
            dose: String::new(),
            frequency: String::new(),
            patient_id: patient_id.to_owned(),
            status: default_status(),
        }
    }
}

/// Uploaded file shared with patients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "uploadedAt", default)]
    pub uploaded_at: String,
    /// Download URL.
    #[serde(default)]
    pub path: String,
}

/// Email envelope for `POST /share-resource`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessage {
    /// Recipient patient id.
    #[serde(rename = "_id")]
    pub patient_id: String,
    pub subject: String,
    pub message: String,
    pub email: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
}

/// Payment link record listed by `GET /get-payments`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "patientId", default)]
    pub patient_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub buyer: Buyer,
    #[serde(default)]
    pub descriptor: String,
    #[serde(default)]
    pub modality: String,
    #[serde(default, deserialize_with = "deserialize_string_from_any")]
    pub sessions: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_i64_from_any")]
    pub date: i64,
    #[serde(default)]
    pub path: String,
    #[serde(default, deserialize_with = "deserialize_string_from_any")]
    pub price: String,
}

/// Body of a successful `POST /upload-payment`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PaymentLinkResponse {
    #[serde(default)]
    pub sandbox_init_point: Option<String>,
    #[serde(default)]
    pub init_point: Option<String>,
}

impl PaymentLinkResponse {
    /// Checkout URL to hand to the patient, preferring the sandbox link.
    pub fn link(self) -> Option<String> {
        self.sandbox_init_point
            .or(self.init_point)
            .filter(|link| !link.trim().is_empty())
    }
}

/// Checkout-provider return parameters posted to `POST /register-payment`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRegistration {
    pub collection_id: Option<String>,
    pub collection_status: Option<String>,
    pub payment_id: Option<String>,
    pub status: Option<String>,
    pub external_reference: Option<String>,
    pub payment_type: Option<String>,
    pub merchant_order_id: Option<String>,
    pub preference_id: Option<String>,
    pub site_id: Option<String>,
    pub processing_mode: Option<String>,
    pub merchant_account_id: Option<String>,
}

/// Incoming booking request on the wait list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "therapistId", default)]
    pub therapist_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_string_from_any")]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub message: String,
}

/// Public psychologist profile, also edited from the settings page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychologistProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "especiality", default)]
    pub speciality: String,
    #[serde(default)]
    pub modality: String,
    #[serde(rename = "therapyTypes", default)]
    pub therapy_types: Vec<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(rename = "socialNetworks", default)]
    pub social_networks: BTreeMap<String, String>,
}

/// Visitor message from the public profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Keyed for Patient {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for Appointment {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for Medication {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for Resource {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for Payment {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, id: String) {
        self.id = id;
    }
}

impl Keyed for Booking {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, id: String) {
        self.id = id;
    }
}

/// Extract the `data` array from a list response.
///
/// # Errors
///
/// Returns [`ApiError::Shape`] when `data` is missing, not an array, or holds
/// elements that do not match `T`.
pub fn list_from_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<Vec<T>, ApiError> {
    match body {
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(data)?),
            _ => Err(ApiError::Shape("expected `data` array".to_owned())),
        },
        _ => Err(ApiError::Shape("expected JSON object".to_owned())),
    }
}

/// Extract the first element of a `data` array; `None` when it is empty.
///
/// # Errors
///
/// Same as [`list_from_body`].
pub fn first_from_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<Option<T>, ApiError> {
    Ok(list_from_body::<T>(body)?.into_iter().next())
}

/// Extract a single `data` object.
///
/// # Errors
///
/// Returns [`ApiError::Shape`] when `data` is missing or does not match `T`.
pub fn object_from_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ApiError> {
    match body {
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data @ serde_json::Value::Object(_)) => Ok(serde_json::from_value(data)?),
            _ => Err(ApiError::Shape("expected `data` object".to_owned())),
        },
        _ => Err(ApiError::Shape("expected JSON object".to_owned())),
    }
}

/// Extract the identifier the API assigns on create (`id` or `_id`).
pub fn created_id(body: &serde_json::Value) -> Option<String> {
    ["id", "_id"]
        .iter()
        .find_map(|key| body.get(key).and_then(serde_json::Value::as_str))
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

fn default_status() -> String {
    "activo".to_owned()
}

fn deserialize_string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_i64_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid integer string: {s}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
