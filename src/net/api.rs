//! REST client for the practice API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, every request sent with
//! `credentials: include` so the HTTP-only session cookie travels along.
//! Native builds (tests, tooling): requests resolve to
//! [`ApiError::Unavailable`], keeping the rest of the crate testable without
//! a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>`; no call panics. Non-2xx responses carry
//! the server's text so auth pages can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::{Value, json};

use super::error::ApiError;
use super::types::{
    Appointment, Booking, CheckAuthResponse, ContactMessage, Medication, Patient, PatientRecord, Payment,
    PaymentLinkResponse, PaymentRegistration, PsychologistProfile, Resource, SessionNote, SessionRecord,
    ShareMessage, created_id, first_from_body, list_from_body, object_from_body,
};
use crate::config::ClientConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Stateless HTTP client bound to one API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // =============================================================
    // Session & accounts
    // =============================================================

    /// `GET /check-auth`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or shape failure.
    pub async fn check_auth(&self) -> Result<CheckAuthResponse, ApiError> {
        let body = self.request(Method::Get, "/check-auth", None).await?;
        Ok(serde_json::from_value(parse_json(&body)?)?)
    }

    /// `POST /sign_in_with_email`.
    ///
    /// # Errors
    ///
    /// Status errors carry the server's rejection text.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = json!({ "email": email, "password": password });
        self.request(Method::Post, "/sign_in_with_email", Some(payload)).await?;
        Ok(())
    }

    /// `POST /create_account_with_email`.
    ///
    /// # Errors
    ///
    /// Status errors carry the server's rejection text.
    pub async fn create_account(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = json!({ "name": name, "email": email, "password": password });
        self.request(Method::Post, "/create_account_with_email", Some(payload)).await?;
        Ok(())
    }

    // =============================================================
    // Patients
    // =============================================================

    /// `GET /get-patients`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_patients(&self) -> Result<Vec<Patient>, ApiError> {
        let body = self.request(Method::Get, "/get-patients", None).await?;
        list_from_body(parse_json(&body)?)
    }

    /// `POST /add-patient`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn add_patient(&self, patient: &Patient) -> Result<Option<String>, ApiError> {
        let body = self.request(Method::Post, "/add-patient", Some(form_body(patient)?)).await?;
        Ok(created_id_in(&body))
    }

    /// `POST /edit-patient`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn edit_patient(&self, patient: &Patient) -> Result<(), ApiError> {
        self.request(Method::Post, "/edit-patient", Some(form_body(patient)?)).await?;
        Ok(())
    }

    /// `DELETE /delete-patient`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn delete_patient(&self, patient: &Patient) -> Result<(), ApiError> {
        let payload = keyed_body("patientToDelete", patient)?;
        self.request(Method::Delete, "/delete-patient", Some(payload)).await?;
        Ok(())
    }

    /// `POST /get-patient-byid/:id`; the record is the first `data` element.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_patient(&self, patient_id: &str) -> Result<Option<PatientRecord>, ApiError> {
        let body = self.request(Method::Post, &patient_path(patient_id), None).await?;
        first_from_body(parse_json(&body)?)
    }

    /// `POST /get-patient-resources`: resources already shared with a patient.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_patient_resources(&self, patient: &PatientRecord) -> Result<Vec<Resource>, ApiError> {
        let payload = keyed_body("patient", patient)?;
        let body = self.request(Method::Post, "/get-patient-resources", Some(payload)).await?;
        list_from_body(parse_json(&body)?)
    }

    /// `POST /delete-patient-resource`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn remove_patient_resource(&self, patient: &PatientRecord, resource: &Resource) -> Result<(), ApiError> {
        let payload = json!({ "patient": patient, "resource": resource });
        self.request(Method::Post, "/delete-patient-resource", Some(payload)).await?;
        Ok(())
    }

    /// `POST /add-patient-farm`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn add_medication(&self, medication: &Medication) -> Result<Option<String>, ApiError> {
        let body = self.request(Method::Post, "/add-patient-farm", Some(form_body(medication)?)).await?;
        Ok(created_id_in(&body))
    }

    /// `DELETE /delete-patient-farm`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn delete_medication(&self, medication: &Medication) -> Result<(), ApiError> {
        let payload = keyed_body("farmToDelete", medication)?;
        self.request(Method::Delete, "/delete-patient-farm", Some(payload)).await?;
        Ok(())
    }

    // =============================================================
    // Sessions
    // =============================================================

    /// `POST /get-session-byid/:id`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_session(&self, session_id: &str) -> Result<Option<SessionRecord>, ApiError> {
        let body = self.request(Method::Post, &session_path(session_id), None).await?;
        first_from_body(parse_json(&body)?)
    }

    /// `POST /insert-session-notes/:id` with the draft note and the kept notes.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn save_session_notes(
        &self,
        session_id: &str,
        draft: &SessionNote,
        notes: &[SessionNote],
    ) -> Result<(), ApiError> {
        let payload = json!({ "note": draft, "idSession": session_id, "notes": notes });
        self.request(Method::Post, &session_notes_path(session_id), Some(payload)).await?;
        Ok(())
    }

    // =============================================================
    // Appointments
    // =============================================================

    /// `GET /get-appointments`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        let body = self.request(Method::Get, "/get-appointments", None).await?;
        list_from_body(parse_json(&body)?)
    }

    /// `POST /add-appointment`; returns the id the API assigned, if any.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn add_appointment(&self, appointment: &Appointment) -> Result<Option<String>, ApiError> {
        let body = self.request(Method::Post, "/add-appointment", Some(form_body(appointment)?)).await?;
        Ok(created_id_in(&body))
    }

    /// `PUT /edit-appointment`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn edit_appointment(&self, appointment: &Appointment) -> Result<(), ApiError> {
        self.request(Method::Put, "/edit-appointment", Some(form_body(appointment)?)).await?;
        Ok(())
    }

    /// `DELETE /delete-appointment`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn delete_appointment(&self, appointment: &Appointment) -> Result<(), ApiError> {
        let payload = keyed_body("appointmentToDelete", appointment)?;
        self.request(Method::Delete, "/delete-appointment", Some(payload)).await?;
        Ok(())
    }

    // =============================================================
    // Resources
    // =============================================================

    /// `GET /get-resources`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_resources(&self) -> Result<Vec<Resource>, ApiError> {
        let body = self.request(Method::Get, "/get-resources", None).await?;
        list_from_body(parse_json(&body)?)
    }

    /// `POST /share-resource`: email a resource to a patient.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn share_resource(&self, send: &ShareMessage, resource: &Resource) -> Result<(), ApiError> {
        let payload = json!({ "send": send, "resource": resource });
        self.request(Method::Post, "/share-resource", Some(payload)).await?;
        Ok(())
    }

    /// `POST /upload-resource` as `multipart/form-data` with `file` and `type`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a form that cannot be assembled.
    #[cfg(feature = "csr")]
    pub async fn upload_resource(&self, file: &web_sys::File, kind: &str) -> Result<(), ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append_with_str("type", kind)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        let url = self.endpoint("/upload-resource");
        log::debug!("POST {url} (multipart)");
        let request = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if !is_success(resp.status()) {
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::status(resp.status(), &text));
        }
        Ok(())
    }

    // =============================================================
    // Billing
    // =============================================================

    /// `GET /get-payments`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_payments(&self) -> Result<Vec<Payment>, ApiError> {
        let body = self.request(Method::Get, "/get-payments", None).await?;
        list_from_body(parse_json(&body)?)
    }

    /// `POST /upload-payment`; returns the checkout link to share.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body that is not JSON.
    pub async fn create_payment_link(&self, payment: &Payment) -> Result<Option<String>, ApiError> {
        let payload = json!({ "formData": payment_upload_form(payment) });
        let body = self.request(Method::Post, "/upload-payment", Some(payload)).await?;
        let response: PaymentLinkResponse = serde_json::from_value(parse_json(&body)?)?;
        Ok(response.link())
    }

    /// `POST /share-payment`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn share_payment(&self, patient: &Patient, payment: &Payment) -> Result<(), ApiError> {
        let payload = json!({ "patient": patient, "payment": payment });
        self.request(Method::Post, "/share-payment", Some(payload)).await?;
        Ok(())
    }

    /// `POST /register-payment` with checkout return parameters.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn register_payment(&self, registration: &PaymentRegistration) -> Result<(), ApiError> {
        let payload = serde_json::to_value(registration)?;
        self.request(Method::Post, "/register-payment", Some(payload)).await?;
        Ok(())
    }

    // =============================================================
    // Wait list
    // =============================================================

    /// `GET /get-bookings`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` array.
    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let body = self.request(Method::Get, "/get-bookings", None).await?;
        list_from_body(parse_json(&body)?)
    }

    /// `POST /add-patient` with a booking: turns it into a patient.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn accept_booking(&self, booking: &Booking) -> Result<(), ApiError> {
        let payload = keyed_body("bookingToAccept", booking)?;
        self.request(Method::Post, "/add-patient", Some(payload)).await?;
        Ok(())
    }

    /// `DELETE /reject-patient`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn reject_booking(&self, booking: &Booking) -> Result<(), ApiError> {
        let payload = keyed_body("bookingToDelete", booking)?;
        self.request(Method::Delete, "/reject-patient", Some(payload)).await?;
        Ok(())
    }

    // =============================================================
    // Public profile
    // =============================================================

    /// `POST /get-user-data/:id`.
    ///
    /// # Errors
    ///
    /// Any request failure, or a body without a `data` object.
    pub async fn fetch_profile(&self, profile_id: &str) -> Result<PsychologistProfile, ApiError> {
        let body = self.request(Method::Post, &profile_path(profile_id), None).await?;
        object_from_body(parse_json(&body)?)
    }

    /// `POST /user-information`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn update_profile(&self, profile: &PsychologistProfile) -> Result<(), ApiError> {
        let payload = serde_json::to_value(profile)?;
        self.request(Method::Post, "/user-information", Some(payload)).await?;
        Ok(())
    }

    /// `POST /contact`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        let payload = serde_json::to_value(message)?;
        self.request(Method::Post, "/contact", Some(payload)).await?;
        Ok(())
    }

    // =============================================================
    // Transport
    // =============================================================

    /// Send one credentialed request and return the response text of a 2xx.
    #[cfg(feature = "csr")]
    async fn request(&self, method: Method, path: &str, payload: Option<Value>) -> Result<String, ApiError> {
        use gloo_net::http::Request;

        let url = self.endpoint(path);
        log::debug!("{} {url}", method.as_str());
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);

        let request = match payload {
            Some(body) => builder.json(&body),
            None => builder.header("Content-Type", "application/json").build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| e.to_string());
        response_text(resp.status(), body)
    }

    #[cfg(not(feature = "csr"))]
    async fn request(&self, _method: Method, _path: &str, _payload: Option<Value>) -> Result<String, ApiError> {
        Err(ApiError::Unavailable)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// An unreadable body is a transport failure, whatever the status said.
fn response_text(status: u16, body: Result<String, String>) -> Result<String, ApiError> {
    let text = body.map_err(ApiError::Transport)?;
    if !is_success(status) {
        return Err(ApiError::status(status, &text));
    }
    Ok(text)
}

fn parse_json(body: &str) -> Result<Value, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Id assigned by a create endpoint; bodies that are empty or not JSON yield `None`.
fn created_id_in(body: &str) -> Option<String> {
    match parse_json(body) {
        Ok(value) => created_id(&value),
        Err(_) => None,
    }
}

/// Wrap a form value as `{"formData": value}`.
fn form_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    keyed_body("formData", value)
}

/// Wrap a value under a single key.
fn keyed_body<T: Serialize>(key: &str, value: &T) -> Result<Value, ApiError> {
    let mut map = serde_json::Map::new();
    map.insert(key.to_owned(), serde_json::to_value(value)?);
    Ok(Value::Object(map))
}

/// Flattened payment fields the upload endpoint expects.
fn payment_upload_form(payment: &Payment) -> Value {
    json!({
        "_id": payment.id,
        "patientId": payment.patient_id,
        "patientName": payment.name,
        "sessions": payment.sessions,
        "descriptor": payment.descriptor,
        "modality": payment.modality,
        "date": payment.date.to_string(),
        "path": payment.path,
        "price": payment.price,
    })
}

fn patient_path(patient_id: &str) -> String {
    format!("/get-patient-byid/{patient_id}")
}

fn session_path(session_id: &str) -> String {
    format!("/get-session-byid/{session_id}")
}

fn session_notes_path(session_id: &str) -> String {
    format!("/insert-session-notes/{session_id}")
}

fn profile_path(profile_id: &str) -> String {
    format!("/get-user-data/{profile_id}")
}
