use super::*;

fn client() -> ApiClient {
    ApiClient::new(&ClientConfig::from_values(Some("https://api.example.test/"), None, None))
}

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    let api = client();
    assert_eq!(api.base_url(), "https://api.example.test");
    assert_eq!(api.endpoint("/get-patients"), "https://api.example.test/get-patients");
    assert_eq!(api.endpoint("check-auth"), "https://api.example.test/check-auth");
}

#[test]
fn id_paths_format_expected_routes() {
    assert_eq!(patient_path("p1"), "/get-patient-byid/p1");
    assert_eq!(session_path("s9"), "/get-session-byid/s9");
    assert_eq!(session_notes_path("s9"), "/insert-session-notes/s9");
    assert_eq!(profile_path("abc"), "/get-user-data/abc");
}

#[test]
fn method_names_are_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn is_success_accepts_only_2xx() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(401));
    assert!(!is_success(500));
}

#[test]
fn unreadable_body_is_a_transport_error() {
    let read = Err("body stream closed".to_owned());
    assert_eq!(response_text(200, read), Err(ApiError::Transport("body stream closed".to_owned())));
}

#[test]
fn response_text_maps_status_and_passes_success_body() {
    assert_eq!(response_text(200, Ok("[]".to_owned())), Ok("[]".to_owned()));
    assert_eq!(
        response_text(404, Ok("no existe".to_owned())),
        Err(ApiError::Status { status: 404, message: "no existe".to_owned() })
    );
}

#[test]
fn form_body_wraps_value_under_form_data() {
    let patient = Patient { id: "p1".into(), name: "Ana".into(), ..Patient::default() };
    let body = form_body(&patient).unwrap();
    assert_eq!(body["formData"]["_id"], "p1");
    assert_eq!(body["formData"]["name"], "Ana");
}

#[test]
fn keyed_body_uses_given_key() {
    let appointment = Appointment { id: "a1".into(), ..Appointment::default() };
    let body = keyed_body("appointmentToDelete", &appointment).unwrap();
    assert_eq!(body["appointmentToDelete"]["_id"], "a1");
    assert_eq!(body.as_object().map(serde_json::Map::len), Some(1));
}

#[test]
fn payment_upload_form_flattens_fields() {
    let payment = Payment {
        id: "pay1".into(),
        patient_id: "p1".into(),
        name: "Ana".into(),
        sessions: "4".into(),
        descriptor: "Sesiones de abril".into(),
        modality: "virtual".into(),
        date: 1_700_000_000_000,
        price: "2000".into(),
        ..Payment::default()
    };
    let form = payment_upload_form(&payment);
    assert_eq!(form["patientId"], "p1");
    assert_eq!(form["patientName"], "Ana");
    assert_eq!(form["sessions"], "4");
    assert_eq!(form["date"], "1700000000000");
    assert_eq!(form["price"], "2000");
}

#[test]
fn created_id_in_reads_id_or_ignores_garbage() {
    assert_eq!(created_id_in(r#"{"id":"x1"}"#), Some("x1".to_owned()));
    assert_eq!(created_id_in(r#"{"_id":"x2"}"#), Some("x2".to_owned()));
    assert_eq!(created_id_in(""), None);
    assert_eq!(created_id_in("created"), None);
}

#[test]
fn parse_json_maps_failures_to_shape_errors() {
    assert!(matches!(parse_json("{not json"), Err(ApiError::Shape(_))));
    assert_eq!(parse_json("[]").unwrap(), serde_json::json!([]));
}
