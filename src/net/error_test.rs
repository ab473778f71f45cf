use super::*;

#[test]
fn status_keeps_trimmed_body() {
    assert_eq!(
        ApiError::status(401, "  Credenciales inválidas \n"),
        ApiError::Status { status: 401, message: "Credenciales inválidas".to_owned() }
    );
}

#[test]
fn status_without_body_uses_code() {
    assert_eq!(
        ApiError::status(500, ""),
        ApiError::Status { status: 500, message: "HTTP 500".to_owned() }
    );
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::status(409, "El email ya existe");
    assert_eq!(err.user_message("Error desconocido"), "El email ya existe");
}

#[test]
fn user_message_falls_back_for_bare_status() {
    let err = ApiError::status(502, "");
    assert_eq!(err.user_message("Error desconocido"), "Error desconocido");
}

#[test]
fn user_message_falls_back_for_transport_and_shape() {
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("x"), "x");
    assert_eq!(ApiError::Shape("no data".to_owned()).user_message("y"), "y");
    assert_eq!(ApiError::Unavailable.user_message("z"), "z");
}

#[test]
fn display_formats_each_variant() {
    assert_eq!(ApiError::Transport("dns".to_owned()).to_string(), "network request failed: dns");
    assert_eq!(ApiError::status(404, "missing").to_string(), "request failed with status 404: missing");
    assert_eq!(ApiError::Shape("bad".to_owned()).to_string(), "unexpected response shape: bad");
}

#[test]
fn serde_errors_become_shape_errors() {
    let err = serde_json::from_str::<u32>("\"nope\"").map_err(ApiError::from);
    assert!(matches!(err, Err(ApiError::Shape(_))));
}
