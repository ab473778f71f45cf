use super::*;

// =============================================================
// is_public_path
// =============================================================

#[test]
fn auth_pages_are_public() {
    assert!(is_public_path("/auth/signin"));
    assert!(is_public_path("/auth/signup"));
    assert!(is_public_path("/auth/signin/"));
}

#[test]
fn public_profile_and_children_are_public() {
    assert!(is_public_path("/p"));
    assert!(is_public_path("/p/"));
    assert!(is_public_path("/p/payment"));
    assert!(is_public_path("/p/payment?payment_id=1&status=approved"));
}

#[test]
fn paths_sharing_a_prefix_with_p_are_not_public() {
    assert!(!is_public_path("/patients"));
    assert!(!is_public_path("/patients/abc"));
    assert!(!is_public_path("/profile"));
    assert!(!is_public_path("/pay"));
}

#[test]
fn protected_pages_are_not_public() {
    assert!(!is_public_path("/"));
    assert!(!is_public_path(""));
    assert!(!is_public_path("/calendar"));
    assert!(!is_public_path("/auth"));
    assert!(!is_public_path("/auth/signinx"));
}

// =============================================================
// builders
// =============================================================

#[test]
fn detail_paths_nest_under_patients() {
    assert_eq!(patient_detail_path("p1"), "/patients/p1");
    assert_eq!(session_detail_path("p1", "s2"), "/patients/p1/s2");
}
