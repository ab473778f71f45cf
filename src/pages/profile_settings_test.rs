use super::*;

// =============================================================
// Location
// =============================================================

#[test]
fn changing_department_clears_neighborhood() {
    let mut profile = PsychologistProfile {
        department: "Montevideo".into(),
        neighborhood: "Pocitos".into(),
        ..PsychologistProfile::default()
    };
    set_department(&mut profile, "Canelones".into());
    assert_eq!(profile.department, "Canelones");
    assert!(profile.neighborhood.is_empty());
}

#[test]
fn same_department_keeps_neighborhood() {
    let mut profile = PsychologistProfile {
        department: "Montevideo".into(),
        neighborhood: "Pocitos".into(),
        ..PsychologistProfile::default()
    };
    set_department(&mut profile, "Montevideo".into());
    assert_eq!(profile.neighborhood, "Pocitos");
}

#[test]
fn neighborhoods_follow_department() {
    assert!(neighborhoods("Montevideo").contains(&"Pocitos"));
    assert_eq!(neighborhoods("Flores"), &["Trinidad"]);
    assert!(neighborhoods("Atlantis").is_empty());
    assert_eq!(DEPARTMENTS.len(), 16);
}

#[test]
fn department_keys_render_with_spaces() {
    assert_eq!(department_label("Treinta_y_Tres"), "Treinta y Tres");
    assert_eq!(neighborhoods("Cerro_Largo"), &["Melo", "Rio Branco"]);
}

// =============================================================
// Therapy types
// =============================================================

#[test]
fn therapy_types_are_unique() {
    let mut profile = PsychologistProfile::default();
    add_therapy(&mut profile, "Gestalt");
    add_therapy(&mut profile, "Gestalt");
    add_therapy(&mut profile, "");
    add_therapy(&mut profile, "Humanista");
    assert_eq!(profile.therapy_types, vec!["Gestalt", "Humanista"]);
    remove_therapy(&mut profile, "Gestalt");
    assert_eq!(profile.therapy_types, vec!["Humanista"]);
}

// =============================================================
// Social networks
// =============================================================

#[test]
fn default_networks_only_fill_an_empty_map() {
    let filled = with_default_networks(PsychologistProfile::default());
    assert_eq!(filled.social_networks.len(), DEFAULT_NETWORKS.len());
    assert!(filled.social_networks.values().all(String::is_empty));

    let mut own = PsychologistProfile::default();
    own.social_networks.insert("instagram".into(), "https://instagram.com/ana".into());
    assert_eq!(with_default_networks(own).social_networks.len(), 1);
}

#[test]
fn add_network_normalizes_and_rejects_duplicates() {
    let mut profile = PsychologistProfile::default();
    assert!(add_network(&mut profile, " Threads "));
    assert!(profile.social_networks.contains_key("threads"));
    assert!(!add_network(&mut profile, "threads"));
    assert!(!add_network(&mut profile, "   "));
}
