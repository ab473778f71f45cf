use super::*;

#[test]
fn location_line_defaults_to_montevideo() {
    assert_eq!(location_line(&PsychologistProfile::default()), "Montevideo");
}

#[test]
fn location_line_joins_neighborhood_and_department() {
    let profile = PsychologistProfile {
        department: "Treinta_y_Tres".into(),
        neighborhood: "Vergara".into(),
        ..PsychologistProfile::default()
    };
    assert_eq!(location_line(&profile), "Vergara, Treinta y Tres");
}

#[test]
fn modality_label_defaults_to_in_person() {
    assert_eq!(modality_label("online"), "Online");
    assert_eq!(modality_label("presencial"), "Presencial");
    assert_eq!(modality_label(""), "Presencial");
}

#[test]
fn social_links_skip_blank_urls() {
    let mut profile = PsychologistProfile::default();
    profile.social_networks.insert("facebook".into(), String::new());
    profile.social_networks.insert("instagram".into(), "https://instagram.com/ana".into());
    assert_eq!(
        social_links(&profile),
        vec![("instagram".to_owned(), "https://instagram.com/ana".to_owned())]
    );
}
