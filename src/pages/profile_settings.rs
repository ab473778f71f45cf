//! Edit the psychologist's public profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the configured profile on mount and saves the whole record to
//! `/user-information`. Picking a department resets the neighbourhood, and
//! the neighbourhood list follows the department.

#[cfg(test)]
#[path = "profile_settings_test.rs"]
mod profile_settings_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::field::{SelectField, TextArea, TextField, same_options};
use crate::components::loader::Loader;
use crate::config::ClientConfig;
use crate::net::types::PsychologistProfile;

pub const THERAPY_TYPES: &[&str] =
    &["Cognitivo-Conductual", "Psicoanálisis", "Gestalt", "Humanista", "Sistémica", "Terapia Breve"];

pub const SPECIALITIES: &[&str] = &[
    "Psicología Clínica",
    "Psicología Infantil",
    "Neuropsicología",
    "Psicología Educativa",
    "Psicoterapia",
    "Psicología Organizacional",
];

pub const MODALITIES: &[&str] = &["online", "presencial"];

pub const DEFAULT_NETWORKS: &[&str] = &["facebook", "instagram", "linkedin", "twitter", "youtube", "tiktok"];

pub const SAVED: &str = "Perfil actualizado con éxito";
pub const SAVE_FAILED: &str = "Hubo un error, intenta nuevamente";

/// Uruguayan departments and the neighbourhoods offered for each. Stored
/// department keys use `_` for spaces.
pub const DEPARTMENTS: &[(&str, &[&str])] = &[
    (
        "Montevideo",
        &[
            "Centro",
            "Pocitos",
            "Carrasco",
            "La Teja",
            "Aguada",
            "Buceo",
            "Capurro",
            "Malvín",
            "Prado",
            "Unión",
            "Parque Rodó",
        ],
    ),
    (
        "Canelones",
        &["Las Piedras", "Pando", "Ciudad de la Costa", "Atlántida", "Barros Blancos", "Toledo", "Sauce", "Santa Lucía"],
    ),
    ("Maldonado", &["Punta del Este", "Maldonado", "San Carlos", "Pan de Azúcar", "Piriápolis", "Aiguá"]),
    ("Colonia", &["Colonia del Sacramento", "Carmelo", "Juan Lacaze", "Nueva Helvecia", "Rosario", "Tarariras"]),
    ("Soriano", &["Mercedes", "Dolores", "Cardona"]),
    ("Rivera", &["Rivera", "Tranqueras", "Vichadero"]),
    ("Salto", &["Salto", "Constitución", "Belén"]),
    ("Paysandú", &["Paysandú", "Guichón", "Quebracho"]),
    ("Tacuarembó", &["Tacuarembó", "Paso de los Toros", "San Gregorio de Polanco"]),
    ("Artigas", &["Artigas", "Bella Unión"]),
    ("Rocha", &["Rocha", "Chuy", "Castillos", "La Paloma"]),
    ("Treinta_y_Tres", &["Treinta y Tres", "Vergara"]),
    ("Cerro_Largo", &["Melo", "Rio Branco"]),
    ("Florida", &["Florida", "Sarandí Grande"]),
    ("Flores", &["Trinidad"]),
    ("Durazno", &["Durazno", "Sarandí del Yí"]),
];

pub fn neighborhoods(department: &str) -> &'static [&'static str] {
    DEPARTMENTS
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, list)| *list)
        .unwrap_or_default()
}

pub fn department_label(department: &str) -> String {
    department.replace('_', " ")
}

pub fn set_department(profile: &mut PsychologistProfile, department: String) {
    if profile.department != department {
        profile.neighborhood.clear();
    }
    profile.department = department;
}

/// Append a therapy type once; blanks are ignored.
pub fn add_therapy(profile: &mut PsychologistProfile, therapy: &str) {
    if !therapy.is_empty() && !profile.therapy_types.iter().any(|t| t == therapy) {
        profile.therapy_types.push(therapy.to_owned());
    }
}

pub fn remove_therapy(profile: &mut PsychologistProfile, therapy: &str) {
    profile.therapy_types.retain(|t| t != therapy);
}

/// Offer the usual networks as empty fields when the profile has none.
pub fn with_default_networks(mut profile: PsychologistProfile) -> PsychologistProfile {
    if profile.social_networks.is_empty() {
        profile.social_networks = DEFAULT_NETWORKS.iter().map(|n| ((*n).to_owned(), String::new())).collect();
    }
    profile
}

/// Add an empty network entry; returns false for blank or existing names.
pub fn add_network(profile: &mut PsychologistProfile, name: &str) -> bool {
    let name = name.trim().to_lowercase();
    if name.is_empty() || profile.social_networks.contains_key(&name) {
        return false;
    }
    profile.social_networks.insert(name, String::new());
    true
}

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    let api = use_api();
    let config = expect_context::<ClientConfig>();
    let profile = RwSignal::new(PsychologistProfile::default());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<(bool, &'static str)>);
    let load_error = RwSignal::new(None::<String>);
    let new_network = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        match api.get_value().fetch_profile(&config.profile_id).await {
            Ok(loaded) => profile.set(with_default_networks(loaded)),
            Err(e) => {
                log::error!("loading profile {} failed: {e}", config.profile_id);
                load_error.set(Some("Error al obtener el perfil".to_owned()));
            }
        }
        loading.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        notice.set(None);
        let current = profile.get_untracked();
        leptos::task::spawn_local(async move {
            match api.get_value().update_profile(&current).await {
                Ok(()) => notice.set(Some((true, SAVED))),
                Err(e) => {
                    log::error!("update profile failed: {e}");
                    notice.set(Some((false, SAVE_FAILED)));
                }
            }
            busy.set(false);
        });
    };

    let on_add_network = move |_| {
        let name = new_network.get_untracked();
        let mut added = false;
        profile.update(|p| added = add_network(p, &name));
        if added {
            new_network.set(String::new());
        }
    };

    let department_options = Signal::derive(|| {
        DEPARTMENTS.iter().map(|(name, _)| ((*name).to_owned(), department_label(name))).collect::<Vec<_>>()
    });
    let neighborhood_options = Signal::derive(move || same_options(neighborhoods(&profile.get().department)));

    view! {
        <Title text="Perfil | Contygo"/>
        <Breadcrumb page_name="Perfil"/>
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <Show when=move || load_error.get().is_none()
                fallback=move || view! { <p class="card__error">{load_error.get().unwrap_or_default()}</p> }
            >
                <form class="card form" on:submit=on_submit>
                    <TextField
                        label="Nombre"
                        placeholder="Tu nombre"
                        value=Signal::derive(move || profile.get().name)
                        on_input=Callback::new(move |v| profile.update(|p| p.name = v))
                    />
                    <TextField
                        label="Teléfono"
                        value=Signal::derive(move || profile.get().phone)
                        on_input=Callback::new(move |v| profile.update(|p| p.phone = v))
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || profile.get().email)
                        on_input=Callback::new(move |v| profile.update(|p| p.email = v))
                    />
                    <TextField
                        label="Foto (URL)"
                        value=Signal::derive(move || profile.get().photo)
                        on_input=Callback::new(move |v| profile.update(|p| p.photo = v))
                    />
                    <TextArea
                        label="Descripción"
                        rows=5
                        value=Signal::derive(move || profile.get().description)
                        on_input=Callback::new(move |v| profile.update(|p| p.description = v))
                    />
                    <SelectField
                        label="Especialidad"
                        prompt="Seleccionar especialidad"
                        value=Signal::derive(move || profile.get().speciality)
                        options=Signal::derive(|| same_options(SPECIALITIES))
                        on_change=Callback::new(move |v| profile.update(|p| p.speciality = v))
                    />
                    <SelectField
                        label="Modalidad"
                        prompt="Seleccionar modalidad"
                        value=Signal::derive(move || profile.get().modality)
                        options=Signal::derive(|| same_options(MODALITIES))
                        on_change=Callback::new(move |v| profile.update(|p| p.modality = v))
                    />

                    <SelectField
                        label="Tipos de terapia"
                        prompt="Agregar tipo de terapia"
                        value=Signal::derive(String::new)
                        options=Signal::derive(|| same_options(THERAPY_TYPES))
                        on_change=Callback::new(move |v: String| profile.update(|p| add_therapy(p, &v)))
                    />
                    <div class="chips">
                        <For
                            each=move || profile.get().therapy_types
                            key=Clone::clone
                            children=move |therapy| {
                                let label = therapy.clone();
                                view! {
                                    <span class="chip">
                                        {label}
                                        <button
                                            type="button"
                                            class="chip__remove"
                                            on:click=move |_| profile.update(|p| remove_therapy(p, &therapy))
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            }
                        />
                    </div>

                    <SelectField
                        label="Departamento"
                        prompt="Seleccionar departamento"
                        value=Signal::derive(move || profile.get().department)
                        options=department_options
                        on_change=Callback::new(move |v| profile.update(|p| set_department(p, v)))
                    />
                    <SelectField
                        label="Barrio"
                        prompt="Seleccionar barrio"
                        value=Signal::derive(move || profile.get().neighborhood)
                        options=neighborhood_options
                        on_change=Callback::new(move |v| profile.update(|p| p.neighborhood = v))
                    />

                    <fieldset class="form__group">
                        <legend>"Redes sociales"</legend>
                        <For
                            each=move || profile.with(|p| p.social_networks.keys().cloned().collect::<Vec<_>>())
                            key=Clone::clone
                            children=move |network| {
                                let key = network.clone();
                                let label = network.clone();
                                view! {
                                    <TextField
                                        label=label
                                        placeholder="https://"
                                        value=Signal::derive(move || {
                                            profile.with(|p| p.social_networks.get(&key).cloned().unwrap_or_default())
                                        })
                                        on_input=Callback::new(move |v| {
                                            profile.update(|p| {
                                                p.social_networks.insert(network.clone(), v);
                                            });
                                        })
                                    />
                                }
                            }
                        />
                        <div class="form__inline">
                            <input
                                class="field__input"
                                placeholder="Nueva red"
                                prop:value=move || new_network.get()
                                on:input=move |ev| new_network.set(event_target_value(&ev))
                            />
                            <button type="button" class="btn" on:click=on_add_network>"Agregar red"</button>
                        </div>
                    </fieldset>

                    {move || notice.get().map(|(ok, text)| {
                        let class = if ok { "form__success" } else { "form__error" };
                        view! { <p class=class>{text}</p> }
                    })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Guardando..." } else { "Guardar cambios" }}
                    </button>
                </form>
            </Show>
        </Show>
    }
}
