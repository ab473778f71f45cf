//! Public landing page for one psychologist, with a contact form.
//!
//! Reachable with or without a session. The profile id comes from the
//! client configuration.

#[cfg(test)]
#[path = "public_profile_test.rs"]
mod public_profile_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_api;
use crate::components::field::{TextArea, TextField};
use crate::components::loader::Loader;
use crate::config::ClientConfig;
use crate::net::types::{ContactMessage, PsychologistProfile};
use crate::pages::profile_settings::department_label;
use crate::util::forms::validate_contact;

pub const SENT: &str = "¡Mensaje enviado con éxito!";
pub const SEND_FAILED: &str = "Hubo un error al enviar el mensaje.";

/// "Barrio, Departamento", falling back to Montevideo when unset.
pub fn location_line(profile: &PsychologistProfile) -> String {
    let department = if profile.department.is_empty() {
        "Montevideo".to_owned()
    } else {
        department_label(&profile.department)
    };
    if profile.neighborhood.is_empty() {
        department
    } else {
        format!("{}, {department}", profile.neighborhood)
    }
}

pub fn modality_label(modality: &str) -> &'static str {
    match modality {
        "online" => "Online",
        _ => "Presencial",
    }
}

/// Social links with a URL, in name order.
pub fn social_links(profile: &PsychologistProfile) -> Vec<(String, String)> {
    profile
        .social_networks
        .iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(name, url)| (name.clone(), url.clone()))
        .collect()
}

#[component]
pub fn PublicProfilePage() -> impl IntoView {
    let api = use_api();
    let config = expect_context::<ClientConfig>();
    let profile = RwSignal::new(None::<PsychologistProfile>);
    let loading = RwSignal::new(true);

    leptos::task::spawn_local(async move {
        match api.get_value().fetch_profile(&config.profile_id).await {
            Ok(loaded) => profile.set(Some(loaded)),
            Err(e) => log::error!("loading public profile {} failed: {e}", config.profile_id),
        }
        loading.set(false);
    });

    view! {
        <Title text="Contygo"/>
        <div class="landing">
            {move || {
                if loading.get() {
                    return view! { <Loader/> }.into_any();
                }
                match profile.get() {
                    Some(p) => view! { <ProfileSummary profile=p/> }.into_any(),
                    None => view! { <p class="card__error">"No pudimos cargar este perfil."</p> }.into_any(),
                }
            }}
            <ContactForm/>
        </div>
    }
}

#[component]
fn ProfileSummary(profile: PsychologistProfile) -> impl IntoView {
    let location = location_line(&profile);
    let links = social_links(&profile);
    let therapies = profile.therapy_types.join(" · ");
    view! {
        <Title text=format!("{} | Contygo", profile.name)/>
        <section class="landing__hero">
            <img class="landing__photo" src=profile.photo alt=profile.name.clone()/>
            <div>
                <h1>{profile.name.clone()}</h1>
                <p class="landing__speciality">{profile.speciality}</p>
                <p class="landing__meta">
                    {location}
                    " · "
                    {modality_label(&profile.modality)}
                </p>
                <p class="landing__therapies">{therapies}</p>
            </div>
        </section>
        <section class="landing__about">
            <p>{profile.description}</p>
        </section>
        <ul class="landing__social">
            {links
                .into_iter()
                .map(|(name, url)| {
                    view! {
                        <li>
                            <a href=url target="_blank" rel="noopener">{name}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let api = use_api();
    let message = RwSignal::new(ContactMessage::default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<(bool, String)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let outgoing = message.get_untracked();
        if let Err(msg) = validate_contact(&outgoing) {
            notice.set(Some((false, msg.to_owned())));
            return;
        }
        busy.set(true);
        notice.set(None);
        leptos::task::spawn_local(async move {
            match api.get_value().send_contact(&outgoing).await {
                Ok(()) => {
                    message.set(ContactMessage::default());
                    notice.set(Some((true, SENT.to_owned())));
                }
                Err(e) => {
                    log::error!("contact message failed: {e}");
                    notice.set(Some((false, SEND_FAILED.to_owned())));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="landing__contact card">
            <h2>"Contacto"</h2>
            <form class="form" on:submit=on_submit>
                <TextField
                    label="Nombre"
                    value=Signal::derive(move || message.get().name)
                    on_input=Callback::new(move |v| message.update(|m| m.name = v))
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || message.get().email)
                    on_input=Callback::new(move |v| message.update(|m| m.email = v))
                />
                <TextField
                    label="Teléfono"
                    input_type="tel"
                    value=Signal::derive(move || message.get().phone)
                    on_input=Callback::new(move |v| message.update(|m| m.phone = v))
                />
                <TextArea
                    label="Mensaje"
                    value=Signal::derive(move || message.get().message)
                    on_input=Callback::new(move |v| message.update(|m| m.message = v))
                />
                {move || notice.get().map(|(ok, text)| {
                    let class = if ok { "form__success" } else { "form__error" };
                    view! { <p class=class>{text}</p> }
                })}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Enviando..." } else { "Enviar mensaje" }}
                </button>
            </form>
        </section>
    }
}
