//! Session detail with the notes editor.
//!
//! Notes removed locally are only dropped on the server when the user saves.
//! Saving posts the draft plus the kept notes, then re-fetches the session.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::pages::common::{load_error, write_error};
use crate::state::notes::NotesEditor;
use crate::util::dates::{format_date_dmy, format_millis_datetime, now_millis};
use crate::util::routes::patient_detail_path;

async fn load_session(client: ApiClient, session_id: String, editor: RwSignal<NotesEditor>) {
    match client.fetch_session(&session_id).await {
        Ok(session) => editor.update(|e| e.reconcile(session)),
        Err(e) => {
            log::error!("loading session {session_id} failed: {e}");
            editor.update(|ed| ed.load_failed(load_error("la sesión")));
        }
    }
}

#[component]
pub fn SessionDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let session_id = move || params.read().get("session_id").unwrap_or_default();
    let patient_id = move || params.read().get("patient_id").unwrap_or_default();
    let editor = RwSignal::new(NotesEditor::loading());

    let id = session_id();
    leptos::task::spawn_local(load_session(api.get_value(), id, editor));

    let on_save = move |_| {
        let current = editor.get_untracked();
        if current.busy || !current.has_changes() {
            return;
        }
        let draft = current.draft_note(now_millis()).unwrap_or_default();
        let kept = current.notes;
        let id = session_id();
        editor.update(|e| {
            e.busy = true;
            e.error = None;
        });
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match client.save_session_notes(&id, &draft, &kept).await {
                Ok(()) => load_session(client, id, editor).await,
                Err(e) => {
                    log::error!("saving notes for session {id} failed: {e}");
                    editor.update(|ed| {
                        ed.busy = false;
                        ed.error = Some(write_error("actualizar", "la sesión"));
                    });
                }
            }
        });
    };

    let note_rows = move || {
        editor
            .get()
            .notes
            .into_iter()
            .enumerate()
            .map(|(index, n)| {
                view! {
                    <li class="notes__item">
                        <div>
                            <p class="notes__text">{n.note}</p>
                            <span class="notes__date">{format_millis_datetime(n.created_at)}</span>
                        </div>
                        <button
                            class="btn btn--icon"
                            title="Eliminar"
                            on:click=move |_| editor.update(|e| e.remove(index))
                        >
                            "✕"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Sesión | Contygo"/>
        <Breadcrumb
            page_name="Sesión"
            parent=(patient_detail_path(&patient_id()), "Paciente".to_owned())
        />
        {move || {
            let e = editor.get();
            if e.loading {
                return view! { <Loader/> }.into_any();
            }
            let Some(session) = e.session else {
                let message = e.error.unwrap_or_else(|| "No se encontró la sesión".to_owned());
                return view! { <p class="card__error">{message}</p> }.into_any();
            };
            view! {
                <div class="card">
                    <h3>"Detalles de la sesión"</h3>
                    <dl class="detail-list">
                        <dt>"Fecha"</dt><dd>{format_date_dmy(&session.date)}</dd>
                        <dt>"Modalidad"</dt><dd>{session.modality}</dd>
                        <dt>"Duración"</dt><dd>{format!("{} min.", session.duration)}</dd>
                        <dt>"Hora"</dt><dd>{session.time}</dd>
                        <dt>"Motivo de sesión"</dt><dd>{session.reason}</dd>
                    </dl>
                </div>
            }
                .into_any()
        }}
        <Show when=move || editor.with(|e| e.session.is_some())>
            <div class="card notes">
                <h3>"Notas durante la sesión"</h3>
                <Show
                    when=move || editor.with(|e| !e.notes.is_empty())
                    fallback=|| view! { <p class="card__empty">"Aún no hay notas registradas."</p> }
                >
                    <ul class="notes__list">{note_rows}</ul>
                </Show>
                <textarea
                    class="field__input"
                    rows="6"
                    placeholder="Escribí tus apuntes de la sesión acá"
                    prop:value=move || editor.get().draft
                    on:input=move |ev| editor.update(|e| e.draft = event_target_value(&ev))
                ></textarea>
                <Show when=move || editor.with(|e| e.error.is_some())>
                    <p class="form__error">{move || editor.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="card__footer">
                    <button
                        class="btn btn--primary"
                        disabled=move || editor.with(|e| e.busy || !e.has_changes())
                        on:click=on_save
                    >
                        {move || if editor.get().busy { "Guardando..." } else { "Guardar cambios" }}
                    </button>
                </div>
            </div>
        </Show>
    }
}
