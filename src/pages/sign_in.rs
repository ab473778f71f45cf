//! Sign-in page: email + password against the session cookie endpoint.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::app::use_api;
use crate::util::forms::{SignInErrors, auth_error_message, validate_sign_in};
use crate::util::routes::{HOME_PATH, SIGN_UP_PATH};

#[component]
pub fn SignInPage() -> impl IntoView {
    let api = use_api();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignInErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let found = validate_sign_in(&email_value, &password_value);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        failure.set(None);

        leptos::task::spawn_local(async move {
            match api.get_value().sign_in(&email_value, &password_value).await {
                Ok(()) => {
                    log::info!("signed in as {email_value}");
                    reload_at(HOME_PATH);
                }
                Err(e) => {
                    log::error!("sign in failed: {e}");
                    failure.set(Some(auth_error_message(&e)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text="Ingresar | Contygo"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Contygo"</h1>
                <p class="auth-card__subtitle">"Ingresá a tu cuenta"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="tu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().email)/>
                    <label class="auth-form__label">
                        "Contraseña"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                    <Show when=move || failure.get().is_some()>
                        <p class="auth-form__failure">{move || failure.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "¿No tenés cuenta? "
                    <A href=SIGN_UP_PATH>"Registrate"</A>
                </p>
            </div>
        </div>
    }
}

/// Inline message under a form field.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Full document navigation, so the next page load runs a fresh session check.
fn reload_at(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("navigation to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("full navigation to {path} skipped outside the browser");
}
