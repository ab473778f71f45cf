//! Account creation page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::use_api;
use crate::pages::sign_in::FieldError;
use crate::util::forms::{SignUpErrors, SignUpForm, auth_error_message, validate_sign_up};
use crate::util::routes::SIGN_IN_PATH;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let form = RwSignal::new(SignUpForm::default());
    let errors = RwSignal::new(SignUpErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let values = form.get_untracked();
        let found = validate_sign_up(&values);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        failure.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api
                .get_value()
                .create_account(values.name.trim(), values.email.trim(), &values.password)
                .await;
            busy.set(false);
            match result {
                Ok(()) => {
                    log::info!("account created for {}", values.email.trim());
                    navigate(SIGN_IN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::error!("sign up failed: {e}");
                    failure.set(Some(auth_error_message(&e)));
                }
            }
        });
    };

    view! {
        <Title text="Registro | Contygo"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Contygo"</h1>
                <p class="auth-card__subtitle">"Creá tu cuenta"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Nombre"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().name)/>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().email)/>
                    <label class="auth-form__label">
                        "Contraseña"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                    <label class="auth-form__label">
                        "Repetir contraseña"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().confirm_password)/>
                    <Show when=move || failure.get().is_some()>
                        <p class="auth-form__failure">{move || failure.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creando cuenta..." } else { "Crear cuenta" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "¿Ya tenés cuenta? "
                    <A href=SIGN_IN_PATH>"Ingresá"</A>
                </p>
            </div>
        </div>
    }
}
