//! Login page: email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::toaster::notify;
use crate::config::REGISTER_PATH;
use crate::flows::login::{self, LoginForm};
use crate::net::api::HttpAccountApi;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::Session;
use crate::util::validation::{Field, FieldErrors};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(field_errors) = login::validate(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match login::submit(&HttpAccountApi, &session, &form).await {
                Ok(done) => {
                    notify(notices, NoticeKind::Success, done.notice);
                    if let Some(path) = done.redirect {
                        navigate(path, NavigateOptions::default());
                    }
                }
                Err(err) => match err.field_errors() {
                    Some(field_errors) => errors.set(field_errors.clone()),
                    None => notify(notices, NoticeKind::Error, err.to_string()),
                },
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <h1 class="form-page__title">"Sign In"</h1>
            <form class="form" on:submit=on_submit>
                <FormField value=email field=Field::Email errors=errors input_type="email" placeholder="Email"/>
                <FormField value=password field=Field::Password errors=errors input_type="password" placeholder="Password"/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Loading..." } else { "Sign In" }}
                </button>
            </form>
            <div class="form-page__footer">
                <p>"Dont Have an account?"</p>
                <A href=REGISTER_PATH>
                    <span class="link">"Sign up"</span>
                </A>
            </div>
        </div>
    }
}
