//! Registration page. Success shows a notice; the user signs in separately.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::form_field::FormField;
use crate::components::toaster::notify;
use crate::config::LOGIN_PATH;
use crate::flows::register::{self, RegistrationForm};
use crate::net::api::HttpAccountApi;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::validation::{Field, FieldErrors};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegistrationForm {
            firstname: firstname.get_untracked(),
            lastname: lastname.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };
        if let Err(field_errors) = register::validate(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        leptos::task::spawn_local(async move {
            match register::submit(&HttpAccountApi, &form).await {
                Ok(done) => notify(notices, NoticeKind::Success, done.notice),
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
            <h1 class="form-page__title">"Sign Up"</h1>
            <form class="form" on:submit=on_submit>
                <FormField value=firstname field=Field::FirstName errors=errors placeholder="Firstname"/>
                <FormField value=lastname field=Field::LastName errors=errors placeholder="Lastname"/>
                <FormField value=email field=Field::Email errors=errors input_type="email" placeholder="Email"/>
                <FormField value=password field=Field::Password errors=errors input_type="password" placeholder="Password"/>
                <FormField
                    value=password_confirmation
                    field=Field::PasswordConfirmation
                    errors=errors
                    input_type="password"
                    placeholder="Password Confirmation"
                />
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Loading..." } else { "Sign Up" }}
                </button>
            </form>
            <div class="form-page__footer">
                <p>"Have an account?"</p>
                <A href=LOGIN_PATH>
                    <span class="link">"Sign in"</span>
                </A>
            </div>
        </div>
    }
}
