//! Profile page: edit names/password, delete the account, or sign out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted under `AuthenticatedRoute`, so a session exists on entry. Deleting
//! the account or signing out clears the session and the guard redirects to
//! `/login` on the next render pass.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::toaster::notify;
use crate::flows::profile::{self, PROFILE_FAILURE, ProfileForm};
use crate::flows::{FlowError, FlowSuccess};
use crate::net::api::HttpAccountApi;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::{Session, SessionAccess};
use crate::util::validation::{Field, FieldErrors};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let seed = session.current().map(|a| ProfileForm::from_account(&a)).unwrap_or_default();
    let firstname = RwSignal::new(seed.firstname);
    let lastname = RwSignal::new(seed.lastname);
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let failed = RwSignal::new(false);
    let updated = RwSignal::new(false);

    // Shared result handling for the three actions.
    let settle = move |result: Result<FlowSuccess, FlowError>| {
        match result {
            Ok(done) => {
                failed.set(false);
                notify(notices, NoticeKind::Success, done.notice);
            }
            Err(FlowError::Invalid(field_errors)) => errors.set(field_errors),
            Err(err) => {
                log::warn!("profile action failed: {err}");
                failed.set(true);
            }
        }
        busy.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm {
            firstname: firstname.get_untracked(),
            lastname: lastname.get_untracked(),
            password: password.get_untracked(),
        };
        errors.set(FieldErrors::new());
        updated.set(false);
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = profile::update(&HttpAccountApi, &session, &form).await;
            if result.is_ok() {
                password.set(String::new());
                updated.set(true);
            }
            settle(result);
        });
    };

    let on_delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            settle(profile::delete(&HttpAccountApi, &session).await);
        });
    };

    let on_sign_out = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            settle(profile::sign_out(&HttpAccountApi, &session).await);
        });
    };

    view! {
        <div class="form-page">
            <h1 class="form-page__title">"Profile"</h1>
            <p class="form-page__subtitle">{move || session.read().map(|a| a.email).unwrap_or_default()}</p>
            <form class="form" on:submit=on_submit>
                <FormField value=firstname field=Field::FirstName errors=errors placeholder="firstname"/>
                <FormField value=lastname field=Field::LastName errors=errors placeholder="lastname"/>
                <FormField value=password field=Field::Password errors=errors input_type="password" placeholder="Password"/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Loading..." } else { "Update" }}
                </button>
            </form>
            <div class="form-page__actions">
                <button class="link link--danger" type="button" on:click=on_delete disabled=move || busy.get()>
                    "Delete Account"
                </button>
                <button class="link link--danger" type="button" on:click=on_sign_out disabled=move || busy.get()>
                    "Sign out"
                </button>
            </div>
            <Show when=move || failed.get()>
                <p class="form-page__message form-page__message--error">{PROFILE_FAILURE}</p>
            </Show>
            <Show when=move || updated.get()>
                <p class="form-page__message form-page__message--success">{profile::UPDATE_NOTICE}</p>
            </Show>
        </div>
    }
}
