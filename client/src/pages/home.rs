//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{LOGIN_PATH, PROFILE_PATH, REGISTER_PATH};
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Account Portal"</h1>
            {move || match session.read() {
                Some(account) => view! {
                    <p>"Welcome back, " {account.firstname} "."</p>
                    <A href=PROFILE_PATH>"Manage your profile"</A>
                }
                .into_any(),
                None => view! {
                    <p>"Sign in to manage your account, or create one."</p>
                    <div class="home-page__links">
                        <A href=LOGIN_PATH>"Sign In"</A>
                        <A href=REGISTER_PATH>"Sign Up"</A>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
