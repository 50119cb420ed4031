//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{HOME_PATH, LOGIN_PATH, PROFILE_PATH};
use crate::state::session::Session;

/// Brand link plus either the signed-in user's profile link or "Sign In".
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <header class="header">
            <div class="header__inner">
                <A href=HOME_PATH>
                    <span class="header__brand">"Account Portal"</span>
                </A>
                <nav class="header__nav">
                    <A href=HOME_PATH>"Home"</A>
                    {move || match session.read() {
                        Some(account) => view! { <A href=PROFILE_PATH>{account.display_name()}</A> }.into_any(),
                        None => view! { <A href=LOGIN_PATH>"Sign In"</A> }.into_any(),
                    }}
                </nav>
            </div>
        </header>
    }
}
