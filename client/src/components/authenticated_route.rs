//! Parent route that only renders its child for signed-in users.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::state::session::Session;
use crate::util::auth::{GuardDecision, evaluate};

/// Wraps protected routes. Re-evaluates on every session change: signing out
/// while a protected view is open redirects immediately.
#[component]
pub fn AuthenticatedRoute() -> impl IntoView {
    let session = expect_context::<Session>();
    let decision = move || evaluate(session.read().as_ref());

    view! {
        <Show
            when=move || decision() == GuardDecision::Render
            fallback=move || match decision() {
                GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
                GuardDecision::Render => ().into_any(),
            }
        >
            <Outlet/>
        </Show>
    }
}
