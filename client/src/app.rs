//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::{authenticated_route::AuthenticatedRoute, header::Header, toaster::Toaster};
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::notice::NoticeState;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Loads the persisted session before the first render, provides shared state
/// contexts, and sets up client-side routing. `/profile` sits behind
/// `AuthenticatedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(SessionStore::load(BrowserStorage));
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(notices);

    view! {
        <Title text="Account Portal"/>

        <Router>
            <Header/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <ParentRoute path=StaticSegment("profile") view=AuthenticatedRoute>
                        <Route path=StaticSegment("") view=ProfilePage/>
                    </ParentRoute>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
