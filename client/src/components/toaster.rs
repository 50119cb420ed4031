//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, NoticeState};

/// Push a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let mut id = 0;
    notices.update(|state| id = state.push(kind, text));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::config::NOTICE_TIMEOUT_MS).await;
        notices.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() on:click=move |_| notices.update(|state| state.dismiss(id))>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
