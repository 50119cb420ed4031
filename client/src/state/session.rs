//! Session store: who, if anyone, is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for the signed-in account, read by the route guard
//! and replaced wholesale by the form flows. State survives reloads through a
//! write-through record in [`SessionStorage`].
//!
//! DESIGN
//! ======
//! `SessionStore` is plain Rust so it can be tested without a browser.
//! `Session` is the copyable Leptos handle provided through context: it owns
//! the store and mirrors its state into a signal that views track.
//!
//! The persisted layout is `{"state":{"account":...},"version":0}` under the
//! `account` key, matching the record older builds of the front end wrote.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{SESSION_STORAGE_KEY, SESSION_STORAGE_VERSION};
use crate::net::types::UserAccount;
use crate::util::storage::{BrowserStorage, SessionStorage, load_json, save_json};

/// `None` when signed out, otherwise the signed-in account.
pub type SessionState = Option<UserAccount>;

/// Callback run after every [`SessionStore::replace`].
pub type Observer = Box<dyn Fn(Option<&UserAccount>) + Send + Sync>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    account: Option<UserAccount>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    state: PersistedState,
    version: u32,
}

/// Read the persisted record. Missing, malformed and foreign-version records
/// all mean "signed out".
fn read_persisted(storage: &impl SessionStorage) -> SessionState {
    let record = load_json::<PersistedSession>(storage, SESSION_STORAGE_KEY)?;
    if record.version != SESSION_STORAGE_VERSION {
        log::warn!("ignoring session record with version {}", record.version);
        return None;
    }
    record.state.account
}

/// Owned session slot with write-through persistence.
pub struct SessionStore<S> {
    storage: S,
    account: SessionState,
    observers: Vec<Observer>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Build the store from whatever `storage` holds.
    pub fn load(storage: S) -> Self {
        let account = read_persisted(&storage);
        log::debug!("session loaded (signed in: {})", account.is_some());
        Self { storage, account, observers: Vec::new() }
    }

    /// The signed-in account, if any.
    pub fn read(&self) -> Option<&UserAccount> {
        self.account.as_ref()
    }

    /// Overwrite the session, persist it, then notify observers in
    /// subscription order.
    ///
    /// A failed storage write is logged and otherwise ignored: the in-memory
    /// state still changes.
    pub fn replace(&mut self, next: SessionState) {
        let record = PersistedSession {
            state: PersistedState { account: next.clone() },
            version: SESSION_STORAGE_VERSION,
        };
        if let Err(err) = save_json(&self.storage, SESSION_STORAGE_KEY, &record) {
            log::warn!("session not persisted: {err}");
        }
        self.account = next;
        for observer in &self.observers {
            observer(self.account.as_ref());
        }
    }

    pub fn subscribe(&mut self, observer: impl Fn(Option<&UserAccount>) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }
}

/// What a form flow needs from the session: the current account and a full
/// replacement.
pub trait SessionAccess {
    fn current(&self) -> SessionState;
    fn replace(&self, next: SessionState);
}

impl<S: SessionStorage> SessionAccess for RefCell<SessionStore<S>> {
    fn current(&self) -> SessionState {
        self.borrow().read().cloned()
    }

    fn replace(&self, next: SessionState) {
        self.borrow_mut().replace(next);
    }
}

/// Leptos handle to the browser session, provided as context by `App`.
#[derive(Clone, Copy)]
pub struct Session {
    account: RwSignal<SessionState>,
    store: StoredValue<SessionStore<BrowserStorage>>,
}

impl Session {
    pub fn new(mut store: SessionStore<BrowserStorage>) -> Self {
        let account = RwSignal::new(store.read().cloned());
        store.subscribe(move |next| account.set(next.cloned()));
        Self { account, store: StoredValue::new(store) }
    }

    /// Reactive read; views and effects calling this re-run on replace.
    pub fn read(&self) -> SessionState {
        self.account.get()
    }
}

impl SessionAccess for Session {
    fn current(&self) -> SessionState {
        self.account.get_untracked()
    }

    fn replace(&self, next: SessionState) {
        self.store.update_value(|store| store.replace(next));
    }
}
