//! Recording API double and session fixtures shared by flow tests.

use std::cell::RefCell;

use crate::net::api::{AccountApi, ApiError};
use crate::net::types::{Credentials, ProfileChanges, Registration, UserAccount};
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(Credentials),
    Register(Registration),
    Update(String, ProfileChanges),
    Delete(String),
    SignOut,
}

/// Answers every account call with `account` and every acknowledgement call
/// with `ack`, recording what was asked.
pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    account: Result<UserAccount, ApiError>,
    ack: Result<(), ApiError>,
}

impl MockApi {
    pub fn returning(account: UserAccount) -> Self {
        Self { calls: RefCell::new(Vec::new()), account: Ok(account), ack: Ok(()) }
    }

    pub fn failing(err: ApiError) -> Self {
        Self { calls: RefCell::new(Vec::new()), account: Err(err.clone()), ack: Err(err) }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl AccountApi for MockApi {
    async fn login(&self, credentials: &Credentials) -> Result<UserAccount, ApiError> {
        self.calls.borrow_mut().push(Call::Login(credentials.clone()));
        self.account.clone()
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Register(registration.clone()));
        self.ack.clone()
    }

    async fn update_account(&self, id: &str, changes: &ProfileChanges) -> Result<UserAccount, ApiError> {
        self.calls.borrow_mut().push(Call::Update(id.to_owned(), changes.clone()));
        self.account.clone()
    }

    async fn delete_account(&self, id: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id.to_owned()));
        self.ack.clone()
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::SignOut);
        self.ack.clone()
    }
}

pub fn account(id: &str, firstname: &str, lastname: &str, email: &str) -> UserAccount {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "firstname": firstname,
        "lastname": lastname,
        "email": email
    }))
    .unwrap()
}

pub fn signed_out() -> RefCell<SessionStore<MemoryStorage>> {
    RefCell::new(SessionStore::load(MemoryStorage::new()))
}

pub fn signed_in(user: UserAccount) -> RefCell<SessionStore<MemoryStorage>> {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.replace(Some(user));
    RefCell::new(store)
}

pub fn run<F: Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}
