use super::*;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

fn account() -> UserAccount {
    serde_json::from_value(serde_json::json!({
        "_id": "1", "firstname": "A", "lastname": "B", "email": "a@b.com"
    }))
    .unwrap()
}

#[test]
fn signed_out_redirects_to_login() {
    assert_eq!(evaluate(None), GuardDecision::Redirect("/login"));
}

#[test]
fn signed_in_renders() {
    let user = account();
    assert_eq!(evaluate(Some(&user)), GuardDecision::Render);
}

#[test]
fn guard_follows_store_replacements() {
    let mut store = SessionStore::load(MemoryStorage::new());
    assert_eq!(evaluate(store.read()), GuardDecision::Redirect("/login"));

    store.replace(Some(account()));
    assert_eq!(evaluate(store.read()), GuardDecision::Render);

    store.replace(None);
    assert_eq!(evaluate(store.read()), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_permits_after_reload_of_signed_in_session() {
    let storage = MemoryStorage::new();
    SessionStore::load(storage.clone()).replace(Some(account()));
    let reloaded = SessionStore::load(storage);
    assert_eq!(evaluate(reloaded.read()), GuardDecision::Render);
}
