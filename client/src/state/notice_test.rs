use super::*;

#[test]
fn notice_state_default_is_empty() {
    assert!(NoticeState::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "saved");
    let b = state.push(NoticeKind::Error, "failed");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one");
    let b = state.push(NoticeKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NoticeState::default();
    state.push(NoticeKind::Success, "one");
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kind_classes() {
    assert_eq!(NoticeKind::Success.class(), "toast toast--success");
    assert_eq!(NoticeKind::Error.class(), "toast toast--error");
}
