use stories_core::{update, AppState, Msg};

#[test]
fn removing_unknown_item_is_noop() {
    let state = AppState::default();
    let (next, effects) = update(state.clone(), Msg::RemoveClicked(42));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
