use textcase_core::{CoreError, OutputList, OutputState, Session, TransformAction, TransformRecord};

#[test]
fn new_session_is_empty_with_actions_disabled() {
    let session = Session::new();
    assert_eq!(session.input(), "");
    assert_eq!(session.state(), OutputState::Empty);
    assert!(session.outputs().is_empty());
    for action in TransformAction::ALL {
        assert!(!session.is_enabled(action), "{action} should start disabled");
    }
}

#[test]
fn one_character_enables_every_action() {
    let mut session = Session::new();
    session.set_input("a");
    for action in TransformAction::ALL {
        assert!(session.is_enabled(action));
    }

    session.set_input("");
    assert!(!session.actions_enabled());
}

#[test]
fn applying_with_empty_input_is_rejected() {
    let mut session = Session::new();
    let err = session.apply(TransformAction::Uppercase).unwrap_err();
    assert_eq!(err, CoreError::ActionDisabled(TransformAction::Uppercase));
    assert_eq!(session.state(), OutputState::Empty);
}

#[test]
fn uppercase_click_produces_a_card() {
    let mut session = Session::new();
    session.set_input("hello");
    let record = session.apply(TransformAction::Uppercase).unwrap();

    assert_eq!(record.action_label(), "Uppercase");
    assert_eq!(record.original_text(), "hello");
    assert_eq!(record.transformed_text(), "HELLO");
    assert_eq!(session.state(), OutputState::Populated);
    assert_eq!(session.outputs().len(), 1);
}

#[test]
fn n_clicks_give_n_cards_newest_first() {
    let mut session = Session::new();
    session.set_input("hello world");
    session.apply(TransformAction::Uppercase).unwrap();
    session.apply(TransformAction::CapitaliseCase).unwrap();
    session.apply(TransformAction::CamelCase).unwrap();

    let cards: Vec<&str> = session
        .outputs()
        .iter()
        .map(TransformRecord::transformed_text)
        .collect();
    assert_eq!(cards, ["helloWorld", "Hello World", "HELLO WORLD"]);

    let latest = session.outputs().latest().unwrap();
    assert_eq!(latest.action(), TransformAction::CamelCase);
}

#[test]
fn cards_are_ordered_by_creation_time_descending() {
    let mut session = Session::new();
    for (i, text) in ["one", "two", "three", "four"].into_iter().enumerate() {
        session.set_input(text);
        let action = TransformAction::ALL[i % TransformAction::ALL.len()];
        session.apply(action).unwrap();
    }

    let stamps: Vec<_> = session.outputs().iter().map(TransformRecord::created_at).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(session.outputs().get(0).unwrap().original_text(), "four");
    assert_eq!(session.outputs().get(3).unwrap().original_text(), "one");
}

#[test]
fn applying_keeps_the_input() {
    let mut session = Session::new();
    session.set_input("Keep Me");
    session.apply(TransformAction::Lowercase).unwrap();
    assert_eq!(session.input(), "Keep Me");
}

#[test]
fn records_snapshot_the_input_at_click_time() {
    let mut session = Session::new();
    session.set_input("first");
    session.apply(TransformAction::Uppercase).unwrap();
    session.set_input("second");

    assert_eq!(session.outputs().latest().unwrap().original_text(), "first");
}

#[test]
fn reset_restores_the_fresh_page_state() {
    let mut session = Session::new();
    session.set_input("hello");
    session.apply(TransformAction::Uppercase).unwrap();
    session.apply(TransformAction::Lowercase).unwrap();

    session.reset();

    assert_eq!(session.input(), "");
    assert_eq!(session.state(), OutputState::Empty);
    assert!(!session.actions_enabled());
}

#[test]
fn set_input_reports_only_real_changes() {
    let mut session = Session::new();
    let change = session.set_input("a").unwrap();
    assert_eq!(change.previous, "");
    assert_eq!(change.current, "a");
    assert!(change.toggled_actions());

    assert!(session.set_input("a").is_none());

    let change = session.set_input("ab").unwrap();
    assert!(!change.toggled_actions());
}

#[test]
fn output_list_prepends() {
    let mut list = OutputList::new();
    assert_eq!(list.state(), OutputState::Empty);

    list.prepend(TransformRecord::new(TransformAction::Lowercase, "A"));
    list.prepend(TransformRecord::new(TransformAction::Uppercase, "b"));

    assert_eq!(list.state(), OutputState::Populated);
    let texts: Vec<&str> = (&list).into_iter().map(TransformRecord::transformed_text).collect();
    assert_eq!(texts, ["B", "a"]);
}
