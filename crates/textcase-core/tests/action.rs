use textcase_core::{CoreError, TransformAction, TransformRecord};

#[test]
fn labels_and_hooks_match_the_action_row() {
    let rows: Vec<_> = TransformAction::ALL
        .iter()
        .map(|a| (a.label(), a.test_id()))
        .collect();
    assert_eq!(
        rows,
        [
            ("Lowercase", "lowercase-action"),
            ("Uppercase", "uppercase-action"),
            ("Camel case", "camelcase-action"),
            ("Capitalise case", "capitalisecase-action"),
        ]
    );
}

#[test]
fn card_title_appends_transform() {
    assert_eq!(TransformAction::Uppercase.card_title(), "Uppercase Transform");
    assert_eq!(TransformAction::CamelCase.card_title(), "Camel case Transform");
}

#[test]
fn parses_wire_name_hook_and_label() {
    assert_eq!("camel_case".parse(), Ok(TransformAction::CamelCase));
    assert_eq!("capitalisecase-action".parse(), Ok(TransformAction::CapitaliseCase));
    assert_eq!("Camel case".parse(), Ok(TransformAction::CamelCase));
    assert_eq!(" UPPERCASE ".parse(), Ok(TransformAction::Uppercase));
}

#[test]
fn unknown_action_is_an_error() {
    assert_eq!(
        "titlecase".parse::<TransformAction>(),
        Err(CoreError::UnknownAction("titlecase".to_string()))
    );
}

#[test]
fn serializes_as_snake_case() {
    let json = serde_json::to_string(&TransformAction::CapitaliseCase).unwrap();
    assert_eq!(json, "\"capitalise_case\"");

    let back: TransformAction = serde_json::from_str("\"camel_case\"").unwrap();
    assert_eq!(back, TransformAction::CamelCase);
}

#[test]
fn record_json_carries_label_and_timestamp() {
    let ts: jiff::Timestamp = "2024-03-01T12:00:00Z".parse().unwrap();
    let record = TransformRecord::at(TransformAction::Uppercase, "hello", ts);

    let v = serde_json::to_value(&record).unwrap();
    assert_eq!(v["action"], "uppercase");
    assert_eq!(v["action_label"], "Uppercase");
    assert_eq!(v["original_text"], "hello");
    assert_eq!(v["transformed_text"], "HELLO");
    assert_eq!(v["created_at"], "2024-03-01T12:00:00Z");
}
