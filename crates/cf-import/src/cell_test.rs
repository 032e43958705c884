use super::*;

#[test]
fn test_as_number_is_permissive() {
    assert_eq!(Cell::Number(2.5).as_number(), 2.5);
    assert_eq!(Cell::Text("3.75".to_string()).as_number(), 3.75);
    assert_eq!(Cell::Text(" 12,5 ".to_string()).as_number(), 12.5);
    assert_eq!(Cell::Text("n/a".to_string()).as_number(), 0.0);
    assert_eq!(Cell::Null.as_number(), 0.0);
}

#[test]
fn test_is_blank() {
    assert!(Cell::Null.is_blank());
    assert!(Cell::Text("   ".to_string()).is_blank());
    assert!(!Cell::Text("B01".to_string()).is_blank());
    assert!(!Cell::Number(0.0).is_blank());
}

#[test]
fn test_as_text_trims() {
    assert_eq!(Cell::Text("  Cột BTCT ".to_string()).as_text(), "Cột BTCT");
    assert_eq!(Cell::Null.as_text(), "");
}

#[test]
fn test_untagged_deserialization() {
    let row: Vec<Cell> = serde_json::from_str(r#"[null, "B01", 2.5]"#).unwrap();
    assert_eq!(
        row,
        vec![Cell::Null, Cell::Text("B01".to_string()), Cell::Number(2.5)]
    );
}
