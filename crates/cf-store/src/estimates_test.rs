use super::*;
use crate::EstimateDb;

fn item(code: &str, quantity: f64, unit_price: f64) -> EstimationItem {
    EstimationItem {
        id: 0,
        project_id: 1,
        section_name: "Phần móng".to_string(),
        material_code: code.to_string(),
        material_name: format!("Item {code}"),
        unit: "m3".to_string(),
        quantity,
        unit_price,
        dimensions: None,
    }
}

#[test]
fn test_replace_then_load() {
    let db = EstimateDb::open_memory().unwrap();
    let items = vec![item("B01", 2.5, 100.0), item("B02", 1.0, 50.0)];

    let count = db
        .transaction(|conn| replace_project_items(conn, 1, &items))
        .unwrap();
    assert_eq!(count, 2);

    let loaded = load_project_items(db.conn(), 1).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].material_code, "B01");
    assert_eq!(loaded[0].quantity, 2.5);
    assert!(loaded[0].id > 0);
}

#[test]
fn test_replace_leaves_no_leftovers() {
    let db = EstimateDb::open_memory().unwrap();

    db.transaction(|conn| replace_project_items(conn, 1, &[item("A", 1.0, 1.0), item("B", 1.0, 1.0)]))
        .unwrap();
    db.transaction(|conn| replace_project_items(conn, 1, &[item("C", 2.0, 2.0)]))
        .unwrap();

    let loaded = load_project_items(db.conn(), 1).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].material_code, "C");
}

#[test]
fn test_replace_scoped_to_project() {
    let db = EstimateDb::open_memory().unwrap();
    db.transaction(|conn| replace_project_items(conn, 1, &[item("A", 1.0, 1.0)]))
        .unwrap();
    db.transaction(|conn| replace_project_items(conn, 2, &[item("B", 1.0, 1.0)]))
        .unwrap();

    assert_eq!(load_project_items(db.conn(), 1).unwrap().len(), 1);
    assert_eq!(load_project_items(db.conn(), 2).unwrap().len(), 1);
}

#[test]
fn test_dimensions_round_trip() {
    let db = EstimateDb::open_memory().unwrap();
    let with_dims = EstimationItem {
        dimensions: Some(Dimensions::new(5.0, 4.0, 3.0, 1.0)),
        ..item("D01", 60.0, 10.0)
    };

    db.transaction(|conn| replace_project_items(conn, 1, &[with_dims])).unwrap();

    let loaded = load_project_items(db.conn(), 1).unwrap();
    let dims = loaded[0].dimensions.unwrap();
    assert_eq!(dims.length, Some(5.0));
    assert_eq!(dims.factor, Some(1.0));
}

#[test]
fn test_items_without_dimensions_load_as_none() {
    let db = EstimateDb::open_memory().unwrap();
    db.transaction(|conn| replace_project_items(conn, 1, &[item("A", 1.0, 1.0)]))
        .unwrap();

    let loaded = load_project_items(db.conn(), 1).unwrap();
    assert!(loaded[0].dimensions.is_none());
}

#[test]
fn test_get_item_scoped_to_project() {
    let db = EstimateDb::open_memory().unwrap();
    db.transaction(|conn| replace_project_items(conn, 1, &[item("A", 1.0, 1.0)]))
        .unwrap();
    let id = load_project_items(db.conn(), 1).unwrap()[0].id;

    assert!(get_item(db.conn(), 1, id).unwrap().is_some());
    // Same item id under a different project must not resolve.
    assert!(get_item(db.conn(), 2, id).unwrap().is_none());
}

#[test]
fn test_update_item_dimensions_in_place() {
    let db = EstimateDb::open_memory().unwrap();
    db.transaction(|conn| {
        replace_project_items(conn, 1, &[item("A", 1.0, 10.0), item("B", 9.0, 5.0)])
    })
    .unwrap();
    let id = load_project_items(db.conn(), 1).unwrap()[0].id;

    let dims = Dimensions::new(2.0, 2.0, 2.0, 1.0);
    let updated = update_item_dimensions(db.conn(), 1, id, &dims, dims.quantity()).unwrap();
    assert!(updated);

    let loaded = load_project_items(db.conn(), 1).unwrap();
    assert_eq!(loaded[0].quantity, 8.0);
    assert_eq!(loaded[0].dimensions.unwrap().length, Some(2.0));
    // The sibling item is untouched.
    assert_eq!(loaded[1].quantity, 9.0);

    assert!(!update_item_dimensions(db.conn(), 1, 99999, &dims, 0.0).unwrap());
}
