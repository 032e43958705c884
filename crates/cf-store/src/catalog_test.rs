use super::*;
use crate::EstimateDb;

fn material(code: &str, price: f64) -> Material {
    Material {
        code: code.to_string(),
        name: format!("Material {code}"),
        unit: "kg".to_string(),
        ref_price: price,
    }
}

fn norm(code: &str) -> NormDefinition {
    NormDefinition {
        id: 0,
        code: code.to_string(),
        name: format!("Norm {code}"),
        unit: "m3".to_string(),
        kind: "material".to_string(),
    }
}

fn line(material_code: &str, qty: f64) -> NormResourceLine {
    NormResourceLine {
        material_code: material_code.to_string(),
        material_name: format!("Material {material_code}"),
        unit: "kg".to_string(),
        quantity_per_unit: qty,
    }
}

#[test]
fn test_upsert_material_inserts_then_updates() {
    let db = EstimateDb::open_memory().unwrap();

    upsert_material(db.conn(), &material("XM", 1500.0)).unwrap();
    upsert_material(db.conn(), &material("XM", 1750.0)).unwrap();

    let snapshot = load_catalog(db.conn()).unwrap();
    assert_eq!(snapshot.material("XM").unwrap().ref_price, 1750.0);

    let count: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM cf.materials", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_insert_norm_and_find() {
    let db = EstimateDb::open_memory().unwrap();
    let id = insert_norm(db.conn(), &norm("AF.11213")).unwrap();
    assert_eq!(find_norm_id(db.conn(), "AF.11213").unwrap(), Some(id));
    assert_eq!(find_norm_id(db.conn(), "missing").unwrap(), None);
}

#[test]
fn test_replace_norm_resources_preserves_order() {
    let db = EstimateDb::open_memory().unwrap();
    let id = insert_norm(db.conn(), &norm("AF.11213")).unwrap();

    db.transaction(|conn| {
        replace_norm_resources(conn, id, &[line("ZZ", 1.0), line("AA", 2.0), line("MM", 3.0)])
    })
    .unwrap();

    let snapshot = load_catalog(db.conn()).unwrap();
    let codes: Vec<&str> = snapshot
        .resource_lines("AF.11213")
        .iter()
        .map(|l| l.material_code.as_str())
        .collect();
    // Ordinal position wins over any alphabetical ordering.
    assert_eq!(codes, vec!["ZZ", "AA", "MM"]);
}

#[test]
fn test_replace_norm_resources_is_wholesale() {
    let db = EstimateDb::open_memory().unwrap();
    let id = insert_norm(db.conn(), &norm("AB.1")).unwrap();

    db.transaction(|conn| replace_norm_resources(conn, id, &[line("A", 1.0), line("B", 2.0)]))
        .unwrap();
    db.transaction(|conn| replace_norm_resources(conn, id, &[line("C", 3.0)]))
        .unwrap();

    let snapshot = load_catalog(db.conn()).unwrap();
    assert_eq!(snapshot.resource_lines("AB.1").len(), 1);
    assert_eq!(snapshot.resource_lines("AB.1")[0].material_code, "C");
}

#[test]
fn test_load_catalog_snapshot() {
    let db = EstimateDb::open_memory().unwrap();
    upsert_material(db.conn(), &material("XM", 1500.0)).unwrap();
    let id = insert_norm(db.conn(), &norm("AF.1")).unwrap();
    db.transaction(|conn| replace_norm_resources(conn, id, &[line("XM", 0.5)]))
        .unwrap();

    let snapshot = load_catalog(db.conn()).unwrap();
    assert_eq!(snapshot.norm_count(), 1);
    assert!(snapshot.norm("AF.1").is_some());
    assert_eq!(snapshot.resource_lines("AF.1")[0].quantity_per_unit, 0.5);
    assert!(snapshot.resource_lines("unknown").is_empty());
}
