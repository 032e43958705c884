use super::*;

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

fn header() -> Vec<Cell> {
    ["STT", "Mã", "Tên công việc", "ĐVT", "Dài", "Rộng", "Cao", "HS", "KL", "Đơn giá"]
        .into_iter()
        .map(text)
        .collect()
}

fn row(cells: Vec<Cell>) -> Vec<Cell> {
    cells
}

#[test]
fn test_section_header_classification() {
    // Name set, code and unit empty: a section header, not an item.
    let rows = vec![
        header(),
        row(vec![Cell::Null, Cell::Null, text("Phần thân nhà")]),
        row(vec![
            Cell::Null,
            text("B01"),
            text("Cột BTCT"),
            text("m3"),
            Cell::Null,
            Cell::Null,
            Cell::Null,
            Cell::Null,
            Cell::Number(2.5),
            Cell::Number(100.0),
        ]),
    ];

    let items = normalize(1, &rows, "Chung");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].section_name, "Phần thân nhà");
    assert_eq!(items[0].material_code, "B01");
    assert_eq!(items[0].quantity, 2.5);
    assert_eq!(items[0].unit_price, 100.0);
}

#[test]
fn test_negative_quantity_cell_stored_as_zero() {
    let rows = vec![
        header(),
        row(vec![
            Cell::Null,
            text("B01"),
            text("Cột BTCT"),
            text("m3"),
            Cell::Null,
            Cell::Null,
            Cell::Null,
            Cell::Null,
            Cell::Number(-3.5),
            Cell::Number(100.0),
        ]),
    ];

    let items = normalize(1, &rows, "Chung");
    assert_eq!(items[0].quantity, 0.0);
    assert_eq!(items[0].unit_price, 100.0);
}

#[test]
fn test_items_before_any_header_use_default_section() {
    let rows = vec![
        header(),
        row(vec![Cell::Null, text("A1"), text("Đào móng"), text("m3")]),
    ];
    let items = normalize(1, &rows, "Chung");
    assert_eq!(items[0].section_name, "Chung");
}

#[test]
fn test_nameless_rows_skipped() {
    let rows = vec![
        header(),
        row(vec![Cell::Null, text("X"), Cell::Null, text("m")]),
        row(vec![]),
        row(vec![Cell::Number(7.0)]),
    ];
    assert!(normalize(1, &rows, "Chung").is_empty());
}

#[test]
fn test_synthetic_code_for_codeless_items() {
    // A codeless row with a unit is an item, not a header.
    let rows = vec![
        header(),
        row(vec![Cell::Null, Cell::Null, text("Vận chuyển"), text("ca")]),
    ];
    let items = normalize(1, &rows, "Chung");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].material_code, "IMP-1");
}

#[test]
fn test_permissive_numbers_default_to_zero() {
    let rows = vec![
        header(),
        row(vec![
            Cell::Null,
            text("B02"),
            text("Xây tường"),
            text("m2"),
            Cell::Null,
            Cell::Null,
            Cell::Null,
            Cell::Null,
            text("abc"),
            Cell::Null,
        ]),
    ];
    let items = normalize(1, &rows, "Chung");
    assert_eq!(items[0].quantity, 0.0);
    assert_eq!(items[0].unit_price, 0.0);
}

#[test]
fn test_dimensions_captured_when_present() {
    let rows = vec![
        header(),
        row(vec![
            Cell::Null,
            text("B03"),
            text("Đổ sàn"),
            text("m3"),
            Cell::Number(5.0),
            Cell::Number(4.0),
            Cell::Number(0.12),
            Cell::Number(1.0),
            Cell::Number(2.4),
            Cell::Null,
        ]),
    ];
    let items = normalize(1, &rows, "Chung");
    let dims = items[0].dimensions.unwrap();
    assert_eq!(dims.length, Some(5.0));
    assert_eq!(dims.height, Some(0.12));
}

#[test]
fn test_sections_switch_as_headers_appear() {
    let rows = vec![
        header(),
        row(vec![Cell::Null, Cell::Null, text("Phần móng")]),
        row(vec![Cell::Null, text("M1"), text("Đào đất"), text("m3")]),
        row(vec![Cell::Null, Cell::Null, text("Phần thân")]),
        row(vec![Cell::Null, text("T1"), text("Cột BTCT"), text("m3")]),
    ];
    let items = normalize(1, &rows, "Chung");
    assert_eq!(items[0].section_name, "Phần móng");
    assert_eq!(items[1].section_name, "Phần thân");
}

#[test]
fn test_import_rows_replaces_estimate() {
    let db = EstimateDb::open_memory().unwrap();
    let rows = vec![
        header(),
        row(vec![Cell::Null, text("B01"), text("Cột BTCT"), text("m3")]),
    ];

    let count = import_rows(&db, 3, &rows, "Chung").unwrap();
    assert_eq!(count, 1);

    // A second import fully replaces the first.
    let count = import_rows(&db, 3, &rows, "Chung").unwrap();
    assert_eq!(count, 1);
    assert_eq!(estimates::load_project_items(db.conn(), 3).unwrap().len(), 1);
}

#[test]
fn test_import_empty_sheet_is_an_error() {
    let db = EstimateDb::open_memory().unwrap();
    assert!(matches!(
        import_rows(&db, 1, &[header()], "Chung"),
        Err(ImportError::EmptySheet)
    ));
    assert!(matches!(
        import_rows(&db, 1, &[], "Chung"),
        Err(ImportError::EmptySheet)
    ));
}
