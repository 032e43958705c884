use super::*;
use cf_core::{Material, NormDefinition, NormResourceLine};

fn catalog_with(lines: &[(&str, f64, Option<f64>)]) -> CatalogSnapshot {
    let mut catalog = CatalogSnapshot::new();
    let mut resource_lines = Vec::new();

    for (code, qty, price) in lines {
        resource_lines.push(NormResourceLine {
            material_code: code.to_string(),
            material_name: format!("Material {code}"),
            unit: "kg".to_string(),
            quantity_per_unit: *qty,
        });
        if let Some(price) = price {
            catalog.add_material(Material {
                code: code.to_string(),
                name: format!("Material {code}"),
                unit: "kg".to_string(),
                ref_price: *price,
            });
        }
    }

    catalog.add_norm(
        NormDefinition {
            id: 1,
            code: "AF.1".to_string(),
            name: "Bê tông móng".to_string(),
            unit: "m3".to_string(),
            kind: "material".to_string(),
        },
        resource_lines,
    );
    catalog
}

#[test]
fn test_rollup_sums_lines() {
    let catalog = catalog_with(&[("A", 2.0, Some(10.0)), ("B", 3.0, Some(5.0))]);
    let rolled = resolve_unit_price(&catalog, "AF.1").unwrap();
    assert_eq!(rolled.unit_price, 35.0);
    assert!(rolled.warnings.is_empty());
}

#[test]
fn test_missing_material_prices_at_zero_with_warning() {
    let catalog = catalog_with(&[("A", 2.0, Some(10.0)), ("GONE", 4.0, None)]);
    let rolled = resolve_unit_price(&catalog, "AF.1").unwrap();
    assert_eq!(rolled.unit_price, 20.0);
    assert_eq!(rolled.warnings.len(), 1);
    assert!(rolled.warnings[0].contains("GONE"));
}

#[test]
fn test_unknown_norm_is_an_error() {
    let catalog = catalog_with(&[]);
    assert!(matches!(
        resolve_unit_price(&catalog, "XX.9"),
        Err(EngineError::UnknownNorm(code)) if code == "XX.9"
    ));
}

#[test]
fn test_norm_without_lines_prices_at_zero() {
    let catalog = catalog_with(&[]);
    let rolled = resolve_unit_price(&catalog, "AF.1").unwrap();
    assert_eq!(rolled.unit_price, 0.0);
}

#[test]
fn test_unit_price_rounded_to_cost_scale() {
    let catalog = catalog_with(&[("A", 0.333, Some(10.0))]);
    let rolled = resolve_unit_price(&catalog, "AF.1").unwrap();
    assert_eq!(rolled.unit_price, 3.33);
}
