use super::*;

#[test]
fn dresses_category_has_one_item() {
    let catalog = Catalog::builtin().unwrap();
    let dresses = catalog.by_category(Category::Dresses);
    assert_eq!(dresses.len(), 1);
    assert_eq!(dresses[0].id, "dress-001");
}

#[test]
fn category_counts_match_seed_data() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.by_category(Category::Tops).len(), 3);
    assert_eq!(catalog.by_category(Category::Outerwear).len(), 3);
}

#[test]
fn by_id_finds_or_misses() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.by_id("top-002").unwrap().name, "Premium Polo Shirt");
    assert!(catalog.by_id("nope").is_none());
}

#[test]
fn brands_are_unique_and_sorted() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(
        catalog.brands(),
        vec![
            "Classic",
            "Comfort",
            "Elegant",
            "Essentials",
            "Professional",
            "Vintage"
        ]
    );
}

#[test]
fn find_colorway_returns_owner() {
    let catalog = Catalog::builtin().unwrap();
    let (garment, colorway) = catalog.find_colorway("dress-001-red").unwrap();
    assert_eq!(garment.id, "dress-001");
    assert_eq!(colorway.name, "Red");
}
