use super::*;

fn sample_garment(id: &str) -> Garment {
    let size = Size {
        chest: 38.0,
        length: 29.0,
        sleeve: 8.5,
        fit: Fit::Regular,
    };
    Garment {
        id: id.to_string(),
        sku: "SKU".to_string(),
        name: "Sample".to_string(),
        category: Category::Tops,
        subcategory: "t-shirts".to_string(),
        brand: "Brand".to_string(),
        price: 10.0,
        material: "Cotton".to_string(),
        thickness: Thickness::Light,
        stretch: false,
        colorways: vec![Colorway {
            id: format!("{id}-white"),
            name: "White".to_string(),
            hex_code: HexColor::rgb(255, 255, 255),
            image_url: String::new(),
            mask_url: String::new(),
        }],
        sizes: vec![size],
        landmarks: Landmarks::default(),
        size_chart: BTreeMap::from([("M".to_string(), size)]),
        rights: UsageRights::default(),
    }
}

#[test]
fn builtin_catalog_loads_seven_garments() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.version, 1);
    assert_eq!(catalog.len(), 7);
    assert!(!catalog.is_empty());
}

#[test]
fn builtin_defaults_follow_positional_rules() {
    let catalog = Catalog::builtin().unwrap();
    let tee = &catalog.garments()[0];
    assert_eq!(tee.id, "top-001");
    assert_eq!(tee.default_colorway().unwrap().id, "top-001-white");
    assert_eq!(
        tee.default_size().copied(),
        Some(Size {
            chest: 38.0,
            length: 29.0,
            sleeve: 8.5,
            fit: Fit::Regular,
        })
    );
    assert_eq!(tee.label_for_size(tee.default_size().unwrap()), Some("M"));
}

#[test]
fn size_labels_use_shopper_order() {
    let catalog = Catalog::builtin().unwrap();
    let tee = &catalog.garments()[0];
    assert_eq!(tee.size_labels(), vec!["S", "M", "L", "XL"]);
    assert_eq!(tee.size_for_label("xl").unwrap().chest, 42.0);
    assert!(tee.size_for_label("XXL").is_none());
}

#[test]
fn duplicate_garment_ids_are_rejected() {
    let err = Catalog::new(1, vec![sample_garment("a"), sample_garment("a")]).unwrap_err();
    assert!(err.to_string().contains("duplicate garment id"));
}

#[test]
fn duplicate_colorway_ids_are_rejected() {
    let a = sample_garment("a");
    let mut b = sample_garment("b");
    b.colorways[0].id = a.colorways[0].id.clone();
    let err = Catalog::new(1, vec![a, b]).unwrap_err();
    assert!(err.to_string().contains("duplicate colorway id"));
}

#[test]
fn garments_without_colorways_or_sizes_are_rejected() {
    let mut g = sample_garment("a");
    g.colorways.clear();
    assert!(Catalog::new(1, vec![g]).is_err());

    let mut g = sample_garment("a");
    g.sizes.clear();
    assert!(Catalog::new(1, vec![g]).is_err());
}

#[test]
fn negative_price_is_rejected() {
    let mut g = sample_garment("a");
    g.price = -1.0;
    assert!(matches!(
        Catalog::new(1, vec![g]),
        Err(DrapeError::Catalog(_))
    ));
}

#[test]
fn single_size_garment_has_no_default_size() {
    let g = sample_garment("a");
    assert!(g.default_size().is_none());
}

#[test]
fn category_parses_case_insensitively() {
    assert_eq!("Dresses".parse::<Category>().unwrap(), Category::Dresses);
    assert!("shoes".parse::<Category>().is_err());
}

#[test]
fn from_reader_reports_malformed_json() {
    let err = Catalog::from_reader("{\"version\": 1".as_bytes()).unwrap_err();
    assert!(matches!(err, DrapeError::Serde(_)));
}
