use super::*;

fn ids<'a>(view: &ClosetView<'a>) -> Vec<&'a str> {
    view.items.iter().map(|g| g.id.as_str()).collect()
}

#[test]
fn default_query_returns_everything_sorted_by_name() {
    let catalog = Catalog::builtin().unwrap();
    let view = ClosetQuery::default().apply(&catalog);
    assert_eq!(view.items.len(), 7);
    assert_eq!(view.summary(), "Showing 7 of 7 garments");
    let names: Vec<_> = view.items.iter().map(|g| g.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(names, sorted);
    assert_eq!(names[0], "A-Line Dress");
}

#[test]
fn search_matches_name_or_brand_case_insensitively() {
    let catalog = Catalog::builtin().unwrap();
    let q = ClosetQuery {
        search: "POLO".to_string(),
        ..ClosetQuery::default()
    };
    assert_eq!(ids(&q.apply(&catalog)), vec!["top-002"]);

    let q = ClosetQuery {
        search: "professional".to_string(),
        ..ClosetQuery::default()
    };
    assert_eq!(ids(&q.apply(&catalog)), vec!["top-003", "outer-003"]);
}

#[test]
fn filters_combine() {
    let catalog = Catalog::builtin().unwrap();
    let q = ClosetQuery {
        category: Some(Category::Outerwear),
        brand: Some("Professional".to_string()),
        ..ClosetQuery::default()
    };
    assert_eq!(ids(&q.apply(&catalog)), vec!["outer-003"]);

    let q = ClosetQuery {
        category: Some(Category::Dresses),
        search: "hoodie".to_string(),
        ..ClosetQuery::default()
    };
    let view = q.apply(&catalog);
    assert!(view.is_empty());
    assert_eq!(view.summary(), "Showing 0 of 7 garments");
}

#[test]
fn every_result_satisfies_every_predicate() {
    let catalog = Catalog::builtin().unwrap();
    let searches = ["", "e", "classic", "zzz"];
    let brands = [None, Some("Professional"), Some("Comfort")];
    for search in searches {
        for category in [None, Some(Category::Tops), Some(Category::Outerwear)] {
            for brand in brands {
                let q = ClosetQuery {
                    search: search.to_string(),
                    category,
                    brand: brand.map(str::to_string),
                    sort: SortKey::Price,
                };
                let view = q.apply(&catalog);
                assert!(view.items.len() <= catalog.len());
                for g in &view.items {
                    assert!(catalog.by_id(&g.id).is_some());
                    assert!(q.matches(g));
                }
                let expected = catalog.garments().iter().filter(|g| q.matches(g)).count();
                assert_eq!(view.items.len(), expected);
            }
        }
    }
}

#[test]
fn price_sort_is_numeric_and_stable() {
    let catalog = Catalog::builtin().unwrap();
    let q = ClosetQuery {
        sort: SortKey::Price,
        ..ClosetQuery::default()
    };
    let view = q.apply(&catalog);
    let prices: Vec<_> = view.items.iter().map(|g| g.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    // Two garments cost 79.99; stable sort keeps catalog order.
    let tied: Vec<_> = view
        .items
        .iter()
        .filter(|g| g.price == 79.99)
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(tied, vec!["top-003", "dress-001"]);
}

#[test]
fn resorting_is_a_permutation() {
    let catalog = Catalog::builtin().unwrap();
    let mut items: Vec<&Garment> = catalog.garments().iter().collect();
    sort_garments(&mut items, SortKey::Price);
    let mut by_name_from_price = items.clone();
    sort_garments(&mut by_name_from_price, SortKey::Name);
    let by_name = ClosetQuery::default().apply(&catalog).items;

    let mut a: Vec<_> = by_name_from_price.iter().map(|g| g.id.clone()).collect();
    let mut b: Vec<_> = items.iter().map(|g| g.id.clone()).collect();
    assert_eq!(
        by_name_from_price
            .iter()
            .map(|g| g.id.as_str())
            .collect::<Vec<_>>(),
        by_name.iter().map(|g| g.id.as_str()).collect::<Vec<_>>()
    );
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[test]
fn brand_sort_orders_brands() {
    let catalog = Catalog::builtin().unwrap();
    let q = ClosetQuery {
        sort: SortKey::Brand,
        ..ClosetQuery::default()
    };
    let brands: Vec<_> = q.apply(&catalog).items.iter().map(|g| g.brand.as_str()).collect();
    assert_eq!(brands.first(), Some(&"Classic"));
    assert_eq!(brands.last(), Some(&"Vintage"));
}

#[test]
fn sort_key_parses() {
    assert_eq!("Price".parse::<SortKey>().unwrap(), SortKey::Price);
    assert!("rating".parse::<SortKey>().is_err());
}
