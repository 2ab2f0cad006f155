use super::*;

#[test]
fn record_keeps_duplicates() {
    let mut h = TryOnHistory::new();
    h.record("top-001");
    h.record("top-001");
    assert_eq!(h.len(), 2);
}

#[test]
fn recent_first_has_descending_ordinals() {
    let catalog = Catalog::builtin().unwrap();
    let mut h = TryOnHistory::new();
    for id in ["top-001", "dress-001", "missing"] {
        h.record(id);
    }
    let rows = h.recent_first(&catalog);
    let summary: Vec<_> = rows.iter().map(|r| (r.ordinal, r.garment_id)).collect();
    assert_eq!(
        summary,
        vec![(3, "missing"), (2, "dress-001"), (1, "top-001")]
    );
    assert!(rows[0].garment.is_none());
    assert_eq!(rows[1].garment.unwrap().name, "A-Line Dress");
}

#[test]
fn empty_history_is_a_valid_state() {
    let catalog = Catalog::builtin().unwrap();
    let h = TryOnHistory::new();
    assert!(h.is_empty());
    assert!(h.recent_first(&catalog).is_empty());
}
