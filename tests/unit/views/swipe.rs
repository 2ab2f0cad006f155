use super::*;

fn deck() -> SwipeDeck {
    SwipeDeck::new(Arc::new(Catalog::builtin().unwrap()))
}

#[test]
fn starts_on_first_card() {
    let d = deck();
    assert_eq!(d.current().unwrap().id, "top-001");
    assert_eq!(d.progress(), (1, 7));
    assert!(!d.is_exhausted());
}

#[test]
fn actions_split_into_liked_and_passed() {
    let mut d = deck();
    assert_eq!(d.like().as_deref(), Some("top-001"));
    assert_eq!(d.pass().as_deref(), Some("top-002"));
    assert_eq!(d.like().as_deref(), Some("top-003"));
    assert_eq!(d.liked(), &["top-001".to_string(), "top-003".to_string()]);
    assert_eq!(d.passed(), &["top-002".to_string()]);
    assert_eq!(d.cursor(), 3);
}

#[test]
fn exhausts_after_one_action_per_card() {
    let mut d = deck();
    for i in 0..7 {
        assert!(!d.is_exhausted(), "exhausted early at {i}");
        assert!(d.pass().is_some());
        assert!(d.cursor() <= 6);
    }
    assert!(d.is_exhausted());
    assert!(d.current().is_none());
    assert_eq!(d.cursor(), 6);
    assert_eq!(d.passed().len(), 7);

    assert!(d.like().is_none());
    assert!(d.liked().is_empty());
}

#[test]
fn reset_restarts_the_deck() {
    let mut d = deck();
    for _ in 0..7 {
        d.like();
    }
    d.reset();
    assert!(!d.is_exhausted());
    assert_eq!(d.cursor(), 0);
    assert!(d.liked().is_empty());
    assert!(d.passed().is_empty());
    assert_eq!(d.current().unwrap().id, "top-001");
}

#[test]
fn empty_catalog_is_immediately_exhausted() {
    let mut d = SwipeDeck::new(Arc::new(Catalog::new(1, Vec::new()).unwrap()));
    assert!(d.is_exhausted());
    assert!(d.like().is_none());
    assert_eq!(d.progress(), (0, 0));
}
