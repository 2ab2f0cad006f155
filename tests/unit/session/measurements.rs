use super::*;

#[test]
fn defaults_match_session_start_values() {
    let m = UserMeasurements::default();
    assert_eq!((m.chest, m.length, m.sleeve), (38.0, 29.0, 8.5));
    assert!(m.waist.is_none() && m.hips.is_none());
    assert!(m.advisories().is_empty());
}

#[test]
fn out_of_range_values_produce_advisories() {
    let m = UserMeasurements {
        chest: 55.0,
        sleeve: 6.0,
        ..UserMeasurements::default()
    };
    let fields: Vec<_> = m.advisories().into_iter().map(|a| a.field).collect();
    assert_eq!(fields, vec![MeasurementField::Chest, MeasurementField::Sleeve]);
}

#[test]
fn off_grid_values_produce_advisories() {
    let m = UserMeasurements {
        length: 29.3,
        ..UserMeasurements::default()
    };
    let adv = m.advisories();
    assert_eq!(adv.len(), 1);
    assert_eq!(adv[0].field, MeasurementField::Length);
    assert!(adv[0].message.contains("0.5"));
}

#[test]
fn optional_fields_are_omitted_from_json() {
    let v = serde_json::to_value(UserMeasurements::default()).unwrap();
    assert!(v.get("waist").is_none());
    let m: UserMeasurements =
        serde_json::from_str(r#"{"chest": 40, "length": 30, "sleeve": 9, "hips": 38}"#).unwrap();
    assert_eq!(m.hips, Some(38.0));
}
