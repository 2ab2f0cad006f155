use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DrapeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DrapeError::catalog("x")
            .to_string()
            .contains("catalog error:")
    );
    assert!(DrapeError::camera("x").to_string().contains("camera error:"));
    assert!(
        DrapeError::session("x")
            .to_string()
            .contains("session error:")
    );
    assert!(DrapeError::render("x").to_string().contains("render error:"));
    assert!(
        DrapeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DrapeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: DrapeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, DrapeError::Serde(_)));
}
