use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SnaplineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SnaplineError::playback("x")
            .to_string()
            .contains("playback error:")
    );
    assert!(
        SnaplineError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SnaplineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SnaplineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
