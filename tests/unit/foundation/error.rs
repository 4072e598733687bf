use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StarrowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StarrowError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        StarrowError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StarrowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
