use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixcompError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixcompError::unsupported_format("x")
            .to_string()
            .contains("unsupported format:")
    );
    assert!(
        PixcompError::allocation("x")
            .to_string()
            .contains("allocation error:")
    );
    assert!(
        PixcompError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        PixcompError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixcompError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn question_mark_lifts_anyhow_errors() {
    fn inner() -> PixcompResult<()> {
        Err(anyhow::anyhow!("lifted"))?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert!(matches!(err, PixcompError::Other(_)));
    assert!(err.to_string().contains("lifted"));
}
