use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AnimError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AnimError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(AnimError::easing("x").to_string().contains("easing error:"));
    assert!(
        AnimError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn empty_queue_is_an_animation_error() {
    let err = AnimError::empty_queue();
    assert!(matches!(err, AnimError::Animation(_)));
    assert!(err.to_string().contains("queue is empty"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnimError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn unreadable_options_file_names_the_path() {
    let err = crate::AnimOptions::from_json_file("tests/data/no_such_options.json").unwrap_err();
    assert!(matches!(err, AnimError::Other(_)));
    assert!(err.to_string().contains("no_such_options.json"));
}

#[test]
fn malformed_options_json_is_a_serde_error() {
    let err = crate::AnimOptions::from_json_str("{ \"to\": ").unwrap_err();
    assert!(matches!(err, AnimError::Serde(_)));
}
