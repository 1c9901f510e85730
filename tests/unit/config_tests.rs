// Preflight validation unit tests

use logomark::config::{ConfigError, Invocation, Mode};
use logomark::watermark::Anchor;
use rstest::rstest;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"not decoded during preflight").unwrap();
    std::fs::write(dir.path().join("input.jpg"), b"").unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    dir
}

fn invocation(dir: &TempDir, input: &str, anchor: &str, ratio: Option<&str>) -> Invocation {
    Invocation {
        input: dir.path().join(input),
        output: dir.path().join("output"),
        logo: dir.path().join("logo.png"),
        anchor: anchor.to_string(),
        ratio: ratio.map(str::to_string),
    }
}

#[rstest]
#[case("topleft", Anchor::TopLeft)]
#[case("topright", Anchor::TopRight)]
#[case("bottomleft", Anchor::BottomLeft)]
#[case("bottomright", Anchor::BottomRight)]
#[case("center", Anchor::Center)]
fn test_all_anchor_names_accepted(#[case] name: &str, #[case] expected: Anchor) {
    let dir = workspace();
    let job = invocation(&dir, "input.jpg", name, None).validate().unwrap();
    assert_eq!(job.anchor, expected);
}

#[rstest]
#[case("TopLeft")]
#[case("top-left")]
#[case("middle")]
#[case("")]
fn test_unknown_anchor_rejected(#[case] name: &str) {
    let dir = workspace();
    let err = invocation(&dir, "input.jpg", name, None)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAnchor(_)));
    assert!(err.to_string().contains("topleft, topright, center, bottomleft, bottomright"));
}

#[test]
fn test_logo_checked_before_anchor() {
    let dir = workspace();
    let mut inv = invocation(&dir, "input.jpg", "nowhere", None);
    inv.logo = dir.path().join("missing-logo.png");
    assert!(matches!(inv.validate(), Err(ConfigError::MissingLogo(_))));
}

#[test]
fn test_anchor_checked_before_input() {
    let dir = workspace();
    let err = invocation(&dir, "missing.jpg", "nowhere", None)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAnchor(_)));
}

#[test]
fn test_dot_relative_directory_is_batch() {
    let dir = workspace();
    std::fs::create_dir(dir.path().join("photos.v2")).unwrap();
    let job = invocation(&dir, "photos.v2", "center", None)
        .validate()
        .unwrap();
    assert_eq!(job.mode, Mode::Batch);
}

#[test]
fn test_file_without_extension_is_single() {
    let dir = workspace();
    std::fs::write(dir.path().join("snapshot"), b"").unwrap();
    let job = invocation(&dir, "snapshot", "center", None)
        .validate()
        .unwrap();
    assert_eq!(job.mode, Mode::Single);
}

#[test]
fn test_ratio_needs_separator() {
    let dir = workspace();
    let err = invocation(&dir, "images", "center", Some("5-2"))
        .validate()
        .unwrap_err();
    assert_eq!(err, ConfigError::MalformedRatio("5-2".to_string()));
    assert_eq!(
        err.to_string(),
        "Ratio '5-2' must be in format 'image:watermark' (e.g., '5:2', '4:1')"
    );
}

#[test]
fn test_rejected_invocation_creates_nothing() {
    let dir = workspace();
    let _ = invocation(&dir, "images", "center", Some("52")).validate();
    assert!(!dir.path().join("output").exists());
}
