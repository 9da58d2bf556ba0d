//! Tests for the fixed configuration and its invariants.

mod common;

use timeline_placeholders::OUTPUT_SUBDIR;

use common::*;

#[test]
fn test_defaults_are_valid() -> anyhow::Result<()> {
    let config = GeneratorConfig::new("/srv/site");

    config.validate()?;
    assert_eq!((config.width, config.height), (400, 300));
    assert_eq!(config.quality, 85);
    assert_eq!(config.shadow_offset, (2, 2));
    assert!(config.output_dir.ends_with(OUTPUT_SUBDIR));
    assert!(config.output_dir.starts_with("/srv/site"));

    Ok(())
}

#[test]
fn test_default_steps() {
    let steps = default_steps();
    assert_eq!(steps.len(), 5);

    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.number, (i + 1).to_string());
        assert_eq!(step.filename, format!("timeline-step-{}.jpg", i + 1));
        assert!(!step.title.is_empty());
    }
    assert_eq!(steps[0].stem(), "timeline-step-1");
}

#[test]
fn test_title_lines_split_on_newline() {
    let step = StepSpec::new("1", "Initial\nConsultation", "x.jpg");
    assert_eq!(step.title_lines(), vec!["Initial", "Consultation"]);

    let single = StepSpec::new("1", "Consultation", "x.jpg");
    assert_eq!(single.title_lines().len(), 1);
}

#[test]
fn test_rejects_duplicate_filenames() {
    let config = GeneratorConfig::new(".").with_steps(vec![
        StepSpec::new("1", "One", "same.jpg"),
        StepSpec::new("2", "Two", "same.jpg"),
    ]);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Duplicate"));
}

#[test]
fn test_rejects_empty_fields() {
    for step in [
        StepSpec::new("", "Title", "a.jpg"),
        StepSpec::new("1", "", "a.jpg"),
        StepSpec::new("1", "Title", ""),
    ] {
        let config = GeneratorConfig::new(".").with_steps(vec![step.clone()]);
        assert!(config.validate().is_err(), "accepted {:?}", step);
    }
}

#[test]
fn test_rejects_bad_canvas_and_quality() {
    let mut config = GeneratorConfig::new(".");
    config.width = 0;
    assert!(config.validate().is_err());

    let mut config = GeneratorConfig::new(".");
    config.height = 70_000;
    assert!(config.validate().is_err());

    let mut config = GeneratorConfig::new(".");
    config.quality = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_locate_with_missing_override_fails() {
    let result = Face::locate(Some(std::path::Path::new("/nonexistent/font.ttf")));
    assert!(result.is_err());
}

#[test]
fn test_locate_without_override_always_succeeds() -> anyhow::Result<()> {
    let face = Face::locate(None)?;
    assert!(face.line_height(24.0) > 0);
    Ok(())
}
