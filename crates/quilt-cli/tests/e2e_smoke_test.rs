use std::{fs, path::Path};

use tempfile::tempdir;

use quilt_cli::Args;

fn write_config(dir: &Path, resource_dir: &Path) -> String {
    let config_path = dir.join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[paths]\nresource_dir = {:?}\n",
            resource_dir.to_string_lossy()
        ),
    )
    .expect("Failed to write config");
    config_path.to_string_lossy().to_string()
}

#[test]
fn e2e_smoke_test_valid_layouts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let layouts = temp_dir.path().join("layouts");
    fs::create_dir_all(&layouts).expect("Failed to create layouts dir");

    fs::write(
        layouts.join("home.json"),
        r##"{
            "type": "VStack",
            "padding": 16,
            "children": [
                {"type": "Text", "id": "title", "text": "Hello World", "textColor": "#000000"},
                {"type": "Button", "id": "save", "text": "Save", "onClick": "@{save()}"}
            ]
        }"##,
    )
    .expect("Failed to write layout");
    fs::write(
        layouts.join("detail.json"),
        r#"{"type": "Text", "text": "Hello World"}"#,
    )
    .expect("Failed to write layout");

    let resource_dir = temp_dir.path().join("res");
    let config = write_config(temp_dir.path(), &resource_dir);

    let args = Args {
        inputs: vec![layouts.to_string_lossy().to_string()],
        config: Some(config),
        res_dir: None,
        log_level: "off".to_string(),
    };

    let report = quilt_cli::run(&args).expect("Batch run failed");
    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.skipped, 0);
    assert!(report.is_success());

    let home = fs::read_to_string(resource_dir.join("layout/home.xml"))
        .expect("home.xml missing");
    assert!(home.contains("android:padding=\"16dp\""));
    assert!(home.contains("@string/home_hello_world"));

    // The interactive button gets a feedback drawable.
    assert!(home.contains("android:background=\"@drawable/bg_home_save\""));
    let ripple = fs::read_to_string(resource_dir.join("drawable/bg_home_save.xml"))
        .expect("drawable missing");
    assert!(ripple.contains("<ripple"));

    // The same literal in another file reuses its own prefix.
    let detail = fs::read_to_string(resource_dir.join("layout/detail.xml"))
        .expect("detail.xml missing");
    assert!(detail.contains("@string/detail_hello_world"));
}

#[test]
fn e2e_smoke_test_malformed_layout_is_skipped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let layouts = temp_dir.path().join("layouts");
    fs::create_dir_all(&layouts).expect("Failed to create layouts dir");

    fs::write(layouts.join("good.json"), r#"{"type": "Text", "text": "ok!"}"#)
        .expect("Failed to write layout");
    fs::write(layouts.join("broken.json"), "{not json").expect("Failed to write layout");

    let resource_dir = temp_dir.path().join("res");
    let config = write_config(temp_dir.path(), &resource_dir);

    let args = Args {
        inputs: vec![layouts.to_string_lossy().to_string()],
        config: Some(config),
        res_dir: None,
        log_level: "off".to_string(),
    };

    let report = quilt_cli::run(&args).expect("Batch run failed");
    assert_eq!(report.passed, 1);
    assert_eq!(report.skipped, 1);
    assert!(report.is_success());
    assert!(resource_dir.join("layout/good.xml").exists());
    assert!(!resource_dir.join("layout/broken.xml").exists());
}

#[test]
fn e2e_smoke_test_res_dir_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let layouts = temp_dir.path().join("layouts");
    fs::create_dir_all(&layouts).expect("Failed to create layouts dir");
    fs::write(layouts.join("home.json"), r#"{"type": "Text", "text": "Hi"}"#)
        .expect("Failed to write layout");

    let config = write_config(temp_dir.path(), &temp_dir.path().join("ignored"));
    let override_dir = temp_dir.path().join("override");

    let args = Args {
        inputs: vec![layouts.to_string_lossy().to_string()],
        config: Some(config),
        res_dir: Some(override_dir.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let report = quilt_cli::run(&args).expect("Batch run failed");
    assert_eq!(report.passed, 1);
    assert!(override_dir.join("layout/home.xml").exists());
    assert!(!temp_dir.path().join("ignored").exists());
}

#[test]
fn e2e_smoke_test_missing_config_fails() {
    let args = Args {
        inputs: vec!["home.json".to_string()],
        config: Some("/definitely/not/here.toml".to_string()),
        res_dir: None,
        log_level: "off".to_string(),
    };
    assert!(quilt_cli::run(&args).is_err());
}
