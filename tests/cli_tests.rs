use std::fs;
use std::process::{Command, Output};

use pwa_icons::config::GeneratorConfig;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-pwa-icons"))
        .args(args)
        .output()
        .expect("Failed to run generate-pwa-icons")
}

#[test]
fn test_output_dir_flag_generates_icons_and_banner() {
    let root = tempfile::tempdir().unwrap();
    let output_dir = root.path().join("public").join("icons");

    let output = run(&["--output-dir", output_dir.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let count = fs::read_dir(&output_dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .map(|e| e.path().extension().is_some_and(|ext| ext == "png"))
                .unwrap_or(false)
        })
        .count();
    assert_eq!(count, 12);

    for name in ["icon-72x72.png", "icon-512x512.png", "shortcut-progress.png"] {
        assert!(output_dir.join(name).is_file(), "missing {}", name);
        assert!(stdout.contains(&format!("✓ Generated icon: {}", name)), "{}", stdout);
    }
    assert!(stdout.contains("✅ All 12 icons generated"), "{}", stdout);
    assert!(stdout.contains(&output_dir.display().to_string()), "{}", stdout);
}

#[test]
fn test_config_file_is_applied() {
    let root = tempfile::tempdir().unwrap();
    let output_dir = root.path().join("from-config");
    let config_path = root.path().join("icons.yaml");
    fs::write(
        &config_path,
        format!("output_dir: {}\nbackground: [1, 2, 3]\nfonts: []\n", output_dir.display()),
    )
    .unwrap();

    let output = run(&["--config", config_path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let img = image::open(output_dir.join("icon-96x96.png")).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);

    // only the built-in font was available
    assert!(String::from_utf8_lossy(&output.stderr).contains("built-in bitmap font"));
}

#[test]
fn test_invalid_config_fails() {
    let root = tempfile::tempdir().unwrap();
    let config_path = root.path().join("bad.yaml");
    fs::write(&config_path, "font_size_ratio: 3\n").unwrap();

    let output = run(&["--config", config_path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("font_size_ratio"));
}

#[test]
fn test_print_config_roundtrips() {
    let root = tempfile::tempdir().unwrap();
    let output_dir = root.path().join("printed");

    let output = run(&["--print-config", "--output-dir", output_dir.to_str().unwrap()]);
    assert!(output.status.success());

    let printed = GeneratorConfig::from_yaml(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(
        printed,
        GeneratorConfig {
            output_dir: output_dir.clone(),
            ..GeneratorConfig::default()
        }
    );
    // nothing is generated
    assert!(!output_dir.exists());
}
