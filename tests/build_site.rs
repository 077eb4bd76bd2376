//! End-to-end pipeline tests — drive the real binary against the content
//! fixtures and inspect the generated site.

use chrono::Datelike;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_simple-folio")
}

fn fixture_content() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

/// Run a subcommand with source/output/temp dirs, returning its output.
fn run(source: &Path, output_dir: &Path, temp_dir: &Path, command: &str) -> Output {
    Command::new(bin())
        .args([
            command,
            "--source",
            source.to_str().unwrap(),
            "--output",
            output_dir.to_str().unwrap(),
            "--temp-dir",
            temp_dir.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run simple-folio")
}

fn build_fixture_site() -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let output_dir = tmp.path().join("dist");
    let out = run(
        &fixture_content(),
        &output_dir,
        &tmp.path().join("temp"),
        "build",
    );
    assert!(
        out.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let html = std::fs::read_to_string(output_dir.join("index.html")).unwrap();
    (tmp, html)
}

#[test]
fn build_produces_complete_page() {
    let (_tmp, html) = build_fixture_site();

    assert!(html.contains("<title>Ari Vale — Portfolio</title>"));
    assert!(html.contains("I cut <strong>fast</strong> promos"));

    // Two resolvable videos get embed targets; the third card is inert but
    // still present with its Play affordance. (Attribute forms, so the
    // embedded stylesheet/script text can't match.)
    assert_eq!(html.matches("data-embed=\"").count(), 2);
    assert_eq!(html.matches("class=\"play-btn\"").count(), 3);
    assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ?playsinline=1"));
    assert!(html.contains("https://player.vimeo.com/video/76979871?dnt=1"));

    // Socials: behance has no URL in the fixture, so no element exists.
    assert!(html.contains("link-instagram"));
    assert!(!html.contains("link-behance"));

    // Sparse config override reached the stylesheet.
    assert!(html.contains("--color-accent: #0a66ff"));

    // Footer year is computed at generate time.
    let year = chrono::Local::now().year().to_string();
    assert!(html.contains(&format!("<span id=\"year\">{year}</span>")));
}

#[test]
fn build_copies_assets_to_output() {
    let (tmp, _html) = build_fixture_site();

    for asset in ["avatar.svg", "poster-01.svg", "logo-two.svg"] {
        assert!(
            tmp.path().join("dist/assets").join(asset).exists(),
            "missing copied asset {asset}"
        );
    }
}

#[test]
fn building_twice_is_identical() {
    let tmp = TempDir::new().unwrap();
    let output_dir = tmp.path().join("dist");
    let temp_dir = tmp.path().join("temp");

    assert!(run(&fixture_content(), &output_dir, &temp_dir, "build").status.success());
    let first = std::fs::read_to_string(output_dir.join("index.html")).unwrap();

    assert!(run(&fixture_content(), &output_dir, &temp_dir, "build").status.success());
    let second = std::fs::read_to_string(output_dir.join("index.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_content_builds_fallback_page() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("empty-content");
    std::fs::create_dir_all(&source).unwrap();
    let output_dir = tmp.path().join("dist");

    let out = run(&source, &output_dir, &tmp.path().join("temp"), "build");
    assert!(out.status.success(), "fallback build must not fail");
    assert!(String::from_utf8_lossy(&out.stderr).contains("warning"));

    let html = std::fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(html.contains("Unable to load content.json"));
    assert!(html.contains("Your Name"));
    assert!(!html.contains(r#"id="video-grid""#));
    assert!(!html.contains(r#"id="graphics-grid""#));
    assert!(!html.contains(r#"id="brands-grid""#));
}

#[test]
fn load_writes_resolved_manifest() {
    let tmp = TempDir::new().unwrap();
    let temp_dir = tmp.path().join("temp");

    let out = run(&fixture_content(), &tmp.path().join("dist"), &temp_dir, "load");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Brand: Ari Vale"));
    assert!(stdout.contains("001 promo (youtube)"));
    assert!(stdout.contains("003 offline (unsupported)"));

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.join("resolved.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["site"]["brand"], "Ari Vale");
    assert_eq!(manifest["site"]["videos"][2].get("embed"), None);
}

#[test]
fn check_accepts_fixture_content() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        &fixture_content(),
        &tmp.path().join("dist"),
        &tmp.path().join("temp"),
        "check",
    );

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("==> Content is valid"));
    assert!(stdout.contains("warning: video 3 has no playable URL"));
}

#[test]
fn check_fails_on_missing_content() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("empty-content");
    std::fs::create_dir_all(&source).unwrap();

    let out = run(&source, &tmp.path().join("dist"), &tmp.path().join("temp"), "check");
    assert!(!out.status.success());
}

#[test]
fn embed_subcommand_resolves_and_rejects() {
    let out = Command::new(bin())
        .args(["embed", "https://youtu.be/dQw4w9WgXcQ"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(
        String::from_utf8_lossy(&out.stdout).contains("youtube.com/embed/dQw4w9WgXcQ")
    );

    let out = Command::new(bin())
        .args(["embed", "https://example.com/not-a-video"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn gen_config_prints_parseable_toml() {
    let out = Command::new(bin()).arg("gen-config").output().unwrap();
    assert!(out.status.success());

    let text = String::from_utf8(out.stdout).unwrap();
    let parsed: Result<toml::Value, _> = toml::from_str(&text);
    assert!(parsed.is_ok());
    assert!(text.contains("[taglines]"));
}
