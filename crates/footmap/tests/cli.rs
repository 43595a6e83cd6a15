use std::path::Path;

use assert_cmd::Command;
use footmap::analysis::FeetStats;
use footmap::{FootStats, HeatmapParams};
use image::{Rgba, RgbaImage};
use predicates::prelude::*;

/// White sheet with a dark gridded contact patch, like a scanned footprint.
fn write_sheet(path: &Path, patch: (u32, u32, u32, u32)) {
    let (x0, x1, y0, y1) = patch;
    let img = RgbaImage::from_fn(120, 140, |x, y| {
        let inside = (x0..x1).contains(&x) && (y0..y1).contains(&y);
        let v = match (inside, x % 8 == 0 || y % 8 == 0) {
            (false, _) => 255,
            (true, true) => 25,
            (true, false) => 120,
        };
        Rgba([v, v, v, 255])
    });
    img.save(path).expect("save sheet");
}

fn footmap() -> Command {
    Command::cargo_bin("footmap").expect("footmap binary")
}

#[test]
fn default_config_prints_params_json() {
    let out = footmap().arg("default-config").assert().success();
    let text = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");
    let params: HeatmapParams = serde_json::from_str(&text).expect("params json");
    assert_eq!(params, HeatmapParams::default());
}

#[test]
fn analyze_writes_heatmap_and_stats() {
    let dir = tempfile::tempdir().expect("dir");
    let input = dir.path().join("sheet.png");
    let output = dir.path().join("heatmap.png");
    let stats = dir.path().join("stats.json");
    write_sheet(&input, (30, 90, 30, 110));

    let run = footmap()
        .arg("analyze")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--stats")
        .arg(&stats)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"average \d+\.\d{2},").expect("regex"));
    let stdout = String::from_utf8(run.get_output().stdout.clone()).expect("utf8");

    let heatmap = image::open(&output).expect("heatmap").to_rgba8();
    assert_eq!(heatmap.dimensions(), (120, 140));
    assert!(heatmap.pixels().any(|p| p.0 != [255, 255, 255, 255]));

    let text = std::fs::read_to_string(&stats).expect("stats file");
    let parsed: FootStats = serde_json::from_str(&text).expect("stats json");
    assert!(parsed.total_area > 0);
    assert!(parsed.max_pressure >= parsed.average_pressure);

    // Only the average is rounded on stdout; max is printed as is.
    let line = format!(
        "average {:.2}, max {}, area {}",
        parsed.average_pressure, parsed.max_pressure, parsed.total_area
    );
    assert!(stdout.contains(&line), "{stdout}");
}

#[test]
fn feet_writes_both_maps_and_stats() {
    let dir = tempfile::tempdir().expect("dir");
    let left = dir.path().join("left.png");
    let right = dir.path().join("right.png");
    let out = dir.path().join("out");
    write_sheet(&left, (20, 70, 20, 120));
    write_sheet(&right, (50, 100, 20, 120));

    footmap()
        .args(["feet", "--left"])
        .arg(&left)
        .arg("--right")
        .arg(&right)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("left: average"))
        .stdout(predicate::str::contains("right: average"));

    assert!(out.join("left-foot-pressure-map.png").is_file());
    assert!(out.join("right-foot-pressure-map.png").is_file());
    let text = std::fs::read_to_string(out.join("stats.json")).expect("stats");
    let stats: FeetStats = serde_json::from_str(&text).expect("stats json");
    assert!(stats.left.total_area > 0);
    assert!(stats.right.total_area > 0);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("dir");
    let input = dir.path().join("blank.png");
    let config = dir.path().join("params.json");
    RgbaImage::from_pixel(32, 32, Rgba([255, 255, 255, 255]))
        .save(&input)
        .expect("save");
    std::fs::write(&config, r#"{ "grid_size": 4, "cluster_radius": 6 }"#).expect("config");

    footmap()
        .arg("analyze")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("average 0.00, max 0, area 0"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().expect("dir");
    let input = dir.path().join("blank.png");
    let config = dir.path().join("params.json");
    RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]))
        .save(&input)
        .expect("save");
    std::fs::write(&config, r#"{ "percentile_high": 150.0 }"#).expect("config");

    footmap()
        .arg("analyze")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("percentile_high"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().expect("dir");
    footmap()
        .arg("analyze")
        .arg(dir.path().join("absent.png"))
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}
