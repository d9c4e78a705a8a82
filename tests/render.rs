use std::path::PathBuf;

use image::GenericImageView;

use lumen::{bitmap::Bitmap, loader, variant::Variant};

const EMITTER_SCENE: &str = r#"{
    "settings": {"width": 24, "height": 16, "max_depth": 4},
    "sampler": {"type": "random", "spp": 4},
    "camera": {
        "type": "perspective",
        "eye": [0, 0, 0],
        "forward": [0, 0, -1],
        "up": [0, 1, 0],
        "fov": 90
    },
    "materials": [
        {
            "name": "emitter",
            "type": "lambert",
            "albedo": [0, 0, 0],
            "emission": [0.5, 0.5, 0.5]
        }
    ],
    "objects": [
        {
            "type": "quad",
            "corner": [-100, -100, -1],
            "edge_u": [200, 0, 0],
            "edge_v": [0, 200, 0],
            "material": "emitter"
        }
    ]
}"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lumen-render-test-{}-{}", std::process::id(), name))
}

fn write_scene(name: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, EMITTER_SCENE).unwrap();
    path
}

fn render_to(scene_path: &PathBuf, output: &PathBuf) {
    let (scene, renderer) = loader::load(scene_path).unwrap();
    let film = renderer.render(&scene, Variant::select());
    let bitmap = Bitmap::from_film(&film);
    bitmap.write(output).unwrap();
}

#[test]
fn end_to_end_produces_valid_rgba8_png() {
    let scene_path = write_scene("e2e.json");
    let output = temp_path("e2e.png");

    render_to(&scene_path, &output);

    let written = image::open(&output).unwrap();
    assert_eq!(written.dimensions(), (24, 16));
    assert_eq!(written.color(), image::ColorType::Rgba8);

    std::fs::remove_file(scene_path).ok();
    std::fs::remove_file(output).ok();
}

#[test]
fn uniform_emitter_pixels_match_srgb_encoding() {
    let scene_path = write_scene("gamma.json");
    let (scene, renderer) = loader::load(&scene_path).unwrap();
    let film = renderer.render(&scene, Variant::select());
    let bitmap = Bitmap::from_film(&film);

    // Linear 0.5 through the sRGB transfer function is ~0.7354, i.e. 188.
    let expected = (lumen::bitmap::linear_to_srgb(0.5) * 255.0 + 0.5) as u8;
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let [r, g, b, a] = bitmap.pixel(x, y);
            assert!((i32::from(r) - i32::from(expected)).abs() <= 1);
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(a, 255);
        }
    }

    std::fs::remove_file(scene_path).ok();
}

#[test]
fn rerunning_overwrites_with_identical_output() {
    let scene_path = write_scene("overwrite.json");
    let output = temp_path("overwrite.png");

    render_to(&scene_path, &output);
    let first = std::fs::read(&output).unwrap();
    render_to(&scene_path, &output);
    let second = std::fs::read(&output).unwrap();
    assert_eq!(first, second);

    std::fs::remove_file(scene_path).ok();
    std::fs::remove_file(output).ok();
}

#[test]
fn missing_scene_file_fails_before_any_output() {
    let output = temp_path("never-written.png");
    let missing = temp_path("missing.json");

    assert!(loader::load(&missing).is_err());
    assert!(!output.exists());
}

#[test]
fn binary_without_arguments_exits_non_zero_and_writes_nothing() {
    let work_dir = temp_path("no-args-dir");
    std::fs::create_dir_all(&work_dir).unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_lumen"))
        .current_dir(&work_dir)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!work_dir.join("output.png").exists());

    std::fs::remove_dir_all(work_dir).ok();
}

#[test]
fn binary_writes_output_png_in_working_directory() {
    let work_dir = temp_path("bin-run-dir");
    std::fs::create_dir_all(&work_dir).unwrap();
    let scene_path = work_dir.join("scene.json");
    std::fs::write(&scene_path, EMITTER_SCENE).unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_lumen"))
        .arg(&scene_path)
        .current_dir(&work_dir)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using variant: "));
    assert!(stdout.contains("Bitmap[24x16, rgba, uint8, srgb]"));

    let written = image::open(work_dir.join("output.png")).unwrap();
    assert_eq!(written.dimensions(), (24, 16));

    std::fs::remove_dir_all(work_dir).ok();
}

#[test]
fn selected_variant_is_reported_available() {
    let selected = Variant::select();
    assert!(lumen::variant::variants().contains(&selected));
}
