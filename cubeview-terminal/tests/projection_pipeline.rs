use cubeview_terminal::{write_frames, OutputFormat, Scene, ViewerConfig};
use std::io::Write;

#[test]
fn test_config_file_to_json_frames() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
frames = 3

[motion]
rotation = [0.0, 0.0, 0.25]
translation = [10.0, 0.0, 0.0]
"#
    )
    .unwrap();

    let config = ViewerConfig::from_file(file.path()).unwrap();
    let mut scene = Scene::from_config(&config);
    let frames = scene.run(config.frames);

    let mut buffer = Vec::new();
    write_frames(&mut buffer, &frames, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    let frames_json = value.as_array().unwrap();
    assert_eq!(frames_json.len(), 3);
    for (index, frame) in frames_json.iter().enumerate() {
        assert_eq!(frame["index"], index);
        assert_eq!(frame["segments"].as_array().unwrap().len(), 12);
    }

    // frame 0 is the untouched cube: vertex 0 at (3500, 500, 500)
    let start = &frames_json[0]["segments"][0]["start"];
    let offset = 500.0 * 1000.0 / 3500.0;
    assert!((start[0].as_f64().unwrap() - (450.0 + offset)).abs() < 1e-9);
    assert!((start[1].as_f64().unwrap() - (300.0 + offset)).abs() < 1e-9);

    // three steps were taken, each moving the cube 10 along x
    assert!((scene.cuboid().center().x() - 3030.0).abs() < 1e-9);
}

#[test]
fn test_cube_straddling_camera_plane_skips_segments() {
    let mut config = ViewerConfig::default();
    config.cuboid.center = [500.0, 0.0, 0.0];
    config.motion.rotation = [0.0, 0.0, 0.0];

    let mut scene = Scene::from_config(&config);
    let frames = scene.run(1);
    assert_eq!(frames[0].drawable_count(), 4);

    let mut buffer = Vec::new();
    write_frames(&mut buffer, &frames, OutputFormat::Text).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("4/12 segments drawable"));
    assert_eq!(text.matches("skipped").count(), 8);
}
