//! Integration tests for the rendering API
//!
//! These tests render the built-in figure through the public API and inspect
//! the resulting SVG.

use std::fs;

use tempfile::tempdir;

use blockwire::{
    BlockwireError, Renderer,
    canvas::Canvas,
    config::AppConfig,
    draw::BendOrder,
    geometry::{Point, Size},
    scene::{SceneBuilder, Styles},
};

fn layer_order(svg: &str) -> Vec<u8> {
    svg.match_indices("data-layer=\"z-")
        .map(|(index, marker)| {
            let rest = &svg[index + marker.len()..];
            let end = rest.find('"').expect("layer attribute is closed");
            rest[..end].parse().expect("layer priority is numeric")
        })
        .collect()
}

#[test]
fn test_render_builtin_figure() {
    let figure = blockwire::render().expect("Failed to render");
    let svg = figure.to_svg_string();

    assert!(svg.starts_with("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");

    assert_eq!(
        svg.matches("<rect").count(),
        9,
        "white background plus one frame per block"
    );
    assert_eq!(svg.matches("<ellipse").count(), 12, "six sum nodes and six dots");
    assert_eq!(svg.matches("marker-end=").count(), 22);

    assert!(svg.contains(">Nitroprusside<"));
    assert!(svg.contains(">Dopamine<"));
    assert!(svg.contains(">MAP<"));
    assert!(svg.contains(">CO<"));
    assert!(!svg.contains('$'), "math markup must not leak into the output");
}

#[test]
fn test_figure_summary() {
    let summary = blockwire::render().expect("Failed to render").summary();
    assert_eq!(summary.blocks, 8);
    assert_eq!(summary.sum_nodes, 6);
    assert_eq!(summary.dots, 6);
    assert_eq!(summary.labels, 20);
    assert_eq!(summary.connectors, 22);
    assert_eq!(summary.arrows, 22);
}

#[test]
fn test_layers_in_ascending_priority() {
    let svg = blockwire::render().expect("Failed to render").to_svg_string();
    assert_eq!(layer_order(&svg), vec![1, 2, 3, 5, 10]);
}

#[test]
fn test_render_twice_is_identical() {
    let renderer = Renderer::default();
    let scene = renderer.decoupled_control().expect("Failed to build scene");

    let first = renderer.render(&scene).expect("Failed to render");
    let second = renderer.render(&scene).expect("Failed to render");
    assert_eq!(first.to_svg_string(), second.to_svg_string());
}

#[test]
fn test_figure_size_follows_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [canvas]
        dpi = 50.0
        margin = 0.0

        [style]
        background_color = "lightgray"
        "#,
    )
    .expect("Config should parse");
    let renderer = Renderer::new(config);
    let scene = renderer.decoupled_control().expect("Failed to build scene");
    let figure = renderer.render(&scene).expect("Failed to render");

    assert_eq!(figure.size(), Size::new(800.0, 500.0));

    let svg = figure.to_svg_string();
    assert!(svg.contains("viewBox=\"0 0 800 500\""));
    // Background plus eight block frames
    assert_eq!(svg.matches("<rect").count(), 9);
}

#[test]
fn test_custom_scene() {
    let canvas = Canvas::new((0.0, 10.0), (0.0, 5.0), Size::new(5.0, 2.5)).unwrap();
    let mut builder = SceneBuilder::new(canvas, Styles::default());

    let input = builder.sum("R", Point::new(1.0, 2.5)).unwrap();
    let output = builder.block("P", Point::new(4.0, 2.0), "$P$").unwrap();
    builder
        .arrow(Point::new(input.x() + 0.2, input.y()), Point::new(4.0, 2.5))
        .unwrap();
    builder
        .ortho_arrow(output, Point::new(9.0, 1.0), BendOrder::HorizontalFirst)
        .unwrap();
    let scene = builder.build();

    let figure = Renderer::default().render(&scene).expect("Failed to render");
    let svg = figure.to_svg_string();
    // Background and the block frame
    assert_eq!(svg.matches("<rect").count(), 2);
    assert_eq!(svg.matches("<ellipse").count(), 1);
    assert_eq!(svg.matches("marker-end=").count(), 2);
}

#[test]
fn test_save_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("decoupled.svg");

    let figure = blockwire::render().expect("Failed to render");
    figure.save(&path).expect("Failed to save");

    let written = fs::read_to_string(&path).expect("Output should exist");
    assert_eq!(written, figure.to_svg_string());
}

#[cfg(feature = "png")]
#[test]
fn test_save_png() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("decoupled.png");

    blockwire::render()
        .expect("Failed to render")
        .save_with_scale(&path, 0.5)
        .expect("Failed to save");

    let bytes = fs::read(&path).expect("Output should exist");
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_save_rejects_unknown_extension() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("decoupled.pdf");

    let result = blockwire::render().expect("Failed to render").save(&path);
    assert!(matches!(result, Err(BlockwireError::Export(_))));
    assert!(!path.exists());
}
