use super::*;
use crate::compiler::compile;

#[test]
fn palette_and_hex_colors() {
    assert_eq!(parse_color("red"), Some((255, 0, 0)));
    assert_eq!(parse_color("Gray"), Some((128, 128, 128)));
    assert_eq!(parse_color("#0110ab"), Some((1, 16, 171)));
    assert_eq!(parse_color("#FFFFFF"), Some((255, 255, 255)));
    assert_eq!(parse_color("#fff"), None);
    assert_eq!(parse_color("#gggggg"), None);
    assert_eq!(parse_color("teal"), None);
}

#[test]
fn renders_compiled_circle_on_canvas() {
    let compilation = compile("draw a circle at one hundred comma fifty radius 10 color blue").unwrap();
    let picture = render_command(&compilation.command).unwrap();

    assert_eq!((picture.xres, picture.yres), (800, 600));
    assert_eq!(picture.get(100, 50), Some((0, 0, 255)));
    assert_eq!(picture.get(200, 200), Some((255, 255, 255)));
}

#[test]
fn unknown_color_is_an_error() {
    let command = Command::Circle {
        center: crate::compiler::Point { x: 1.0, y: 1.0 },
        radius: 1.0,
        color: "teal".to_string(),
    };
    let err = render_command(&command).err().unwrap();
    assert!(matches!(err, RenderError::UnknownColor(ref color) if color == "teal"));
}

#[test]
fn preview_is_written_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.png");
    let path = path.to_str().unwrap();

    let compilation = compile("draw rectangle at (10, 10) width 20 height 20 color orange").unwrap();
    save_preview(&compilation.command, path).unwrap();

    let image = image::open(path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (800, 600));
    assert_eq!(image.get_pixel(15, 15).0, [255, 165, 0]);
    assert_eq!(image.get_pixel(50, 50).0, [255, 255, 255]);
}
