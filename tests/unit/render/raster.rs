use std::path::PathBuf;

use super::*;

fn bitmap_rasterizer() -> SlideRasterizer {
    SlideRasterizer::new(SlideStyle::default(), &ResolvedFonts::bitmap_only()).unwrap()
}

fn record(title: &str, body: &[&str]) -> SlideRecord {
    SlideRecord::new(title, body.iter().map(|s| s.to_string()).collect())
}

#[test]
fn layout_stacks_title_then_paragraphs() {
    let style = SlideStyle::default();
    let lines = layout_slide(&record("Intro", &["Hello world", "Bye"]), &style);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].weight, Weight::Title);
    assert_eq!(lines[0].top, 80.0);
    // title pitch 72 + title gap 40
    assert_eq!(lines[1].top, 192.0);
    // body pitch 52 + paragraph gap 20
    assert_eq!(lines[2].top, 264.0);
    assert!(lines.iter().all(|l| l.x == 100.0));
}

#[test]
fn layout_without_title_starts_body_at_top_margin() {
    let lines = layout_slide(&record("", &["only body"]), &SlideStyle::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].weight, Weight::Body);
    assert_eq!(lines[0].top, 80.0);
}

#[test]
fn layout_wraps_each_paragraph_independently() {
    let style = SlideStyle::default();
    let long = "word ".repeat(30);
    let lines = layout_slide(&record("T", &[long.trim(), "short"]), &style);
    let body: Vec<&PlacedLine> = lines.iter().filter(|l| l.weight == Weight::Body).collect();
    assert!(body.len() > 2);
    assert_eq!(body.last().unwrap().text, "short");
    assert!(
        body.iter()
            .all(|l| l.text.chars().count() <= style.body.wrap_chars)
    );
}

#[test]
fn layout_clips_lines_below_canvas() {
    let style = SlideStyle::default();
    let many: Vec<String> = (0..40).map(|i| format!("line {i}")).collect();
    let r = SlideRecord::new("T", many);
    let lines = layout_slide(&r, &style);
    assert!(lines.len() < 41);
    assert!(
        lines
            .iter()
            .all(|l| l.top < f64::from(style.canvas.height))
    );
}

#[test]
fn blank_record_is_a_render_error() {
    let mut r = bitmap_rasterizer();
    let err = r.rasterize(&record(" ", &[])).unwrap_err();
    assert_eq!(err.kind(), "render");
}

#[test]
fn rasterize_fills_canvas_with_background_and_text() {
    let mut r = bitmap_rasterizer();
    let rgb = r.rasterize(&record("Intro", &["Hello world"])).unwrap();
    assert_eq!(rgb.len(), 1280 * 720 * 3);
    assert_eq!(&rgb[..3], &[30, 30, 30]);
    let lit = rgb.chunks_exact(3).filter(|px| px[0] > 150).count();
    assert!(lit > 0, "expected some text pixels");
}

#[test]
fn rasterize_is_deterministic() {
    let mut a = bitmap_rasterizer();
    let mut b = bitmap_rasterizer();
    let rec = record("Intro", &["Hello world", "second paragraph"]);
    let first = a.rasterize(&rec).unwrap();
    assert_eq!(first, a.rasterize(&rec).unwrap());
    assert_eq!(first, b.rasterize(&rec).unwrap());
}

#[test]
fn render_writes_png_and_creates_parent_dirs() {
    let dir = PathBuf::from("target").join("unit_raster").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("slide_001.png");

    let mut r = bitmap_rasterizer();
    let frame = r
        .render(record("Intro", &["Hello"]), SequenceIndex::FIRST, &out)
        .unwrap();
    assert_eq!(frame.image_path, out);
    assert_eq!(frame.sequence_index, SequenceIndex::FIRST);

    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (1280, 720));
}

#[test]
fn render_to_unwritable_path_is_a_render_error() {
    let dir = PathBuf::from("target").join("unit_raster_blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let mut r = bitmap_rasterizer();
    let err = r
        .render(
            record("T", &[]),
            SequenceIndex::FIRST,
            &blocker.join("slide_001.png"),
        )
        .unwrap_err();
    assert_eq!(err.kind(), "render");
}

#[test]
fn invalid_style_is_rejected() {
    let style = SlideStyle {
        canvas: crate::foundation::core::Canvas {
            width: 1281,
            height: 720,
        },
        ..SlideStyle::default()
    };
    assert!(SlideRasterizer::new(style, &ResolvedFonts::bitmap_only()).is_err());
}
