use super::*;

#[test]
fn twelve_slides_are_zero_padded_and_increasing() {
    let names: Vec<String> = (0..12)
        .map(|p| frame_file_name(SequenceIndex::from_position(p).unwrap()))
        .collect();
    assert_eq!(names.first().unwrap(), "slide_001.png");
    assert_eq!(names.last().unwrap(), "slide_012.png");
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn frame_path_joins_dir() {
    let p = frame_path(Path::new("out"), SequenceIndex::new(3).unwrap());
    assert_eq!(p, Path::new("out").join("slide_003.png"));
}

#[test]
fn ordered_paths_follow_sequence_not_completion() {
    let frame = |i: u32| RenderedFrame {
        sequence_index: SequenceIndex::new(i).unwrap(),
        image_path: PathBuf::from(format!("f{i}.png")),
    };
    let paths = ordered_image_paths(&[frame(3), frame(1), frame(2)]);
    assert_eq!(
        paths,
        vec![
            PathBuf::from("f1.png"),
            PathBuf::from("f2.png"),
            PathBuf::from("f3.png")
        ]
    );
}
