use super::*;

#[test]
fn fps_rejects_zero() {
    let err = Fps::new(0).unwrap_err();
    assert_eq!(err.kind(), "input");
    assert_eq!(Fps::new(24).unwrap().get(), 24);
}

#[test]
fn fps_duration_is_frames_over_rate() {
    let fps = Fps::new(4).unwrap();
    assert_eq!(fps.duration_secs(2), 0.5);
    assert_eq!(fps.duration_secs(0), 0.0);
}

#[test]
fn fps_deserializes_through_validation() {
    let fps: Fps = serde_json::from_str("30").unwrap();
    assert_eq!(fps.get(), 30);
    assert!(serde_json::from_str::<Fps>("0").is_err());
}

#[test]
fn sequence_index_is_one_based() {
    assert_eq!(SequenceIndex::from_position(0).unwrap(), SequenceIndex::FIRST);
    assert_eq!(SequenceIndex::from_position(11).unwrap().get(), 12);
    assert!(SequenceIndex::new(0).is_err());
}

#[test]
fn sequence_index_displays_zero_padded() {
    assert_eq!(SequenceIndex::new(7).unwrap().to_string(), "007");
    assert_eq!(SequenceIndex::new(1234).unwrap().to_string(), "1234");
}

#[test]
fn canvas_validation() {
    assert!(Canvas::default().validate().is_ok());
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 11,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 70_000,
            height: 10
        }
        .validate()
        .is_err()
    );
}

#[test]
fn sequence_index_serializes_as_plain_number() {
    let idx = SequenceIndex::new(3).unwrap();
    assert_eq!(serde_json::to_string(&idx).unwrap(), "3");
}
