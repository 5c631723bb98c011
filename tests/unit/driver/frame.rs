use super::*;

#[test]
fn endpoints_map_to_first_and_last_frames() {
    assert_eq!(frame_for_progress(0.0, 300), FrameIndex(0));
    assert_eq!(frame_for_progress(1.0, 300), FrameIndex(299));
}

#[test]
fn interior_progress_truncates_down() {
    // 0.5 * 299 = 149.5
    assert_eq!(frame_for_progress(0.5, 300), FrameIndex(149));
    // The last frame is exclusive to full progress.
    assert_eq!(frame_for_progress(0.999, 300), FrameIndex(298));
}

#[test]
fn out_of_range_progress_saturates() {
    assert_eq!(frame_for_progress(-0.25, 300), FrameIndex(0));
    assert_eq!(frame_for_progress(4.0, 300), FrameIndex(299));
    assert_eq!(frame_for_progress(f64::NAN, 300), FrameIndex(0));
}

#[test]
fn single_frame_and_empty_players_pin_frame_zero() {
    assert_eq!(frame_for_progress(0.7, 1), FrameIndex(0));
    assert_eq!(frame_for_progress(0.7, 0), FrameIndex(0));
}
