use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn explicit_offset_converts_seconds_to_pixels() {
    let scale = TimelineScale::new(300.0, 50.0);
    let step = Step::timed("a moment", 1.2);
    // 1.2 s * 30 frames/s * 50 px/frame
    assert!(close(scale.blurb_offset_px(3, &step, 6), 1800.0));
}

#[test]
fn untimed_steps_spread_over_the_full_extent() {
    let scale = TimelineScale::new(300.0, 50.0);
    let step = Step::untimed("quiet");
    // (index + 0.5) * 15000 / 6
    assert!(close(scale.blurb_offset_px(1, &step, 6), 3750.0));
    assert!(close(scale.blurb_offset_px(5, &step, 6), 13750.0));
}

#[test]
fn first_untimed_step_is_pulled_halfway_up() {
    let scale = TimelineScale::new(300.0, 50.0);
    let step = Step::untimed("opening");
    assert!(close(scale.blurb_offset_px(0, &step, 6), 625.0));
}

#[test]
fn trigger_extent_is_at_least_three_viewports() {
    let long = TimelineScale::new(300.0, 50.0);
    assert!(close(long.trigger_extent_px(900.0), 15000.0));

    let short = TimelineScale::new(10.0, 20.0);
    assert!(close(short.trigger_extent_px(900.0), 2700.0));
}

#[test]
fn settle_extent_lands_one_viewport_past_the_last_blurb() {
    let scale = TimelineScale::new(300.0, 50.0);
    let narrative = Narrative::sample();
    // Last sample step sits at 3.4 s, so 3.4 * 30 * 50 + 900.
    let settled = scale.settle_extent_px(&narrative, 900.0).unwrap();
    assert!(close(settled, 6000.0));
}

#[test]
fn empty_narrative_has_no_settle_extent() {
    let scale = TimelineScale::new(300.0, 50.0);
    assert!(scale.settle_extent_px(&Narrative::new(vec![]), 900.0).is_none());
}

#[test]
fn resolved_offsets_follow_step_order() {
    let scale = TimelineScale::new(300.0, 50.0);
    let narrative = Narrative::new(vec![
        Step::timed("start", 0.0),
        Step::untimed("middle"),
        Step::timed("end", 2.0),
    ]);
    let offsets = scale.resolve_offsets(&narrative);
    assert_eq!(offsets.len(), 3);
    assert!(close(offsets[0], 0.0));
    assert!(close(offsets[1], 7500.0));
    assert!(close(offsets[2], 3000.0));
}
