use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn progress_is_zero_before_the_trigger_enters_view() {
    let bounds = TriggerBounds::new(2000.0, 3000.0);
    assert!(close(scroll_progress(0.0, bounds, 900.0), 0.0));
    assert!(close(scroll_progress(1100.0, bounds, 900.0), 0.0));
}

#[test]
fn progress_starts_as_the_trigger_top_meets_the_viewport_bottom() {
    let bounds = TriggerBounds::new(2000.0, 3000.0);
    // Range runs from 1100 to 5000, so 3900 px of travel.
    assert!(close(scroll_progress(1100.0, bounds, 900.0), 0.0));
    assert!(close(scroll_progress(3050.0, bounds, 900.0), 0.5));
    assert!(close(scroll_progress(5000.0, bounds, 900.0), 1.0));
}

#[test]
fn progress_saturates_past_the_trigger() {
    let bounds = TriggerBounds::new(2000.0, 3000.0);
    assert!(close(scroll_progress(9999.0, bounds, 900.0), 1.0));
}

#[test]
fn trigger_at_the_document_top_starts_mid_story() {
    // With the trigger at 0 the range begins above the document, so an
    // unscrolled page already sits partway in.
    let bounds = TriggerBounds::new(0.0, 2700.0);
    let p = scroll_progress(0.0, bounds, 900.0);
    assert!(close(p, 900.0 / 3600.0));
}

#[test]
fn degenerate_trigger_reads_done_at_or_below_it() {
    let bounds = TriggerBounds::new(500.0, -900.0);
    assert!(close(scroll_progress(-500.0, bounds, 900.0), 0.0));
    assert!(close(scroll_progress(-400.0, bounds, 900.0), 1.0));
    assert!(close(scroll_progress(800.0, bounds, 900.0), 1.0));
}
