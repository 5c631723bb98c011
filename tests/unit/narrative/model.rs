use super::*;

#[test]
fn sample_narrative_has_six_timed_steps() {
    let n = Narrative::sample();
    assert_eq!(n.len(), 6);
    let offsets: Vec<f64> = n
        .steps
        .iter()
        .map(|s| s.effective_offset_seconds().unwrap())
        .collect();
    assert_eq!(offsets, vec![0.0, 1.2, 2.0, 2.3, 2.9, 3.4]);
}

#[test]
fn non_finite_offsets_read_as_absent() {
    assert_eq!(Step::timed("x", f64::NAN).effective_offset_seconds(), None);
    assert_eq!(
        Step::timed("x", f64::INFINITY).effective_offset_seconds(),
        None
    );
    assert_eq!(Step::untimed("x").effective_offset_seconds(), None);
    assert_eq!(Step::timed("x", 0.0).effective_offset_seconds(), Some(0.0));
}

#[test]
fn json_without_offset_deserializes_as_untimed() {
    let n = Narrative::from_reader(
        r##"{"steps":[{"text":"# Hi"},{"text":"Bye","offset_seconds":2.5}]}"##.as_bytes(),
    )
    .unwrap();
    assert_eq!(n.steps[0].offset_seconds, None);
    assert_eq!(n.steps[1].offset_seconds, Some(2.5));
}

#[test]
fn serialized_untimed_step_omits_offset() {
    let s = serde_json::to_string(&Step::untimed("hello")).unwrap();
    assert!(!s.contains("offset_seconds"));
}
