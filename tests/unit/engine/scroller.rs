use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::driver::player::RecordingPlayer;
use crate::engine::host::StaticHost;
use crate::scroll::tracker::TriggerBounds;

const TRIGGER_TOP: f64 = 800.0;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn desktop_host(width: f64, height: f64) -> StaticHost {
    let host = StaticHost::new(Size::new(width, height));
    host.set_user_agent("Mozilla/5.0 (X11; Linux x86_64)");
    host
}

fn session(host: &StaticHost) -> Scroller<StaticHost> {
    Scroller::new(host.clone(), ScrollerConfig::default(), Narrative::sample()).unwrap()
}

/// Point the host's measured trigger at what the engine last requested.
fn sync_trigger(host: &StaticHost, scroller: &Scroller<StaticHost>) {
    host.set_trigger_bounds(TriggerBounds::new(TRIGGER_TOP, scroller.trigger_height_px()));
}

fn scroll_to(host: &StaticHost, scroller: &mut Scroller<StaticHost>, scroll_y: f64) {
    host.set_scroll_y(scroll_y);
    scroller.handle_scroll();
}

#[test]
fn mount_goes_ready_and_derives_everything() {
    let host = desktop_host(1280.0, 800.0);
    let mut scroller = session(&host);
    assert_eq!(scroller.phase(), Phase::Initializing);

    scroller.mount();

    assert_eq!(scroller.phase(), Phase::Ready);
    assert!(close(scroller.playback_constant(), 50.0));
    // 1280 / 1.78 = 719.1 < 800, so the surface is width-limited.
    let layout = scroller.layout();
    assert!(close(layout.render.width, 1280.0));
    assert!(close(layout.render.height, 1280.0 / 1.78));
    // 300 frames * 50 px/frame beats three viewport heights.
    assert!(close(scroller.trigger_height_px(), 15000.0));
}

#[test]
fn mount_with_unmeasurable_viewport_defers() {
    let host = desktop_host(0.0, 0.0);
    let mut scroller = session(&host);
    scroller.mount();
    assert_eq!(scroller.phase(), Phase::Initializing);
    assert!(scroller.scene().trigger.is_none());
}

#[test]
fn applied_resize_promotes_a_deferred_session() {
    let t0 = Instant::now();
    let host = desktop_host(0.0, 0.0);
    let mut scroller = session(&host);
    scroller.mount();

    host.set_viewport(Size::new(1280.0, 800.0));
    scroller.handle_resize_at(t0);
    scroller.tick_at(t0 + Duration::from_millis(100));
    assert_eq!(scroller.phase(), Phase::Initializing);
    scroller.tick_at(t0 + Duration::from_millis(250));
    assert_eq!(scroller.phase(), Phase::Ready);
    assert!(close(scroller.trigger_height_px(), 15000.0));
}

#[test]
fn handset_viewport_picks_the_small_pace() {
    let host = desktop_host(375.0, 667.0);
    let mut scroller = session(&host);
    scroller.mount();
    assert!(close(scroller.playback_constant(), 20.0));
    // 300 * 20 = 6000 still beats 3 * 667.
    assert!(close(scroller.trigger_height_px(), 6000.0));
}

#[test]
fn scroll_drives_the_player_through_the_trigger() {
    let host = desktop_host(1280.0, 800.0);
    let player = RecordingPlayer::new(300);
    let mut scroller = session(&host).with_player(player.clone());
    scroller.mount();
    scroller.on_player_ready();
    sync_trigger(&host, &scroller);

    // Range runs from 0 to 15800; halfway lands on frame 149.
    scroll_to(&host, &mut scroller, 7900.0);
    assert!(close(scroller.progress(), 0.5));
    assert_eq!(scroller.current_frame(), FrameIndex(149));
    assert_eq!(player.held_frame(), Some(FrameIndex(149)));
}

#[test]
fn player_ready_parks_on_frame_zero_then_redrives() {
    let host = desktop_host(1280.0, 800.0);
    let player = RecordingPlayer::new(300);
    let mut scroller = session(&host).with_player(player.clone());
    scroller.mount();
    sync_trigger(&host, &scroller);

    // Frames are suppressed entirely before the player reports in.
    scroll_to(&host, &mut scroller, 7900.0);
    assert!(player.seeks().is_empty());

    scroller.on_player_ready();
    assert_eq!(scroller.total_frames(), Some(300));
    assert_eq!(player.seeks(), vec![FrameIndex(0), FrameIndex(149)]);
}

#[test]
fn empty_and_missing_frame_reports_fall_back() {
    let host = desktop_host(1280.0, 800.0);
    let mut scroller = session(&host).with_player(RecordingPlayer::new(0));
    scroller.mount();
    scroller.on_player_ready();
    assert_eq!(scroller.total_frames(), Some(300));

    let mut scroller = session(&host).with_player(RecordingPlayer::unloaded());
    scroller.mount();
    scroller.on_player_ready();
    assert_eq!(scroller.total_frames(), Some(300));
}

#[test]
fn reaching_the_end_completes_exactly_once() {
    let calls = Rc::new(Cell::new(0u32));
    let seen = calls.clone();
    let host = desktop_host(1280.0, 800.0);
    let player = RecordingPlayer::new(300);
    let mut scroller = session(&host)
        .with_player(player.clone())
        .on_scroll_complete(move || seen.set(seen.get() + 1));
    scroller.mount();
    scroller.on_player_ready();
    sync_trigger(&host, &scroller);

    scroll_to(&host, &mut scroller, 15800.0);
    assert_eq!(scroller.phase(), Phase::Completed);
    assert_eq!(calls.get(), 1);
    assert_eq!(player.held_frame(), Some(FrameIndex(299)));
    // Settles to the last blurb offset (3.4 s * 30 * 50) plus one viewport.
    assert!(close(scroller.trigger_height_px(), 5900.0));

    // Further end signals never re-fire.
    sync_trigger(&host, &scroller);
    scroll_to(&host, &mut scroller, 15800.0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn scrolling_back_after_completion_moves_frames_but_nothing_else() {
    let host = desktop_host(1280.0, 800.0);
    let player = RecordingPlayer::new(300);
    let mut scroller = session(&host).with_player(player.clone());
    scroller.mount();
    scroller.on_player_ready();
    sync_trigger(&host, &scroller);
    scroll_to(&host, &mut scroller, 15800.0);
    assert!(scroller.has_completed());
    let settled = scroller.trigger_height_px();

    sync_trigger(&host, &scroller);
    // Settled range runs from 0 to 800 + 5900 = 6700.
    scroll_to(&host, &mut scroller, 3350.0);
    assert!(scroller.has_completed());
    assert!(close(scroller.progress(), 0.5));
    assert_eq!(player.held_frame(), Some(FrameIndex(149)));
    assert!(close(scroller.trigger_height_px(), settled));
}

#[test]
fn natural_completion_fires_both_callbacks_once() {
    let natural = Rc::new(Cell::new(0u32));
    let scroll = Rc::new(Cell::new(0u32));
    let natural_seen = natural.clone();
    let scroll_seen = scroll.clone();
    let host = desktop_host(1280.0, 800.0);
    let player = RecordingPlayer::new(300);
    let mut scroller = session(&host)
        .with_player(player.clone())
        .on_complete(move || natural_seen.set(natural_seen.get() + 1))
        .on_scroll_complete(move || scroll_seen.set(scroll_seen.get() + 1));
    scroller.mount();
    scroller.on_player_ready();

    scroller.on_player_complete();
    assert_eq!(scroller.phase(), Phase::Completed);
    assert_eq!(natural.get(), 1);
    assert_eq!(scroll.get(), 1);
    assert_eq!(player.held_frame(), Some(FrameIndex(299)));

    scroller.on_player_complete();
    assert_eq!(natural.get(), 1);
    assert_eq!(scroll.get(), 1);
}

#[test]
fn completion_works_without_a_player() {
    let calls = Rc::new(Cell::new(0u32));
    let seen = calls.clone();
    let host = desktop_host(1280.0, 800.0);
    let mut scroller = session(&host).on_scroll_complete(move || seen.set(seen.get() + 1));
    scroller.mount();
    sync_trigger(&host, &scroller);

    scroll_to(&host, &mut scroller, 15800.0);
    assert!(scroller.has_completed());
    assert_eq!(calls.get(), 1);
    assert_eq!(scroller.current_frame(), FrameIndex(0));
}

#[test]
fn resize_re_derives_pace_and_layout_after_settling() {
    let t0 = Instant::now();
    let host = desktop_host(1280.0, 800.0);
    let mut scroller = session(&host).with_player(RecordingPlayer::new(300));
    scroller.mount();
    scroller.on_player_ready();

    host.set_viewport(Size::new(375.0, 667.0));
    scroller.handle_resize_at(t0);
    scroller.handle_resize_at(t0 + Duration::from_millis(120));
    assert!(scroller.resize_pending());
    assert_eq!(
        scroller.time_until_resize(t0 + Duration::from_millis(220)),
        Some(Duration::from_millis(150))
    );

    // Still within the settle window of the second event.
    scroller.tick_at(t0 + Duration::from_millis(300));
    assert!(close(scroller.playback_constant(), 50.0));

    scroller.tick_at(t0 + Duration::from_millis(370));
    assert!(!scroller.resize_pending());
    assert!(close(scroller.playback_constant(), 20.0));
    let layout = scroller.layout();
    assert!(close(layout.width_ratio, 0.5625));
    assert!(close(layout.render.width, 375.0));
    assert!(close(scroller.trigger_height_px(), 6000.0));
}

#[test]
fn touch_handset_resize_changes_nothing() {
    let t0 = Instant::now();
    let host = desktop_host(1280.0, 800.0);
    host.set_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)");
    let mut scroller = session(&host);
    scroller.mount();
    let layout = scroller.layout();
    let pace = scroller.playback_constant();

    host.set_viewport(Size::new(375.0, 667.0));
    scroller.handle_resize_at(t0);
    scroller.tick_at(t0 + Duration::from_secs(1));

    assert_eq!(scroller.layout(), layout);
    assert!(close(scroller.playback_constant(), pace));
    assert!(close(scroller.trigger_height_px(), 15000.0));
}

#[test]
fn completed_sessions_keep_the_settled_trigger_through_resizes() {
    let t0 = Instant::now();
    let host = desktop_host(1280.0, 800.0);
    let mut scroller = session(&host).with_player(RecordingPlayer::new(300));
    scroller.mount();
    scroller.on_player_ready();
    sync_trigger(&host, &scroller);
    scroll_to(&host, &mut scroller, 15800.0);
    let settled = scroller.trigger_height_px();

    host.set_viewport(Size::new(1920.0, 1080.0));
    scroller.handle_resize_at(t0);
    scroller.tick_at(t0 + Duration::from_secs(1));

    // Surface tracks the viewport, the settled trigger does not move.
    assert!(close(scroller.layout().viewport.width, 1920.0));
    assert!(close(scroller.trigger_height_px(), settled));
}

#[test]
fn scroll_state_mirrors_the_session() {
    let host = desktop_host(1280.0, 800.0);
    let player = RecordingPlayer::new(300);
    let mut scroller = session(&host).with_player(player.clone());
    scroller.mount();
    scroller.on_player_ready();
    sync_trigger(&host, &scroller);
    scroll_to(&host, &mut scroller, 7900.0);

    let state = scroller.scroll_state();
    assert!(close(state.progress, 0.5));
    assert_eq!(state.current_frame, FrameIndex(149));
    assert!(!state.has_completed);
    assert!(close(state.trigger_height_px, 15000.0));

    scroll_to(&host, &mut scroller, 15800.0);
    let state = scroller.scroll_state();
    assert!(state.has_completed);
    assert!(close(state.trigger_height_px, 5900.0));
}

#[test]
fn scene_snapshots_the_session() {
    let host = desktop_host(1280.0, 800.0);
    let config = ScrollerConfig {
        aria_description: "animated mountain flyover".into(),
        ..ScrollerConfig::default()
    };
    let mut scroller = Scroller::new(host.clone(), config, Narrative::sample()).unwrap();
    scroller.mount();

    let scene = scroller.scene();
    assert_eq!(scene.aria_description, "animated mountain flyover");
    assert!(!scene.surface.has_animation);
    assert!(close(scene.surface.width, 1280.0));

    let trigger = scene.trigger.expect("ready sessions expose a trigger");
    assert!(close(trigger.height, 15000.0));
    assert!(!trigger.settling);
    assert_eq!(trigger.blurbs.len(), 6);
    // Second sample step sits at 1.2 s * 30 * 50.
    assert!(close(trigger.blurbs[1].top, 1800.0));
    assert!(trigger.blurbs[0].markup.contains("<h1>"));
}

struct VerbatimMarkup;

impl MarkupRenderer for VerbatimMarkup {
    fn render(&self, source: &str) -> String {
        source.to_string()
    }
}

#[test]
fn a_replaced_renderer_supplies_the_blurb_markup() {
    let host = desktop_host(1280.0, 800.0);
    let mut scroller = session(&host).with_markup(VerbatimMarkup);
    scroller.mount();

    let trigger = scroller.scene().trigger.expect("ready sessions expose a trigger");
    assert!(trigger.blurbs[0].markup.starts_with("# The Ascent Begins"));
    assert!(!trigger.blurbs[0].markup.contains("<h1>"));
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let host = desktop_host(1280.0, 800.0);
    let config = ScrollerConfig {
        playback_constant: 0.0,
        ..ScrollerConfig::default()
    };
    assert!(Scroller::new(host, config, Narrative::sample()).is_err());
}
