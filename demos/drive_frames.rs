use scrolly::{
    Narrative, RecordingPlayer, Scroller, ScrollerConfig, Size, StaticHost, TriggerBounds,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/steps.json");
    let narrative: Narrative = serde_json::from_str(s)?;

    let host = StaticHost::new(Size::new(1280.0, 800.0));
    let player = RecordingPlayer::new(300);
    let mut scroller = Scroller::new(host.clone(), ScrollerConfig::default(), narrative)?
        .with_player(player.clone())
        .on_scroll_complete(|| println!("story completed"));
    scroller.mount();
    scroller.on_player_ready();
    host.set_trigger_bounds(TriggerBounds::new(800.0, scroller.trigger_height_px()));

    for y in [0.0, 3950.0, 7900.0, 11850.0, 15800.0] {
        host.set_scroll_y(y);
        scroller.handle_scroll();
        println!(
            "scroll {y}: frame {} of {:?}",
            scroller.current_frame().0,
            scroller.total_frames()
        );
    }

    println!("seeks recorded: {}", player.seeks().len());
    Ok(())
}
