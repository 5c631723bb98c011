use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use scrolly::{
    Narrative, RecordingPlayer, Scroller, ScrollerConfig, Size, StaticHost, TimelineScale,
    TriggerBounds, render_page,
};

#[derive(Parser, Debug)]
#[command(name = "scrolly", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print per-step blurb offsets and trigger extents for a viewport.
    Offsets(OffsetsArgs),
    /// Drive a synthetic scroll session and print the frame timeline.
    Simulate(SimulateArgs),
    /// Write the static HTML scaffold for a narrative.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct OffsetsArgs {
    /// Narrative steps JSON (defaults to the built-in sample).
    #[arg(long)]
    steps: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT in pixels.
    #[arg(long, default_value = "1280x800")]
    viewport: String,

    /// Frame count of the animation timeline.
    #[arg(long, default_value_t = scrolly::DEFAULT_TOTAL_FRAMES)]
    total_frames: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Narrative steps JSON (defaults to the built-in sample).
    #[arg(long)]
    steps: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT in pixels.
    #[arg(long, default_value = "1280x800")]
    viewport: String,

    /// Frame count the synthetic player reports.
    #[arg(long, default_value_t = 300)]
    total_frames: u64,

    /// Scroll increment between samples, in pixels.
    #[arg(long, default_value_t = 1000.0)]
    step_px: f64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Narrative steps JSON (defaults to the built-in sample).
    #[arg(long)]
    steps: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT in pixels.
    #[arg(long, default_value = "1280x800")]
    viewport: String,

    /// Scroll position to pose the session at, in pixels.
    #[arg(long, default_value_t = 0.0)]
    scroll_y: f64,

    /// Hidden description of the animation for assistive technology.
    #[arg(long, default_value = "")]
    describe: String,

    /// Fill the viewport instead of letterboxing the surface.
    #[arg(long, default_value_t = false)]
    full_frame: bool,

    /// Output HTML path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Offsets(args) => cmd_offsets(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_narrative(path: Option<&Path>) -> anyhow::Result<Narrative> {
    match path {
        Some(path) => Ok(Narrative::from_path(path)?),
        None => Ok(Narrative::sample()),
    }
}

fn parse_viewport(s: &str) -> anyhow::Result<Size> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("viewport '{s}' must be WIDTHxHEIGHT"))?;
    let width: f64 = w.trim().parse().with_context(|| format!("viewport width '{w}'"))?;
    let height: f64 = h.trim().parse().with_context(|| format!("viewport height '{h}'"))?;
    anyhow::ensure!(
        width > 0.0 && height > 0.0,
        "viewport dimensions must be positive"
    );
    Ok(Size::new(width, height))
}

#[derive(serde::Serialize)]
struct OffsetsReport {
    viewport_width: f64,
    viewport_height: f64,
    playback_constant: f64,
    offsets_px: Vec<f64>,
    trigger_height_px: f64,
    settled_height_px: Option<f64>,
}

fn cmd_offsets(args: OffsetsArgs) -> anyhow::Result<()> {
    let narrative = load_narrative(args.steps.as_deref())?;
    let viewport = parse_viewport(&args.viewport)?;
    let config = ScrollerConfig::default();
    let playback_constant = config.playback_constant_for(viewport.width);
    let scale = TimelineScale::new(args.total_frames as f64, playback_constant);

    let offsets = scale.resolve_offsets(&narrative);
    let trigger_height = scale.trigger_extent_px(viewport.height);
    let settled_height = scale.settle_extent_px(&narrative, viewport.height);

    match args.format {
        Format::Text => {
            for (index, (step, offset)) in narrative.steps.iter().zip(&offsets).enumerate() {
                let source = match step.effective_offset_seconds() {
                    Some(seconds) => format!("timed {seconds}s"),
                    None => "spread".to_string(),
                };
                println!("step {index}: top={offset:.1}px ({source})");
            }
            println!("playback_constant: {playback_constant}");
            println!("trigger_height: {trigger_height:.1}px");
            if let Some(settled) = settled_height {
                println!("settled_height: {settled:.1}px");
            }
        }
        Format::Json => {
            let report = OffsetsReport {
                viewport_width: viewport.width,
                viewport_height: viewport.height,
                playback_constant,
                offsets_px: offsets,
                trigger_height_px: trigger_height,
                settled_height_px: settled_height,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.step_px > 0.0, "step-px must be positive");
    let narrative = load_narrative(args.steps.as_deref())?;
    let viewport = parse_viewport(&args.viewport)?;

    let host = StaticHost::new(viewport);
    let player = RecordingPlayer::new(args.total_frames);
    let mut scroller = Scroller::new(host.clone(), ScrollerConfig::default(), narrative)?
        .with_player(player.clone())
        .on_scroll_complete(|| println!("event: story completed"))
        .on_complete(|| println!("event: player completed"));
    scroller.mount();
    scroller.on_player_ready();

    // The trigger sits one viewport down, as if below a full-screen intro.
    let trigger_top = viewport.height;
    host.set_trigger_bounds(TriggerBounds::new(trigger_top, scroller.trigger_height_px()));

    let end = trigger_top + scroller.trigger_height_px();
    let mut scroll_y: f64 = 0.0;
    loop {
        let sample = scroll_y.min(end);
        host.set_scroll_y(sample);
        scroller.handle_scroll();
        println!(
            "scroll_y={sample:.0} progress={:.3} frame={}",
            scroller.progress(),
            scroller.current_frame().0
        );
        if scroller.has_completed() || sample >= end {
            break;
        }
        scroll_y += args.step_px;
    }

    println!("seeks: {}", player.seeks().len());
    println!("final_trigger_height: {:.1}px", scroller.trigger_height_px());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let narrative = load_narrative(args.steps.as_deref())?;
    let viewport = parse_viewport(&args.viewport)?;
    let config = ScrollerConfig {
        aria_description: args.describe,
        full_frame: args.full_frame,
        ..ScrollerConfig::default()
    };

    let host = StaticHost::new(viewport);
    let mut scroller = Scroller::new(host.clone(), config, narrative)?;
    scroller.mount();
    host.set_trigger_bounds(TriggerBounds::new(viewport.height, scroller.trigger_height_px()));
    if args.scroll_y > 0.0 {
        host.set_scroll_y(args.scroll_y);
        scroller.handle_scroll();
    }

    let page = render_page(&scroller.scene());
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, page).with_context(|| format!("write html '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}
